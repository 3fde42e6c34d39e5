pub mod formatter;

pub use formatter::{format_catalog, format_result, format_subject_table, should_use_colors};
