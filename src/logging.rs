use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::stderr_buffer::BufferedStderr;

/// Default filter: warnings only, or debug for this crate with `--verbose`.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,tawjihi_calc=debug,tawjihi=debug"
    } else {
        "warn"
    }
}

/// Initialize the global logger. `RUST_LOG` overrides the default filter.
///
/// Output goes through the stderr buffer so the interactive form can hold
/// log lines until the terminal is restored.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder
        .target(Target::Pipe(Box::new(BufferedStderr)))
        .format_timestamp(None);
    if verbose {
        builder.filter_module("genpdf", LevelFilter::Warn);
    }
    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("tawjihi_calc=debug"));
    }

    #[test]
    fn test_init_twice_is_ok() {
        init(false);
        init(true);
    }
}
