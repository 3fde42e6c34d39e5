use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tawjihi_calc::export::ExportOutcome;
use tawjihi_calc::{CalcError, CertificateExporter, Locale, ScoreModel, Translator};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_EXPORT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive score form (default if no subcommand)
    Form,
    /// Calculate a result from scores given on the command line
    Calc {
        /// Score for one subject, e.g. `-s english=80` (repeatable; missing subjects count as 0)
        #[arg(short, long = "score", value_name = "SUBJECT=VALUE")]
        scores: Vec<String>,

        /// Student name printed on the certificate
        #[arg(short, long)]
        name: Option<String>,

        /// Write a certificate (PDF, or text if PDF is unavailable)
        #[arg(short, long)]
        export: bool,

        /// Open the exported certificate in the default viewer
        #[arg(long, requires = "export")]
        open: bool,

        /// Language for this run only (en or ar)
        #[arg(short, long)]
        lang: Option<Locale>,
    },
    /// Show or change the saved display language
    Lang {
        /// New language to save (en or ar)
        locale: Option<Locale>,

        /// Switch to the other language
        #[arg(long, conflicts_with = "locale")]
        toggle: bool,
    },
    /// List subjects and their maximum marks
    Subjects,
}

#[derive(Parser, Debug)]
#[command(name = "tawjihi")]
#[command(about = "Tawjihi first-year percentage calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tawjihi/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tawjihi_calc::logging::init(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Form);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match tawjihi_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate the subject catalog at startup
    let catalog = config.catalog();
    if let Err(errors) = tawjihi_calc::scoring::validate_catalog(&catalog) {
        eprintln!("Subject catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    log::debug!("Loaded {} subjects", catalog.len());

    let prefs_path = match tawjihi_calc::preferences::get_preferences_path() {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("Language preference disabled: {:#}", e);
            None
        }
    };
    let env_lang = std::env::var("LANG").ok();
    let locale = match prefs_path {
        Some(ref path) => tawjihi_calc::preferences::resolve_locale(
            path,
            config.locale,
            env_lang.as_deref(),
            Utc::now(),
        ),
        None => config
            .locale
            .unwrap_or_else(|| Locale::from_env_lang(env_lang.as_deref().unwrap_or(""))),
    };
    log::debug!("Locale: {}", locale);

    let model = ScoreModel::new(&catalog);
    let exporter = CertificateExporter::from_config(&config);

    match command {
        Commands::Form => {
            let app = tawjihi_calc::tui::App::new(model, locale, prefs_path);
            if let Err(e) = tawjihi_calc::tui::run_tui(app, exporter).await {
                eprintln!("Terminal error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Calc {
            scores,
            name,
            export,
            open,
            lang,
        } => {
            let mut model = model;
            for entry in &scores {
                let Some((subject, value)) = entry.split_once('=') else {
                    eprintln!("Invalid score '{}': expected SUBJECT=VALUE", entry);
                    std::process::exit(EXIT_INPUT);
                };
                let subject = subject.trim();
                match model.set_score(subject, value) {
                    Ok(stored) => log::debug!("{} = {}", subject, stored),
                    Err(e) => {
                        eprintln!("{}", e);
                        let known: Vec<_> = model.subjects().iter().map(|s| s.name.as_str()).collect();
                        eprintln!("Known subjects: {}", known.join(", "));
                        std::process::exit(EXIT_INPUT);
                    }
                }
            }

            let result = match model.calculate() {
                Ok(r) => r,
                Err(e @ CalcError::InvalidConfiguration(_)) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_CONFIG);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let locale = lang.unwrap_or(locale);
            let translator = Translator::new(locale);
            let use_colors = tawjihi_calc::output::should_use_colors();
            println!(
                "{}",
                tawjihi_calc::output::format_subject_table(model.subjects(), &translator, use_colors)
            );
            println!();
            println!(
                "{}",
                tawjihi_calc::output::format_result(&result, &translator, use_colors)
            );

            if export {
                let student_name = name.unwrap_or_default();
                let outcome = exporter
                    .export(model.subjects(), &result, locale, &student_name)
                    .await;
                println!();
                println!("{}", outcome.message(&translator));

                match outcome {
                    ExportOutcome::Succeeded(artifact) => {
                        if open {
                            if let Err(e) = tawjihi_calc::browser::open_file(&artifact.path) {
                                eprintln!("{:#}", e);
                            }
                        }
                    }
                    ExportOutcome::Failed { .. } => std::process::exit(EXIT_EXPORT),
                }
            }
        }
        Commands::Lang { locale: new_locale, toggle } => {
            let target = if toggle {
                Some(locale.toggle())
            } else {
                new_locale
            };

            match target {
                None => println!("{}", locale),
                Some(target) => {
                    let Some(ref path) = prefs_path else {
                        eprintln!("Cannot save language: no home directory");
                        std::process::exit(EXIT_CONFIG);
                    };
                    if let Err(e) = tawjihi_calc::preferences::save_preference(path, target, Utc::now()) {
                        eprintln!("Failed to save language: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                    println!("{}", Translator::new(target).t("language_switched"));
                }
            }
        }
        Commands::Subjects => {
            println!(
                "{}",
                tawjihi_calc::output::format_catalog(model.subjects(), &Translator::new(locale))
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
