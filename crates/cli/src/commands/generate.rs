//! Generate command implementation
//!
//! Reads flag configuration from a file or the provider API, compiles it and
//! writes the generated flag table. The output file is only touched once the
//! whole table has been rendered.

use crate::error::{CliError, CliResult};
use crate::generator::generator_for;
use crate::source::api::{resolve_api_key, DEFAULT_API_URL};
use crate::source::{self, ApiSource, ConfigSource};
use crate::utils::config::{self, Settings, DEFAULT_LANGUAGE, DEFAULT_OUTPUT};
use chrono::Utc;
use flagtable_compiler::compile_flags;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Options {
    pub file: Option<String>,
    pub api: bool,
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub output: Option<String>,
    pub lang: Option<String>,
}

/// What a successful run produced
#[derive(Debug)]
pub struct Summary {
    pub flag_count: usize,
    pub source_label: String,
    pub output_path: PathBuf,
}

fn determine_source(options: &Options, settings: &Settings) -> CliResult<ConfigSource> {
    if options.api {
        let url = options
            .api_url
            .clone()
            .or_else(|| settings.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_key = resolve_api_key(options.api_key.as_deref())?;
        return Ok(ConfigSource::Api(ApiSource { url, api_key }));
    }

    options
        .file
        .as_ref()
        .or(settings.file.as_ref())
        .map(|file| ConfigSource::File(PathBuf::from(file)))
        .ok_or_else(|| {
            CliError::Message("Either --file <path> or --api must be provided".to_string())
        })
}

fn determine_output_path(options: &Options, settings: &Settings) -> PathBuf {
    PathBuf::from(
        options
            .output
            .as_deref()
            .or(settings.output.as_deref())
            .unwrap_or(DEFAULT_OUTPUT),
    )
}

fn determine_language(options: &Options, settings: &Settings) -> String {
    options
        .lang
        .clone()
        .or_else(|| settings.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(summary) => {
            println!("✓ Flag table generated");
            println!(
                "  {} flag(s) from {}",
                summary.flag_count, summary.source_label
            );
            println!("  Wrote {}", summary.output_path.display());
            0
        }
        Err(e) => {
            eprintln!("✗ Flag table generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<Summary> {
    let settings = config::read_settings()?;
    let source = determine_source(options, &settings)?;
    let output_path = determine_output_path(options, &settings);
    let generator = generator_for(&determine_language(options, &settings))?;

    let fetched = source::fetch(&source)?;
    let flags = compile_flags(fetched.raw)?;
    let content = generator.render(&flags, &fetched.label, Utc::now())?;

    write_output(&output_path, &content)?;
    tracing::info!(path = %output_path.display(), flags = flags.len(), "wrote flag table");

    Ok(Summary {
        flag_count: flags.len(),
        source_label: fetched.label,
        output_path,
    })
}

fn write_output(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::Message(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    fs::write(path, content)
        .map_err(|e| CliError::Message(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::api::API_KEY_ENV;
    use crate::test_helpers::DirGuard;
    use flagtable_compiler::{CompilerError, ShapeError};
    use serial_test::serial;
    use tempfile::TempDir;

    fn options() -> Options {
        Options {
            file: None,
            api: false,
            api_key: None,
            api_url: None,
            output: None,
            lang: None,
        }
    }

    const DARK_MODE: &str = r#"{
  "flags": {
    "dark-mode": {
      "variationType": "BOOLEAN",
      "variations": {
        "on": {"key": "on", "value": "true"},
        "off": {"key": "off", "value": "false"}
      }
    }
  }
}"#;

    #[test]
    fn test_determine_source_requires_file_or_api() {
        let err = determine_source(&options(), &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("--file"));
    }

    #[test]
    fn test_determine_source_file_precedence() {
        let settings = Settings {
            file: Some("from-settings.json".to_string()),
            ..Settings::default()
        };
        let source = determine_source(&options(), &settings).unwrap();
        assert_eq!(source, ConfigSource::File(PathBuf::from("from-settings.json")));

        let opts = Options {
            file: Some("from-cli.yaml".to_string()),
            ..options()
        };
        let source = determine_source(&opts, &settings).unwrap();
        assert_eq!(source, ConfigSource::File(PathBuf::from("from-cli.yaml")));
    }

    #[test]
    fn test_determine_source_api() {
        let settings = Settings {
            api_url: Some("http://localhost:1234/flags".to_string()),
            file: Some("ignored.json".to_string()),
            ..Settings::default()
        };
        let opts = Options {
            api: true,
            api_key: Some("key".to_string()),
            ..options()
        };

        match determine_source(&opts, &settings).unwrap() {
            ConfigSource::Api(api) => {
                assert_eq!(api.url, "http://localhost:1234/flags");
                assert_eq!(api.api_key, "key");
            }
            other => panic!("Expected API source, got {other:?}"),
        }

        let source = determine_source(&opts, &Settings::default()).unwrap();
        assert_eq!(source.label(), DEFAULT_API_URL);
    }

    #[test]
    #[serial]
    fn test_determine_source_api_without_key() {
        std::env::remove_var(API_KEY_ENV);
        let opts = Options {
            api: true,
            ..options()
        };
        assert!(matches!(
            determine_source(&opts, &Settings::default()),
            Err(CliError::MissingCredential(_))
        ));
    }

    #[test]
    fn test_determine_output_path_and_language() {
        let settings = Settings {
            output: Some("src/flags.ts".to_string()),
            language: Some("ts".to_string()),
            ..Settings::default()
        };
        assert_eq!(
            determine_output_path(&options(), &Settings::default()),
            PathBuf::from(DEFAULT_OUTPUT)
        );
        assert_eq!(
            determine_output_path(&options(), &settings),
            PathBuf::from("src/flags.ts")
        );
        let opts = Options {
            output: Some("out.ts".to_string()),
            lang: Some("typescript".to_string()),
            ..options()
        };
        assert_eq!(determine_output_path(&opts, &settings), PathBuf::from("out.ts"));
        assert_eq!(determine_language(&opts, &settings), "typescript");
        assert_eq!(determine_language(&options(), &settings), "ts");
        assert_eq!(
            determine_language(&options(), &Settings::default()),
            DEFAULT_LANGUAGE
        );
    }

    #[test]
    #[serial]
    fn test_run_inner_writes_default_output() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        fs::write("flags.json", DARK_MODE).unwrap();

        let opts = Options {
            file: Some("flags.json".to_string()),
            ..options()
        };
        let summary = run_inner(&opts).unwrap();
        assert_eq!(summary.flag_count, 1);
        assert_eq!(summary.output_path, PathBuf::from(DEFAULT_OUTPUT));

        let content = fs::read_to_string(DEFAULT_OUTPUT).unwrap();
        assert!(content.contains("// Source: flags.json"));
        assert!(content.contains(r#""DARK_MODE": {"#));
        assert!(content.contains(r#"{ "key": "on", "value": true },"#));
    }

    #[test]
    #[serial]
    fn test_run_inner_creates_output_directories() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        fs::write("flags.json", DARK_MODE).unwrap();

        let opts = Options {
            file: Some("flags.json".to_string()),
            output: Some("src/generated/flags.ts".to_string()),
            ..options()
        };
        run_inner(&opts).unwrap();
        assert!(Path::new("src/generated/flags.ts").exists());
    }

    #[test]
    #[serial]
    fn test_run_inner_empty_config_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        fs::write("flags.json", r#"{"flags": {}}"#).unwrap();
        fs::write(DEFAULT_OUTPUT, "// previous run\n").unwrap();

        let opts = Options {
            file: Some("flags.json".to_string()),
            ..options()
        };
        let err = run_inner(&opts).unwrap_err();
        assert!(matches!(
            err,
            CliError::Compiler(CompilerError::Shape(ShapeError::Empty))
        ));
        assert_eq!(
            fs::read_to_string(DEFAULT_OUTPUT).unwrap(),
            "// previous run\n"
        );
    }

    #[test]
    #[serial]
    fn test_run_inner_unsupported_language_fails_before_reading() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();

        let opts = Options {
            file: Some("missing.json".to_string()),
            lang: Some("python".to_string()),
            ..options()
        };
        let err = run_inner(&opts).unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));
    }

    #[test]
    #[serial]
    fn test_run_returns_exit_codes() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        fs::write("flags.yaml", "flags:\n  beta:\n    variationType: STRING\n").unwrap();

        let ok = Options {
            file: Some("flags.yaml".to_string()),
            ..options()
        };
        assert_eq!(run(&ok), 0);

        let missing = Options {
            file: Some("nope.yaml".to_string()),
            ..options()
        };
        assert_eq!(run(&missing), 1);
    }
}
