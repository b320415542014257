use tempfile::TempDir;

use crate::cli::InitArgs;
use crate::config::{load_preset, parse_config, resolve_limits};

use super::*;

#[test]
fn template_documents_limit_syntax() {
    let template = generate_config_template().unwrap();
    assert!(template.starts_with("# px-chart-rules limits file"));
    assert!(template.contains("\"not allowed\"  the count must be zero"));
    assert!(template.contains("version = \"1\""));
    assert!(template.contains("[charts.key_figure]"));
}

#[test]
fn template_resolves_to_default_preset() {
    let template = generate_config_template().unwrap();
    let config = parse_config(&template).unwrap();
    assert_eq!(
        resolve_limits(&config).unwrap(),
        load_preset(DEFAULT_PRESET).unwrap()
    );
}

#[test]
fn run_init_creates_limits_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".px-chart-rules.toml");
    let args = InitArgs {
        output: path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[charts.line_chart]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".px-chart-rules.toml");
    fs::write(&path, "# mine\n").unwrap();
    let args = InitArgs {
        output: path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".px-chart-rules.toml");
    fs::write(&path, "# mine\n").unwrap();
    let args = InitArgs {
        output: path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(fs::read_to_string(&path).unwrap().contains("version = \"1\""));
}

#[test]
fn run_init_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: temp_dir.path().join("missing").join("limits.toml"),
        force: false,
    };
    assert!(run_init_impl(&args).is_err());
}
