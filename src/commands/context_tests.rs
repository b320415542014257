use tempfile::TempDir;

use crate::config::ConfigSource;
use crate::visualization::VisualizationType;

use super::*;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_uses_builtin_even_with_path() {
    let result = load_limits(Some(Path::new("does-not-exist.toml")), true).unwrap();
    assert_eq!(result.source, ConfigSource::Preset("default".to_string()));
}

#[test]
fn explicit_path_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("limits.toml");
    fs::write(
        &path,
        "version = \"1\"\n\n[charts.pie_chart]\nfirst_multiselect_size = \"2-3\"\n",
    )
    .unwrap();

    let result = load_limits(Some(&path), false).unwrap();
    assert_eq!(result.source, ConfigSource::File(path));
    assert_eq!(
        result
            .limits
            .get(VisualizationType::PieChart)
            .first_multiselect_size
            .to_string(),
        "2-3"
    );
}

#[test]
fn missing_explicit_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_limits(Some(&temp_dir.path().join("missing.toml")), false);
    assert!(result.is_err());
}

#[test]
fn write_output_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("report.txt");

    write_output(Some(&path), "content\n", false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "content\n");
}

#[test]
fn write_output_to_file_ignores_quiet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    write_output(Some(&path), "{}", true).unwrap();

    assert!(path.exists());
}

#[test]
fn trailing_newline_added_once() {
    assert_eq!(with_trailing_newline("a".to_string()), "a\n");
    assert_eq!(with_trailing_newline("a\n".to_string()), "a\n");
}
