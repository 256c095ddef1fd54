use crate::error::{DiiError, Result};
use crate::types::config::DiiConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "dii.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/dii/config.toml";

/// Loads the global config and then either `explicit` (which must exist) or
/// `dii.toml` in the working directory, later layers winning.
pub fn load_config(explicit: Option<&Path>) -> Result<DiiConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));

    let local = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DiiError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    load_config_layers(global.as_deref(), &local)
}

pub(crate) fn load_config_layers(global_path: Option<&Path>, local_path: &Path) -> Result<DiiConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, local_path)?;

    let cfg: DiiConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DiiError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "reading config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DiiError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SourceHint;
    use crate::types::config::{ReportFormatSetting, DEFAULT_TOP};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_yield_default_config() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_layers(None, &dir.path().join(DEFAULT_CONFIG_FILE))
            .expect("load should not fail");
        assert_eq!(cfg.top(), DEFAULT_TOP);
        assert_eq!(cfg.source(), SourceHint::Auto);
    }

    #[test]
    fn local_layer_overrides_global_per_key() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let local_path = root.path().join(DEFAULT_CONFIG_FILE);

        fs::write(
            &global_path,
            r#"
[report]
format = "json"
top = 3

[interpretation]
pro_inflammatory_from = 2.0
"#,
        )
        .expect("global config should write");

        fs::write(
            &local_path,
            r#"
[input]
source = "cronometer"

[report]
top = 7
"#,
        )
        .expect("local config should write");

        let cfg = load_config_layers(Some(&global_path), &local_path).expect("load should succeed");

        assert_eq!(cfg.source(), SourceHint::Cronometer);
        assert_eq!(cfg.format(), Some(ReportFormatSetting::Json));
        assert_eq!(cfg.top(), 7);
        assert_eq!(cfg.thresholds().pro_inflammatory_from, 2.0);
    }

    #[test]
    fn invalid_layer_reports_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[report\n").expect("broken config should write");

        let err = load_config_layers(None, &path).expect_err("broken toml should fail");
        assert!(matches!(err, DiiError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_config(Some(&dir.path().join("nope.toml"))).expect_err("should fail");
        assert!(matches!(err, DiiError::PathNotFound(_)));
    }
}
