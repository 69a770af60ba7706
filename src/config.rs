use crate::error::{PlannerError, Result};
use crate::types::config::PlannerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "planner.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".planner/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/study-planner/config.toml";

/// Loads the layered config rooted at `root`. `explicit` replaces `root/planner.toml`
/// and must exist.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PlannerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<PlannerConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(PlannerError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let project_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PlannerConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PlannerError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PlannerError::ConfigParse(format!("{}: {}", path.display(), e)))
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
    use crate::types::config::OutputFormatSetting;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_files_yield_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg.default_total_hours(), 8.0);
        assert_eq!(cfg.output_format(), OutputFormatSetting::Table);
    }

    #[test]
    fn merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[defaults]
total_hours = 6.0
num_subjects = 4

[output]
chart_width = 20
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[defaults]
total_hours = 10.0

[output]
format = "md"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".planner")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
format = "json"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.default_total_hours(), 10.0);
        assert_eq!(cfg.default_num_subjects(), 4);
        assert_eq!(cfg.chart_width(), 20);
        assert_eq!(cfg.output_format(), OutputFormatSetting::Json);
    }

    #[test]
    fn explicit_path_replaces_project_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[defaults]\ntotal_hours = 10.0\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("other.toml");
        fs::write(&explicit, "[defaults]\ntotal_hours = 5.0\n").expect("explicit should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed");
        assert_eq!(cfg.default_total_hours(), 5.0);
    }

    #[test]
    fn explicit_path_must_exist() {
        let root = TempDir::new().expect("root temp dir should be created");
        let missing = root.path().join("missing.toml");
        let err = load_config_with_global(root.path(), Some(&missing), None)
            .expect_err("missing explicit config should fail");
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\nchart_width = 5\n",
        )
        .expect("project config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("chart width below 10 should fail");
        assert!(matches!(err, PlannerError::ConfigParse(_)));
    }
}
