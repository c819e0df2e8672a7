use crate::error::{AssessError, Result};
use crate::types::config::AssessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "assess.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".assess/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/deploy-assess/config.toml";

/// Loads configuration for an assessment rooted at `root`, layering the
/// global file, `assess.toml` and `.assess/local.toml` in that order.
/// Missing files contribute nothing; no files at all yields the defaults.
pub fn load_config(root: &Path) -> Result<AssessConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Config sources in precedence order; later layers override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigLayer {
    Global,
    Project,
    Local,
}

impl ConfigLayer {
    fn as_str(self) -> &'static str {
        match self {
            ConfigLayer::Global => "global",
            ConfigLayer::Project => "project",
            ConfigLayer::Local => "local",
        }
    }
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<AssessConfig> {
    let mut layers = Vec::with_capacity(3);
    if let Some(path) = global_path {
        layers.push((ConfigLayer::Global, path.to_path_buf()));
    }
    layers.push((ConfigLayer::Project, root.join(DEFAULT_CONFIG_FILE)));
    layers.push((ConfigLayer::Local, root.join(DEFAULT_LOCAL_FILE)));

    let mut merged = Value::Table(Map::new());
    for (layer, path) in &layers {
        if let Some(overlay) = read_layer(*layer, path)? {
            overlay_settings(&mut merged, overlay);
        }
    }

    let cfg: AssessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Reads one layer; an absent file contributes nothing.
fn read_layer(layer: ConfigLayer, path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }
    debug!(layer = layer.as_str(), path = %path.display(), "applying config layer");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map(Some).map_err(|e| {
        AssessError::ConfigParse(format!(
            "{} config {}: {}",
            layer.as_str(),
            path.display(),
            e
        ))
    })
}

/// Tables merge key by key; any other value (arrays included) replaces the
/// lower layer's value outright.
fn overlay_settings(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(existing) = base_table.get_mut(&key) {
                    overlay_settings(existing, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use crate::types::config::{RangePolicy, DEFAULT_ASSESSOR};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.assessment.assessor, DEFAULT_ASSESSOR);
        assert_eq!(cfg.range_policy(), RangePolicy::Reject);
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[assessment]
assessor = "Global Assessor"

[report]
format = "json"
references = ["global.md"]
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[assessment]
organization = "Water Division"

[report]
references = ["case-studies/utility.md"]
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".assess")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[ratings]
out_of_range = "clamp"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.assessment.assessor, "Global Assessor");
        assert_eq!(
            cfg.assessment.organization.as_deref(),
            Some("Water Division")
        );
        assert_eq!(cfg.output_format(), OutputFormat::Json);
        assert_eq!(cfg.report.references, vec!["case-studies/utility.md"]);
        assert_eq!(cfg.range_policy(), RangePolicy::Clamp);
    }

    #[test]
    fn load_config_reports_the_broken_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[assessment\n")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, AssessError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_names_the_layer_that_failed_to_parse() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[assessment]\n")
            .expect("project config should write");
        fs::create_dir_all(root.path().join(".assess")).expect("local dir should create");
        fs::write(root.path().join(DEFAULT_LOCAL_FILE), "out_of_range = \n")
            .expect("broken local override should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        let message = err.to_string();
        assert!(message.contains("local config"), "{message}");
        assert!(message.contains("local.toml"), "{message}");
    }

    #[test]
    fn overlay_settings_replaces_arrays_and_merges_tables() {
        let mut base: Value = toml::from_str(
            "[report]\nformat = \"md\"\nreferences = [\"a.md\", \"b.md\"]\n",
        )
        .expect("base should parse");
        let overlay: Value =
            toml::from_str("[report]\nreferences = [\"c.md\"]\n").expect("overlay should parse");
        overlay_settings(&mut base, overlay);

        let report = base.get("report").expect("report table should remain");
        assert_eq!(report.get("format").and_then(Value::as_str), Some("md"));
        let references = report
            .get("references")
            .and_then(Value::as_array)
            .expect("references should be an array");
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].as_str(), Some("c.md"));
    }

    #[test]
    fn load_config_validates_merged_result() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
references = [" "]
"#,
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("validation should fail");
        assert!(err.to_string().contains("report.references[0]"));
    }
}
