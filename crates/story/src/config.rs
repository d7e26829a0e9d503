use std::path::Path;

use anyhow::Context as _;
use gpui_reorder_list::ReorderConfig;

pub const CONFIG_FILE: &str = "reorder.json";

/// Load the list configuration from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> anyhow::Result<ReorderConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ReorderConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let config: ReorderConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    Ok(config)
}
