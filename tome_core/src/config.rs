use std::path::Path;

use serde::Deserialize;

use crate::TomeError;
use crate::TomeResult;

/// Configuration loaded from a `tome.toml` file.
///
/// ```toml
/// class = "page"
/// markdownFields = ["description", "short_description"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomeConfig {
	/// Default document-class filter used when the CLI is not given one.
	#[serde(default)]
	pub class: Option<String>,
	/// Field names rendered to HTML through the markdown renderer after
	/// catalog assembly.
	#[serde(default, rename = "markdownFields")]
	pub markdown_fields: Vec<String>,
}

impl TomeConfig {
	/// Load the config from `tome.toml` at the given root directory.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> TomeResult<Option<TomeConfig>> {
		let config_path = root.join("tome.toml");

		if !config_path.exists() {
			return Ok(None);
		}

		let content = std::fs::read_to_string(&config_path)?;
		let config: TomeConfig =
			toml::from_str(&content).map_err(|e| TomeError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}
