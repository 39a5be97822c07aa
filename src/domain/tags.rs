use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// One pill in the cloud: label plus CSS colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDef {
    pub text: String,
    /// Pill fill
    pub color: String,
    pub text_color: String,
}

impl TagDef {
    pub fn new(text: &str, color: &str, text_color: &str) -> Self {
        Self {
            text: text.to_string(),
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }

    /// Visible characters, used for sizing
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Parse `[{"text": ..., "color": ..., "textColor": ...}, ...]`.
pub fn tags_from_json(json: &str) -> Result<Vec<TagDef>> {
    let tags: Vec<TagDef> =
        serde_json::from_str(json).map_err(|e| EngineError::InvalidTagJson(e.to_string()))?;
    validate_tags(&tags)?;
    Ok(tags)
}

/// Every label must contain something besides whitespace.
pub fn validate_tags(tags: &[TagDef]) -> Result<()> {
    match tags.iter().position(|t| t.text.trim().is_empty()) {
        Some(index) => Err(EngineError::EmptyLabel { index }),
        None => Ok(()),
    }
}

const DARK: &str = "#1C2128";
const LIGHT: &str = "#FFFFFF";

/// The tag set shown on the home page.
pub fn default_tags() -> Vec<TagDef> {
    vec![
        TagDef::new("Wordpress", "#9AFEBA", DARK),
        TagDef::new("Diseño", "#FFF863", DARK),
        TagDef::new("G-sap", "#111111", LIGHT),
        TagDef::new("Startup", "#111111", LIGHT),
        TagDef::new("From Scratch", "#4353FF", LIGHT),
        TagDef::new("Framer", "#BDFE00", DARK),
        TagDef::new("Animaciones", "#9AFEBA", DARK),
        TagDef::new("Framer", "#BDFE00", DARK),
        TagDef::new("SAAS", "#FFF863", DARK),
        TagDef::new("Wordpress to Framer", "#FFF863", DARK),
    ]
}
