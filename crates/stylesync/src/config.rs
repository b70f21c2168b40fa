//! Theme configuration model.
//!
//! The config is a single JSON document with camelCase keys:
//!
//! ```json
//! {
//!   "colors": { "txtDark": "#111111", "bgBrand": "#0055ff" },
//!   "typography": {
//!     "fontFamily": "Inter",
//!     "headings": { "h1": "48px" },
//!     "body": { "default": "16px" },
//!     "label": "14px",
//!     "caption": "12px"
//!   },
//!   "components": {
//!     "button": { "heightDefault": "40px", "primary": { "textColor": "#fff" } },
//!     "input": { "heightDefault": "40px" }
//!   }
//! }
//! ```
//!
//! The four sections (`colors`, `typography`, `components.button`,
//! `components.input`) are required. Every leaf value is optional: no schema
//! validation happens, and a missing leaf turns into a skipped substitution
//! rather than a bogus value in the stylesheet.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SyncError};
use crate::source::DocumentSource;

/// Root of the theme configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub colors: ColorConfig,
    pub typography: TypographyConfig,
    pub components: ComponentsConfig,
}

impl ThemeConfig {
    /// Parses a config from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses the config at `path` through `source`.
    pub fn load<S: DocumentSource + ?Sized>(source: &S, path: &Path) -> Result<Self> {
        let json = source
            .read(path)
            .map_err(|source| SyncError::ConfigNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json(&json).map_err(|source| SyncError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Semantic color roles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
    pub txt_dark: Option<String>,
    pub txt_default: Option<String>,
    pub txt_light: Option<String>,
    pub txt_brand: Option<String>,
    pub txt_disable: Option<String>,
    pub bg_default: Option<String>,
    pub bg_brand: Option<String>,
    pub bg_light: Option<String>,
    pub bg_white: Option<String>,
    pub bg_brand_light: Option<String>,
    pub bd_default: Option<String>,
    pub bd_light: Option<String>,
    pub bd_brand: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyConfig {
    /// Bare family name, e.g. `Inter`. Fallbacks are appended by the typography pass.
    pub font_family: Option<String>,
    pub headings: HeadingSizes,
    pub body: BodySizes,
    pub label: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeadingSizes {
    pub h1: Option<String>,
    pub h2: Option<String>,
    pub h3: Option<String>,
    pub h4: Option<String>,
    pub h5: Option<String>,
    pub h6: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BodySizes {
    pub large: Option<String>,
    #[serde(rename = "default")]
    pub regular: Option<String>,
    pub small: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsConfig {
    pub button: ButtonConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonConfig {
    pub height_default: Option<String>,
    pub height_small: Option<String>,
    pub height_large: Option<String>,
    pub primary: ButtonColors,
    pub tonal: ButtonColors,
    pub outline: ButtonColors,
    pub link: ButtonColors,
}

impl ButtonConfig {
    /// Variant color sets paired with their selectors, in processing order.
    pub fn variants(&self) -> [(&'static str, &ButtonColors); 4] {
        [
            (".btn--primary", &self.primary),
            (".btn--tonal", &self.tonal),
            (".btn--outline", &self.outline),
            (".btn--link", &self.link),
        ]
    }
}

/// Default and hover colors of one button variant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonColors {
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub hover_text_color: Option<String>,
    pub hover_background_color: Option<String>,
    pub hover_border_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputConfig {
    /// Applied to `.input` height and `.textarea` min-height.
    pub height_default: Option<String>,
}
