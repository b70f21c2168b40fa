//! Run orchestration: load the config, then run each pass in order.
//!
//! Passes run strictly in [`Pass::ALL`] order. A fatal error stops the run at
//! once; documents already written by earlier passes are not rolled back.

use std::path::{Path, PathBuf};

use crate::config::ThemeConfig;
use crate::error::{Result, SyncError};
use crate::passes::{
    apply_button_updates, apply_color_updates, apply_input_updates, apply_typography_updates,
};
use crate::report::{Pass, PassReport, SyncReport};
use crate::source::DocumentSource;
use crate::substitute::StyleEdit;

/// Default theme config location.
pub const DEFAULT_CONFIG_PATH: &str = "theme.config.json";

/// Where the config and the four target stylesheets live, relative to the
/// document source's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config: PathBuf,
    pub colors: PathBuf,
    pub typography: PathBuf,
    pub buttons: PathBuf,
    pub inputs: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            colors: PathBuf::from("style/variables/colors.css"),
            typography: PathBuf::from("style/variables/typography.css"),
            buttons: PathBuf::from("style/components/buttons.css"),
            inputs: PathBuf::from("style/components/forms.css"),
        }
    }
}

impl Layout {
    pub fn with_config(mut self, config: impl Into<PathBuf>) -> Self {
        self.config = config.into();
        self
    }

    /// Target stylesheet of a pass.
    pub fn path(&self, pass: Pass) -> &Path {
        match pass {
            Pass::Colors => &self.colors,
            Pass::Typography => &self.typography,
            Pass::Buttons => &self.buttons,
            Pass::Inputs => &self.inputs,
        }
    }
}

/// Applies a theme config to a set of stylesheets.
///
/// # Example
///
/// ```rust
/// use stylesync::{MemorySource, Synchronizer};
///
/// let source = MemorySource::new()
///     .with_document("theme.config.json", r##"{
///         "colors": { "txtDark": "#111111" },
///         "typography": {},
///         "components": { "button": {}, "input": {} }
///     }"##)
///     .with_document("style/variables/colors.css", ":root { --txt-dark: #000; }")
///     .with_document("style/variables/typography.css", "")
///     .with_document("style/components/buttons.css", "")
///     .with_document("style/components/forms.css", "");
///
/// let mut sync = Synchronizer::new(source);
/// let report = sync.run().unwrap();
///
/// assert_eq!(report.change_count(), 1);
/// assert_eq!(
///     sync.source().get("style/variables/colors.css"),
///     Some(":root { --txt-dark: #111111; }")
/// );
/// ```
#[derive(Debug)]
pub struct Synchronizer<S> {
    source: S,
    layout: Layout,
    dry_run: bool,
}

impl<S: DocumentSource> Synchronizer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            layout: Layout::default(),
            dry_run: false,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Compute the report without writing any document.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Load the config and apply it.
    pub fn run(&mut self) -> Result<SyncReport> {
        tracing::info!(config = %self.layout.config.display(), "loading theme config");
        let config = ThemeConfig::load(&self.source, &self.layout.config)?;
        self.apply(&config)
    }

    /// Apply an already loaded config to every target document.
    pub fn apply(&mut self, config: &ThemeConfig) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        for pass in Pass::ALL {
            report.passes.push(self.run_pass(pass, config)?);
        }
        tracing::info!(
            changes = report.change_count(),
            warnings = report.warning_count(),
            dry_run = self.dry_run,
            "theme synchronized"
        );
        Ok(report)
    }

    fn run_pass(&mut self, pass: Pass, config: &ThemeConfig) -> Result<PassReport> {
        let path = self.layout.path(pass).to_path_buf();
        tracing::info!(%pass, path = %path.display(), "updating");

        let original = self
            .source
            .read(&path)
            .map_err(|source| SyncError::StylesheetNotFound {
                path: path.clone(),
                source,
            })?;

        let mut edit = StyleEdit::new(original.as_str());
        match pass {
            Pass::Colors => apply_color_updates(&mut edit, &config.colors)?,
            Pass::Typography => apply_typography_updates(&mut edit, &config.typography)?,
            Pass::Buttons => apply_button_updates(&mut edit, &config.components.button)?,
            Pass::Inputs => apply_input_updates(&mut edit, &config.components.input)?,
        }
        let (content, substitutions) = edit.into_parts();

        for warning in substitutions.iter().filter(|s| s.outcome.is_warning()) {
            tracing::warn!(%pass, path = %path.display(), "{}", warning);
        }

        let changed = content != original;
        let written = changed && !self.dry_run;
        if written {
            self.source
                .write(&path, &content)
                .map_err(|source| SyncError::StylesheetWrite {
                    path: path.clone(),
                    source,
                })?;
        }

        Ok(PassReport {
            pass,
            path,
            changed,
            written,
            substitutions,
        })
    }
}
