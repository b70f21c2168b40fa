//! Keep stylesheets in sync with a JSON theme config.
//!
//! `stylesync` reads a theme config (colors, typography, button and input
//! settings) and rewrites the matching values in four stylesheets in place:
//!
//! | Pass | Stylesheet | What changes |
//! |------|------------|--------------|
//! | colors | `style/variables/colors.css` | 14 `--txt-*`, `--bg-*`, `--bd-*` custom properties |
//! | typography | `style/variables/typography.css` | font stacks and the `--fs-*` type scale |
//! | buttons | `style/components/buttons.css` | `.btn` heights, variant and hover colors |
//! | inputs | `style/components/forms.css` | `.input` height, `.textarea` min-height |
//!
//! Substitution is anchored on declaration names and selectors; everything
//! else in a stylesheet is preserved byte-for-byte. See [`substitute`] for the
//! matching rules.
//!
//! # Quick Start
//!
//! ```no_run
//! use stylesync::{FsSource, Synchronizer};
//!
//! let mut sync = Synchronizer::new(FsSource::current_dir());
//! let report = sync.run()?;
//! for (pass, warning) in report.warnings() {
//!     eprintln!("{}: {}", pass.pass, warning);
//! }
//! # Ok::<(), stylesync::SyncError>(())
//! ```
//!
//! # Failure model
//!
//! Missing or unreadable files and malformed JSON are fatal ([`SyncError`]).
//! A selector or declaration that is not in its stylesheet is not: it is
//! recorded as a skipped [`Substitution`] and surfaced through
//! [`SyncReport::warnings`]. Runs are idempotent; a second run with the same
//! config changes nothing.
//!
//! # Testing
//!
//! All document access goes through [`DocumentSource`]. Use [`MemorySource`]
//! to run passes against in-memory fixtures.

mod config;
mod error;
pub mod passes;
mod report;
mod source;
pub mod substitute;
mod sync;

pub use config::{
    BodySizes, ButtonColors, ButtonConfig, ColorConfig, ComponentsConfig, HeadingSizes,
    InputConfig, ThemeConfig, TypographyConfig,
};
pub use error::{Result, SyncError};
pub use passes::{
    apply_button_updates, apply_color_updates, apply_input_updates, apply_typography_updates,
};
pub use report::{Outcome, Pass, PassReport, SkipReason, Substitution, SyncReport};
pub use source::{DocumentSource, FsSource, MemorySource};
pub use substitute::{MissingProperty, StyleEdit};
pub use sync::{Layout, Synchronizer, DEFAULT_CONFIG_PATH};
