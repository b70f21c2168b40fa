//! Per-substitution results and the run summary.
//!
//! Every substitution a pass attempts produces a [`Substitution`] record, so
//! a pattern that did not match shows up as a warning instead of vanishing.

use std::fmt;
use std::path::PathBuf;

/// The four update passes, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Colors,
    Typography,
    Buttons,
    Inputs,
}

impl Pass {
    pub const ALL: [Pass; 4] = [Pass::Colors, Pass::Typography, Pass::Buttons, Pass::Inputs];

    pub fn name(self) -> &'static str {
        match self {
            Pass::Colors => "colors",
            Pass::Typography => "typography",
            Pass::Buttons => "buttons",
            Pass::Inputs => "inputs",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a substitution was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No block for the selector exists in the document.
    SelectorNotFound,
    /// The declaration is absent (from the document or the matched block).
    DeclarationNotFound,
    /// The config has no value for this substitution.
    NotConfigured,
    /// The configured value is empty.
    Blank,
    /// The configured button color is `inherit`.
    Inherit,
}

impl SkipReason {
    /// Whether the skip points at a mismatch between config and stylesheet.
    ///
    /// Blank and `inherit` button colors are deliberate and stay quiet.
    pub fn is_warning(self) -> bool {
        matches!(
            self,
            SkipReason::SelectorNotFound | SkipReason::DeclarationNotFound | SkipReason::NotConfigured
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::SelectorNotFound => "selector not found",
            SkipReason::DeclarationNotFound => "declaration not found",
            SkipReason::NotConfigured => "no value configured",
            SkipReason::Blank => "configured value is blank",
            SkipReason::Inherit => "configured value is inherit",
        };
        f.write_str(text)
    }
}

/// What happened to one substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An existing value was replaced with a different one.
    Applied,
    /// The declaration already held the configured value.
    Unchanged,
    /// The declaration was missing from its block and was added.
    Appended,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_change(self) -> bool {
        matches!(self, Outcome::Applied | Outcome::Appended)
    }

    pub fn is_warning(self) -> bool {
        matches!(self, Outcome::Skipped(reason) if reason.is_warning())
    }
}

/// One attempted substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// `--name` for custom properties, `selector { property }` for block rules.
    pub target: String,
    pub outcome: Outcome,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Applied => write!(f, "{}: applied", self.target),
            Outcome::Unchanged => write!(f, "{}: unchanged", self.target),
            Outcome::Appended => write!(f, "{}: appended", self.target),
            Outcome::Skipped(reason) => write!(f, "{}: skipped ({})", self.target, reason),
        }
    }
}

/// Result of one pass over one document.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub pass: Pass,
    pub path: PathBuf,
    /// The document text differs from what was read.
    pub changed: bool,
    /// The document was written back. False for dry runs and unchanged documents.
    pub written: bool,
    pub substitutions: Vec<Substitution>,
}

impl PassReport {
    pub fn count(&self, predicate: impl Fn(Outcome) -> bool) -> usize {
        self.substitutions
            .iter()
            .filter(|s| predicate(s.outcome))
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Substitution> {
        self.substitutions.iter().filter(|s| s.outcome.is_warning())
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub passes: Vec<PassReport>,
}

impl SyncReport {
    pub fn pass(&self, pass: Pass) -> Option<&PassReport> {
        self.passes.iter().find(|p| p.pass == pass)
    }

    /// Warnings across all passes, with the pass they came from.
    pub fn warnings(&self) -> impl Iterator<Item = (&PassReport, &Substitution)> {
        self.passes
            .iter()
            .flat_map(|p| p.warnings().map(move |s| (p, s)))
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Documents whose content changed (or would change, for a dry run).
    pub fn changed_documents(&self) -> impl Iterator<Item = &PassReport> {
        self.passes.iter().filter(|p| p.changed)
    }

    pub fn is_up_to_date(&self) -> bool {
        self.changed_documents().next().is_none()
    }

    pub fn change_count(&self) -> usize {
        self.passes.iter().map(|p| p.count(Outcome::is_change)).sum()
    }
}
