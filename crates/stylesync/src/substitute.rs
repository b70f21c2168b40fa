//! Pattern-anchored value substitution over stylesheet text.
//!
//! Stylesheets are never parsed into rules. Two kinds of anchors are
//! supported:
//!
//! - **Custom properties**: `--name: value;` anywhere in the document. Every
//!   occurrence of the exact name is rewritten.
//! - **Block properties**: `selector { ... property: value; ... }`. The block
//!   runs from the selector's opening brace to the next closing brace, so
//!   nested rules are not supported. Every matching block is rewritten on its
//!   own.
//!
//! Only the value token changes. Whitespace, comments and every other byte of
//! the document are kept as they are.
//!
//! ```
//! use stylesync::{MissingProperty, Outcome, StyleEdit};
//!
//! let mut edit = StyleEdit::new(".btn {\n  height: 36px;\n  padding: 0 16px;\n}\n");
//! let outcome = edit
//!     .set_block_property(".btn", "height", "40px", MissingProperty::Skip)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Applied);
//! assert_eq!(edit.content(), ".btn {\n  height: 40px;\n  padding: 0 16px;\n}\n");
//! ```

use regex::{Captures, Regex};

use crate::error::{Result, SyncError};
use crate::report::{Outcome, SkipReason, Substitution};

/// What to do when a matched block lacks the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingProperty {
    /// Leave the block alone and record a skip.
    Skip,
    /// Add `  property: value;` on its own line before the closing brace.
    Append,
}

/// A document being rewritten, plus the log of substitutions applied to it.
#[derive(Debug, Clone)]
pub struct StyleEdit {
    content: String,
    substitutions: Vec<Substitution>,
}

impl StyleEdit {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            substitutions: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    pub fn into_parts(self) -> (String, Vec<Substitution>) {
        (self.content, self.substitutions)
    }

    /// Replace the value of every `name: value;` declaration.
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<Outcome> {
        // The value never crosses a brace, so a declaration without `;` is
        // left alone instead of swallowing the following rules.
        let pattern = compile(&format!(
            r"(^|[^A-Za-z0-9_-])({}\s*:\s*)([^;{{}}]*?)(\s*)(;)",
            regex::escape(name)
        ))?;

        let outcome = if pattern.is_match(&self.content) {
            let rewritten = replace_value(&pattern, &self.content, value);
            let outcome = if rewritten == self.content {
                Outcome::Unchanged
            } else {
                Outcome::Applied
            };
            self.content = rewritten;
            outcome
        } else {
            Outcome::Skipped(SkipReason::DeclarationNotFound)
        };

        Ok(self.record(name.to_string(), outcome))
    }

    /// Replace `property` inside every block opened by `selector`.
    ///
    /// The selector must start a rule (beginning of the document, or after
    /// `{`, `}`, `;`, `,` or a comment) and be followed by optional whitespace
    /// and `{`. So `.btn` matches neither `.btn--sm {`, `.card .btn {` nor
    /// `.icon.btn {`, and `.btn--primary` does not match
    /// `.btn--primary:hover {`.
    pub fn set_block_property(
        &mut self,
        selector: &str,
        property: &str,
        value: &str,
        missing: MissingProperty,
    ) -> Result<Outcome> {
        let block = compile(&format!(
            r"((?:^|[{{}};,/])\s*)({}\s*\{{)([^}}]*)(\}})",
            regex::escape(selector)
        ))?;
        // Exact property name: `height` must not match `min-height`. The last
        // declaration of a block may omit its `;`.
        let declaration = compile(&format!(
            r"(^|[\s;])({}\s*:\s*)([^;]*?)(\s*)(;|$)",
            regex::escape(property)
        ))?;

        let mut outcomes = Vec::new();
        let rewritten = block
            .replace_all(&self.content, |caps: &Captures<'_>| {
                let body = &caps[3];
                let (body, outcome) = if declaration.is_match(body) {
                    let replaced = replace_value(&declaration, body, value);
                    let outcome = if replaced == body {
                        Outcome::Unchanged
                    } else {
                        Outcome::Applied
                    };
                    (replaced, outcome)
                } else {
                    match missing {
                        MissingProperty::Append => {
                            (append_declaration(body, property, value), Outcome::Appended)
                        }
                        MissingProperty::Skip => (
                            body.to_string(),
                            Outcome::Skipped(SkipReason::DeclarationNotFound),
                        ),
                    }
                };
                outcomes.push(outcome);
                format!("{}{}{}{}", &caps[1], &caps[2], body, &caps[4])
            })
            .into_owned();

        let outcome = if outcomes.is_empty() {
            Outcome::Skipped(SkipReason::SelectorNotFound)
        } else {
            self.content = rewritten;
            strongest(&outcomes)
        };

        Ok(self.record(block_target(selector, property), outcome))
    }

    /// Record a substitution that was not attempted.
    pub fn skip(&mut self, target: impl Into<String>, reason: SkipReason) -> Outcome {
        self.record(target.into(), Outcome::Skipped(reason))
    }

    fn record(&mut self, target: String, outcome: Outcome) -> Outcome {
        tracing::debug!(substitution = %target, ?outcome, "substitution");
        self.substitutions.push(Substitution { target, outcome });
        outcome
    }
}

/// Report label for a block property substitution.
pub fn block_target(selector: &str, property: &str) -> String {
    format!("{selector} {{ {property} }}")
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| SyncError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Rewrites group 3 of every match and keeps the others: the prefix, the
/// name, whitespace after the value and the terminator.
///
/// The closure replacer keeps `$` in values literal.
fn replace_value(pattern: &Regex, haystack: &str, value: &str) -> String {
    pattern
        .replace_all(haystack, |caps: &Captures<'_>| {
            format!("{}{}{}{}{}", &caps[1], &caps[2], value, &caps[4], &caps[5])
        })
        .into_owned()
}

/// Adds `  property: value;` on its own line at the end of a block body,
/// terminating the previous declaration first if it lacks a `;`.
fn append_declaration(body: &str, property: &str, value: &str) -> String {
    let declarations = body.trim_end();
    let separator = if declarations.is_empty() || declarations.ends_with(';') {
        ""
    } else {
        ";"
    };
    let trailing = &body[declarations.len()..];
    format!("{declarations}{separator}{trailing}  {property}: {value};\n")
}

/// Collapses per-block outcomes into one, preferring the most significant.
fn strongest(outcomes: &[Outcome]) -> Outcome {
    fn rank(outcome: &Outcome) -> u8 {
        match outcome {
            Outcome::Appended => 3,
            Outcome::Applied => 2,
            Outcome::Unchanged => 1,
            Outcome::Skipped(_) => 0,
        }
    }
    outcomes
        .iter()
        .copied()
        .max_by_key(rank)
        .unwrap_or(Outcome::Skipped(SkipReason::SelectorNotFound))
}
