//! Human-readable run summary.
//!
//! ```text
//! ✓ colors      style/variables/colors.css       12 applied, 2 unchanged
//! ✓ typography  style/variables/typography.css   up to date
//! ! buttons     style/components/buttons.css     9 applied, 1 appended, 1 warning
//!     .btn--sm { height }: skipped (selector not found)
//! ```

use console::Style;
use stylesync::{Outcome, PassReport, SyncReport};

struct Palette {
    ok: Style,
    warn: Style,
    dim: Style,
    bold: Style,
}

impl Palette {
    fn new(use_color: bool) -> Self {
        Self {
            ok: Style::new().green().force_styling(use_color),
            warn: Style::new().yellow().force_styling(use_color),
            dim: Style::new().dim().force_styling(use_color),
            bold: Style::new().bold().force_styling(use_color),
        }
    }
}

/// Render the report, one line per pass followed by its warnings.
pub fn render_report(report: &SyncReport, dry_run: bool, use_color: bool) -> String {
    let palette = Palette::new(use_color);
    let mut lines = Vec::new();

    for pass in &report.passes {
        let warnings: Vec<_> = pass.warnings().collect();
        let marker = if warnings.is_empty() {
            palette.ok.apply_to("✓")
        } else {
            palette.warn.apply_to("!")
        };
        lines.push(format!(
            "{} {:<11} {:<32} {}",
            marker,
            pass.pass.name(),
            palette.dim.apply_to(pass.path.display()),
            pass_summary(pass)
        ));
        lines.extend(
            warnings
                .into_iter()
                .map(|warning| format!("    {}", palette.warn.apply_to(warning))),
        );
    }

    let changes = report.change_count();
    let documents = report.changed_documents().count();
    let verb = if dry_run { "would update" } else { "updated" };
    let totals = if changes == 0 {
        "theme is up to date".to_string()
    } else {
        format!("{verb} {changes} value(s) in {documents} stylesheet(s)")
    };
    let mut last = palette.bold.apply_to(totals).to_string();
    let warnings = report.warning_count();
    if warnings > 0 {
        last.push_str(&format!(
            ", {}",
            palette.warn.apply_to(format!("{warnings} warning(s)"))
        ));
    }
    lines.push(last);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn pass_summary(pass: &PassReport) -> String {
    let counts = [
        (pass.count(|o| o == Outcome::Applied), "applied"),
        (pass.count(|o| o == Outcome::Appended), "appended"),
        (pass.count(|o| o == Outcome::Unchanged), "unchanged"),
        (pass.count(Outcome::is_warning), "warning(s)"),
    ];
    if !pass.changed && counts[3].0 == 0 {
        return "up to date".to_string();
    }
    counts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, label)| format!("{n} {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stylesync::{Pass, SkipReason, Substitution};

    fn sub(target: &str, outcome: Outcome) -> Substitution {
        Substitution {
            target: target.to_string(),
            outcome,
        }
    }

    fn report() -> SyncReport {
        SyncReport {
            passes: vec![
                PassReport {
                    pass: Pass::Colors,
                    path: PathBuf::from("style/variables/colors.css"),
                    changed: true,
                    written: true,
                    substitutions: vec![
                        sub("--txt-dark", Outcome::Applied),
                        sub("--txt-white", Outcome::Unchanged),
                    ],
                },
                PassReport {
                    pass: Pass::Inputs,
                    path: PathBuf::from("style/components/forms.css"),
                    changed: false,
                    written: false,
                    substitutions: vec![sub(
                        ".textarea { min-height }",
                        Outcome::Skipped(SkipReason::SelectorNotFound),
                    )],
                },
            ],
        }
    }

    #[test]
    fn test_render_plain() {
        let out = render_report(&report(), false, false);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("✓ colors"));
        assert!(lines[0].ends_with("1 applied, 1 unchanged"));
        assert!(lines[1].starts_with("! inputs"));
        assert!(lines[1].ends_with("1 warning(s)"));
        assert_eq!(
            lines[2],
            "    .textarea { min-height }: skipped (selector not found)"
        );
        assert_eq!(
            lines[3],
            "updated 1 value(s) in 1 stylesheet(s), 1 warning(s)"
        );
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_dry_run_wording() {
        let out = render_report(&report(), true, false);
        assert!(out.contains("would update 1 value(s) in 1 stylesheet(s)"));
    }

    #[test]
    fn test_render_up_to_date() {
        let report = SyncReport {
            passes: vec![PassReport {
                pass: Pass::Buttons,
                path: PathBuf::from("style/components/buttons.css"),
                changed: false,
                written: false,
                substitutions: vec![sub(".btn { height }", Outcome::Unchanged)],
            }],
        };
        let out = render_report(&report, false, false);
        assert!(out.contains("up to date\n"));
        assert!(out.ends_with("theme is up to date\n"));
    }

    #[test]
    fn test_render_empty_report() {
        let out = render_report(&SyncReport::default(), false, false);
        assert_eq!(out, "theme is up to date\n");
    }

    #[test]
    fn test_render_with_color() {
        let out = render_report(&report(), false, true);
        assert!(out.contains("\x1b["));
    }
}
