//! The four theme update passes.
//!
//! Each pass maps one config section onto one stylesheet. Passes only edit
//! the [`StyleEdit`] they are given; reading and writing the document is the
//! [`Synchronizer`](crate::Synchronizer)'s job.

use crate::config::{ButtonColors, ButtonConfig, ColorConfig, InputConfig, TypographyConfig};
use crate::error::Result;
use crate::report::SkipReason;
use crate::substitute::{block_target, MissingProperty, StyleEdit};

/// Value of `--txt-white`. Not sourced from the config.
pub const TEXT_WHITE: &str = "#ffffff";

/// Fallbacks appended to the configured font family.
pub const FONT_FALLBACKS: &str = "system-ui, sans-serif";

const HOVER_STATE: &str = ":hover:not(:disabled)";

/// Rewrite the 14 semantic color custom properties.
pub fn apply_color_updates(edit: &mut StyleEdit, colors: &ColorConfig) -> Result<()> {
    let variables: [(&str, Option<&str>); 14] = [
        ("--txt-dark", colors.txt_dark.as_deref()),
        ("--txt-default", colors.txt_default.as_deref()),
        ("--txt-light", colors.txt_light.as_deref()),
        ("--txt-brand", colors.txt_brand.as_deref()),
        ("--txt-disable", colors.txt_disable.as_deref()),
        ("--txt-white", Some(TEXT_WHITE)),
        ("--bg-default", colors.bg_default.as_deref()),
        ("--bg-brand", colors.bg_brand.as_deref()),
        ("--bg-light", colors.bg_light.as_deref()),
        ("--bg-white", colors.bg_white.as_deref()),
        ("--bg-brand-light", colors.bg_brand_light.as_deref()),
        ("--bd-default", colors.bd_default.as_deref()),
        ("--bd-light", colors.bd_light.as_deref()),
        ("--bd-brand", colors.bd_brand.as_deref()),
    ];
    set_variables(edit, &variables)
}

/// Rewrite font families and the type scale.
pub fn apply_typography_updates(edit: &mut StyleEdit, typography: &TypographyConfig) -> Result<()> {
    let stack = configured(typography.font_family.as_deref()).map(font_stack);
    for name in ["--heading-font", "--default-font", "--display-font"] {
        match &stack {
            Ok(stack) => {
                edit.set_variable(name, stack)?;
            }
            Err(reason) => {
                edit.skip(name, *reason);
            }
        }
    }

    let headings = &typography.headings;
    let body = &typography.body;
    let variables: [(&str, Option<&str>); 11] = [
        ("--fs-h1", headings.h1.as_deref()),
        ("--fs-h2", headings.h2.as_deref()),
        ("--fs-h3", headings.h3.as_deref()),
        ("--fs-h4", headings.h4.as_deref()),
        ("--fs-h5", headings.h5.as_deref()),
        ("--fs-h6", headings.h6.as_deref()),
        ("--fs-large", body.large.as_deref()),
        ("--fs-default", body.regular.as_deref()),
        ("--fs-small", body.small.as_deref()),
        ("--fs-label", typography.label.as_deref()),
        ("--fs-caption", typography.caption.as_deref()),
    ];
    set_variables(edit, &variables)
}

/// Rewrite button heights and variant colors.
pub fn apply_button_updates(edit: &mut StyleEdit, button: &ButtonConfig) -> Result<()> {
    let heights = [
        (".btn", button.height_default.as_deref()),
        (".btn--sm", button.height_small.as_deref()),
        (".btn--lg", button.height_large.as_deref()),
    ];
    for (selector, height) in heights {
        set_block(edit, selector, "height", configured(height), MissingProperty::Skip)?;
    }

    for (selector, colors) in button.variants() {
        apply_variant_colors(edit, selector, colors)?;
    }
    Ok(())
}

/// Rewrite input heights. Both selectors share `heightDefault`.
pub fn apply_input_updates(edit: &mut StyleEdit, input: &InputConfig) -> Result<()> {
    let height = configured(input.height_default.as_deref());
    set_block(edit, ".input", "height", height, MissingProperty::Skip)?;
    set_block(edit, ".textarea", "min-height", height, MissingProperty::Skip)?;
    Ok(())
}

/// `'Family', system-ui, sans-serif`
pub fn font_stack(family: &str) -> String {
    format!("'{family}', {FONT_FALLBACKS}")
}

fn apply_variant_colors(edit: &mut StyleEdit, selector: &str, colors: &ButtonColors) -> Result<()> {
    let hover = format!("{selector}{HOVER_STATE}");
    let states = [
        (
            selector,
            [
                ("color", &colors.text_color),
                ("background-color", &colors.background_color),
                ("border-color", &colors.border_color),
            ],
        ),
        (
            hover.as_str(),
            [
                ("color", &colors.hover_text_color),
                ("background-color", &colors.hover_background_color),
                ("border-color", &colors.hover_border_color),
            ],
        ),
    ];

    for (state, properties) in states {
        for (property, value) in properties {
            let value = button_color(value.as_deref());
            set_block(edit, state, property, value, MissingProperty::Append)?;
        }
    }
    Ok(())
}

fn set_variables(edit: &mut StyleEdit, variables: &[(&str, Option<&str>)]) -> Result<()> {
    for &(name, value) in variables {
        match configured(value) {
            Ok(value) => {
                edit.set_variable(name, value)?;
            }
            Err(reason) => {
                edit.skip(name, reason);
            }
        }
    }
    Ok(())
}

fn set_block(
    edit: &mut StyleEdit,
    selector: &str,
    property: &str,
    value: std::result::Result<&str, SkipReason>,
    missing: MissingProperty,
) -> Result<()> {
    match value {
        Ok(value) => {
            edit.set_block_property(selector, property, value, missing)?;
        }
        Err(reason) => {
            edit.skip(block_target(selector, property), reason);
        }
    }
    Ok(())
}

/// Trimmed config value, or why there is nothing to write.
fn configured(value: Option<&str>) -> std::result::Result<&str, SkipReason> {
    match value.map(str::trim) {
        None => Err(SkipReason::NotConfigured),
        Some("") => Err(SkipReason::Blank),
        Some(value) => Ok(value),
    }
}

/// Like [`configured`], but `inherit` is left to the stylesheet.
fn button_color(value: Option<&str>) -> std::result::Result<&str, SkipReason> {
    match configured(value)? {
        "inherit" => Err(SkipReason::Inherit),
        value => Ok(value),
    }
}
