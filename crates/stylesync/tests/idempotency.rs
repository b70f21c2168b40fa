//! Property tests: synchronization is idempotent and writes configured values
//! verbatim, for arbitrary config values.

use proptest::prelude::*;
use serde_json::json;
use stylesync::{Layout, MemorySource, Synchronizer, ThemeConfig};

const COLORS: &str = include_str!("fixtures/style/variables/colors.css");
const TYPOGRAPHY: &str = include_str!("fixtures/style/variables/typography.css");
const BUTTONS: &str = include_str!("fixtures/style/components/buttons.css");
const FORMS: &str = include_str!("fixtures/style/components/forms.css");

fn fixture() -> MemorySource {
    let layout = Layout::default();
    MemorySource::new()
        .with_document(&layout.colors, COLORS)
        .with_document(&layout.typography, TYPOGRAPHY)
        .with_document(&layout.buttons, BUTTONS)
        .with_document(&layout.inputs, FORMS)
}

/// Plausible CSS values, including blanks and `inherit`.
fn css_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[0-9a-f]{6}",
        "[0-9]{1,3}(px|rem|em|%)",
        "rgb\\([0-9]{1,3}, [0-9]{1,3}, [0-9]{1,3}\\)",
        " ?[a-z]{3,10} ?",
        Just(String::new()),
        Just("inherit".to_string()),
    ]
}

fn button_colors() -> impl Strategy<Value = serde_json::Value> {
    prop::collection::vec(css_value(), 6).prop_map(|v| {
        json!({
            "textColor": v[0],
            "backgroundColor": v[1],
            "borderColor": v[2],
            "hoverTextColor": v[3],
            "hoverBackgroundColor": v[4],
            "hoverBorderColor": v[5],
        })
    })
}

fn theme_config() -> impl Strategy<Value = (Vec<String>, ThemeConfig)> {
    (
        prop::collection::vec(css_value(), 13),
        prop::collection::vec(css_value(), 11),
        "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,6})?",
        prop::collection::vec(css_value(), 4),
        prop::collection::vec(button_colors(), 4),
    )
        .prop_map(|(colors, sizes, family, heights, variants)| {
            let value = json!({
                "colors": {
                    "txtDark": colors[0], "txtDefault": colors[1], "txtLight": colors[2],
                    "txtBrand": colors[3], "txtDisable": colors[4], "bgDefault": colors[5],
                    "bgBrand": colors[6], "bgLight": colors[7], "bgWhite": colors[8],
                    "bgBrandLight": colors[9], "bdDefault": colors[10], "bdLight": colors[11],
                    "bdBrand": colors[12],
                },
                "typography": {
                    "fontFamily": family,
                    "headings": {
                        "h1": sizes[0], "h2": sizes[1], "h3": sizes[2],
                        "h4": sizes[3], "h5": sizes[4], "h6": sizes[5],
                    },
                    "body": { "large": sizes[6], "default": sizes[7], "small": sizes[8] },
                    "label": sizes[9],
                    "caption": sizes[10],
                },
                "components": {
                    "button": {
                        "heightDefault": heights[0],
                        "heightSmall": heights[1],
                        "heightLarge": heights[2],
                        "primary": variants[0],
                        "tonal": variants[1],
                        "outline": variants[2],
                        "link": variants[3],
                    },
                    "input": { "heightDefault": heights[3] },
                },
            });
            let config = serde_json::from_value(value).unwrap();
            (colors, config)
        })
}

const COLOR_NAMES: [&str; 13] = [
    "--txt-dark",
    "--txt-default",
    "--txt-light",
    "--txt-brand",
    "--txt-disable",
    "--bg-default",
    "--bg-brand",
    "--bg-light",
    "--bg-white",
    "--bg-brand-light",
    "--bd-default",
    "--bd-light",
    "--bd-brand",
];

proptest! {
    #[test]
    fn second_run_changes_nothing((_, config) in theme_config()) {
        let mut first = Synchronizer::new(fixture());
        first.apply(&config).unwrap();
        let source = first.into_source();
        let snapshot = source.clone();

        let mut second = Synchronizer::new(source);
        let report = second.apply(&config).unwrap();

        prop_assert!(report.is_up_to_date());
        let layout = Layout::default();
        for pass in stylesync::Pass::ALL {
            let path = layout.path(pass);
            prop_assert_eq!(second.source().get(path), snapshot.get(path));
        }
    }

    #[test]
    fn color_values_are_written_verbatim((colors, config) in theme_config()) {
        let mut sync = Synchronizer::new(fixture());
        sync.apply(&config).unwrap();

        let css = sync.source().get("style/variables/colors.css").unwrap();
        for (name, value) in COLOR_NAMES.iter().zip(&colors) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let declaration = format!("  {name}: {value};\n");
            prop_assert!(css.contains(&declaration), "missing {:?}", declaration);
        }
        prop_assert!(css.contains("  --txt-white: #ffffff;\n"));
    }
}
