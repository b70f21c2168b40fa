//! Runs the `stylesync` binary against a project in a temporary directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CONFIG: &str = include_str!("../../stylesync/tests/fixtures/theme.config.json");
const COLORS: &str = include_str!("../../stylesync/tests/fixtures/style/variables/colors.css");
const TYPOGRAPHY: &str =
    include_str!("../../stylesync/tests/fixtures/style/variables/typography.css");
const BUTTONS: &str = include_str!("../../stylesync/tests/fixtures/style/components/buttons.css");
const FORMS: &str = include_str!("../../stylesync/tests/fixtures/style/components/forms.css");

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        ("theme.config.json", CONFIG),
        ("style/variables/colors.css", COLORS),
        ("style/variables/typography.css", TYPOGRAPHY),
        ("style/components/buttons.css", BUTTONS),
        ("style/components/forms.css", FORMS),
    ];
    for (path, content) in files {
        let path = dir.path().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn stylesync(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stylesync"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_arguments_updates_the_working_directory() {
    let dir = project();
    let output = stylesync(dir.path(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let colors = fs::read_to_string(dir.path().join("style/variables/colors.css")).unwrap();
    assert!(colors.contains("  --txt-dark: #0f172a;\n"));
    assert!(stdout(&output).contains("colors"));
}

#[test]
fn check_fails_until_synchronized() {
    let dir = project();

    let stale = stylesync(dir.path(), &["--check", "--quiet"]);
    assert!(!stale.status.success());
    assert!(stderr(&stale).contains("out of date"));
    assert_eq!(
        fs::read_to_string(dir.path().join("style/components/buttons.css")).unwrap(),
        BUTTONS
    );

    assert!(stylesync(dir.path(), &["--quiet"]).status.success());

    let fresh = stylesync(dir.path(), &["--check"]);
    assert!(fresh.status.success(), "stderr: {}", stderr(&fresh));
    assert!(stdout(&fresh).contains("theme is up to date"));
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = project();
    let output = stylesync(dir.path(), &["--dry-run"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("would update"));
    assert_eq!(
        fs::read_to_string(dir.path().join("style/variables/colors.css")).unwrap(),
        COLORS
    );
}

#[test]
fn root_and_config_flags() {
    let dir = project();
    fs::create_dir_all(dir.path().join("themes")).unwrap();
    fs::rename(
        dir.path().join("theme.config.json"),
        dir.path().join("themes/brand.json"),
    )
    .unwrap();
    let elsewhere = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let output = stylesync(
        elsewhere.path(),
        &["--root", root, "--config", "themes/brand.json", "-q"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    let forms = fs::read_to_string(dir.path().join("style/components/forms.css")).unwrap();
    assert!(forms.contains("  height: 44px;\n"));
}

#[test]
fn missing_stylesheet_exits_with_diagnostic() {
    let dir = project();
    fs::remove_file(dir.path().join("style/components/forms.css")).unwrap();

    let output = stylesync(dir.path(), &[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("theme update failed"), "stderr: {err}");
    assert!(err.contains("style/components/forms.css"), "stderr: {err}");
}

#[test]
fn missing_declarations_warn_on_stderr() {
    let dir = project();
    fs::write(
        dir.path().join("style/components/forms.css"),
        ".input {\n  height: 40px;\n}\n",
    )
    .unwrap();

    let output = stylesync(dir.path(), &[]);

    assert!(output.status.success());
    assert!(stderr(&output).contains(".textarea { min-height }"));
    assert!(stdout(&output).contains("1 warning(s)"));
}
