use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn vue_setup() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vue-setup");
    cmd.env_remove("VUE_SETUP_CONFIG");
    cmd
}

const CATALOG: &str = r##"[
    {"search": "PROJECT_NAME", "replace": "My Vue App"},
    {"search": "PROJECT_DESCRIPTION", "replace": "A Vue 3 starter"},
    {"search": "PROJECT_KEYWORDS", "replace": "vue, spa, template"},
    {"search": "AUTHOR_NAME", "replace": "Jane Doe"},
    {"search": "PROJECT_URL", "replace": "https://example.com/"},
    {"search": "HEX_THEME_COLORS", "replace": "#3b82f6"},
    {"search": "HEX_BACKGROUND_COLORS", "replace": "#ffffff"},
    {"search": "GA_MEASUREMENT_ID", "replace": "G-XXXX"},
    {"search": "GTM_ID", "replace": "GTM-XXXX"}
]"##;

/// Minimal template checkout with a catalog and a few target files
fn template(root: &Path) {
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(root.join("scripts/config.json"), CATALOG).unwrap();
    fs::write(root.join("scripts/setup"), "setup artifact").unwrap();
    fs::write(
        root.join("package.json"),
        r#"{
  "name": "[PROJECT_NAME]",
  "description": "[PROJECT_DESCRIPTION]",
  "keywords": "[PROJECT_KEYWORDS]",
  "author": "[PROJECT_AUTHOR]"
}"#,
    )
    .unwrap();
    fs::write(
        root.join("index.html"),
        "<title>[PROJECT_NAME]</title>\n\
         <link rel=\"canonical\" href=\"[PROJECT_URL]/\">\n\
         <meta name=\"msapplication-TileColor\" content=\"[HEX_TILE_COLOR]\">\n\
         <meta name=\"theme-color\" content=\"[HEX_THEME_COLOR]\">\n\
         <script>gtag('config', '[GA_MEASUREMENT_ID]')</script>\n",
    )
    .unwrap();
    fs::write(
        root.join("tailwind.config.js"),
        "colors: { primary: '#3b82f6' }\n",
    )
    .unwrap();
}

/// Thirteen answers in question order, then the cleanup answer
fn answers(name: &str, color: &str, cleanup: &str) -> String {
    let mut lines = vec![""; 13];
    lines[0] = name;
    lines[10] = color;
    lines.push(cleanup);
    lines.join("\n") + "\n"
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn setup_with_piped_answers_rewrites_project() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    template(root);

    vue_setup()
        .arg("setup")
        .arg("--root")
        .arg(root)
        .arg("--script")
        .arg(root.join("scripts/setup"))
        .write_stdin(answers("My Cool App!", "#112233", "y"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated index.html"))
        .stdout(predicate::str::contains("Skipping robots.txt (not found)"))
        .stdout(predicate::str::contains("Next steps:"));

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>My Cool App!</title>"));
    assert!(html.contains("href=\"https://example.com/\""));
    assert!(html.contains("content=\"#112233\">\n<meta name=\"theme-color\" content=\"#112233\""));
    assert!(html.contains("G-XXXX"));

    assert_eq!(
        fs::read_to_string(root.join("tailwind.config.js")).unwrap(),
        "colors: { primary: '#112233' }\n"
    );

    let manifest = read_json(&root.join("package.json"));
    assert_eq!(manifest["name"], "my-cool-app-");
    assert_eq!(manifest["author"], "Jane Doe");
    assert_eq!(
        manifest["keywords"],
        serde_json::json!(["vue", "spa", "template"])
    );

    assert!(!root.join("scripts/setup").exists());
}

#[test]
fn setup_yes_accepts_defaults_and_keeps_script() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    template(root);

    vue_setup()
        .args(["setup", "--yes", "--root"])
        .arg(root)
        .arg("--script")
        .arg(root.join("scripts/setup"))
        .assert()
        .success();

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>My Vue App</title>"));
    assert!(html.contains("content=\"#3b82f6\""));
    assert_eq!(read_json(&root.join("package.json"))["name"], "my-vue-app");
    assert!(root.join("scripts/setup").exists());
}

#[test]
fn setup_with_explicit_missing_config_runs_without_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    template(root);

    vue_setup()
        .args(["setup", "--yes", "--config", "nowhere.json", "--root"])
        .arg(root)
        .arg("--script")
        .arg(root.join("scripts/setup"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No default catalog"));

    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>[PROJECT_NAME]</title>"));
}

#[test]
fn setup_with_broken_manifest_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    template(root);
    fs::write(root.join("package.json"), "{ not json").unwrap();

    vue_setup()
        .args(["setup", "--yes", "--root"])
        .arg(root)
        .arg("--script")
        .arg(root.join("scripts/setup"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error during setup:"))
        .stderr(predicate::str::contains("package.json"));

    // Files before the failure stay rewritten
    let html = fs::read_to_string(root.join("index.html")).unwrap();
    assert!(html.contains("<title>My Vue App</title>"));
}

#[test]
fn verify_flags_leftover_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    template(root);

    vue_setup()
        .arg("verify")
        .arg("--root")
        .arg(root)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("index.html still contains [PROJECT_NAME]"));

    vue_setup()
        .args(["setup", "--yes", "--root"])
        .arg(root)
        .arg("--script")
        .arg(root.join("scripts/setup"))
        .assert()
        .success();

    vue_setup()
        .arg("verify")
        .arg("--root")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn update_sitemap_sets_todays_date() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("sitemap.xml"),
        "<url><loc>https://example.com</loc><lastmod>2020-01-01</lastmod></url>",
    )
    .unwrap();

    vue_setup()
        .arg("update-sitemap")
        .arg("--root")
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sitemap updated with date:"));

    let sitemap = fs::read_to_string(root.join("sitemap.xml")).unwrap();
    assert!(!sitemap.contains("2020-01-01"));
}

#[test]
fn update_sitemap_without_sitemap_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    vue_setup()
        .arg("update-sitemap")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sitemap.xml"));
}

#[test]
fn stage_copies_template_without_excluded_entries() {
    let work = tempfile::tempdir().unwrap();
    let root = work.path().join("template");
    fs::create_dir_all(root.join("node_modules/vue")).unwrap();
    template(&root);
    fs::write(root.join("node_modules/vue/index.js"), "").unwrap();
    let output = work.path().join("staged");

    vue_setup()
        .arg("stage")
        .arg("--root")
        .arg(&root)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps to test:"));

    assert!(output.join("index.html").exists());
    assert!(output.join("scripts/config.json").exists());
    assert!(!output.join("node_modules").exists());
}
