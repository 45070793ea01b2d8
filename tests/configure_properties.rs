mod harness;

use create_vitron::{ScaffoldRequest, configure_project, embedded_catalog};
use harness::template_repository::{PACKAGE_JSON, write_template_tree};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIGURED_FILES: [&str; 5] = [
    "package.json",
    "electron-builder.yml",
    "src/renderer/index.html",
    "src/renderer/src/store/useStore.ts",
    "src/main/index.ts",
];

fn snapshot(root: &Path) -> BTreeMap<&'static str, String> {
    CONFIGURED_FILES
        .iter()
        .map(|file| (*file, fs::read_to_string(root.join(file)).unwrap()))
        .collect()
}

/// Plain names, and names that embed either placeholder spelling.
fn project_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][A-Za-z0-9_-]{0,15}",
        "[A-Za-z]{0,4}(Vitron|vitron)[A-Za-z0-9]{0,6}",
    ]
}

/// `content` with the inserted name and identifier masked out.
fn without_inserted(content: &str, name: &str) -> String {
    content.replace(name, "\u{0}").replace(&name.to_lowercase(), "\u{0}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn configured_files_carry_the_name_and_converge(
        name in project_name(),
        titlebar in any::<bool>(),
        tray in any::<bool>(),
        tours in any::<bool>(),
    ) {
        let catalog = embedded_catalog().unwrap();
        let dir = TempDir::new().unwrap();
        write_template_tree(dir.path());
        let request = ScaffoldRequest::new(name.clone(), "react-typescript")
            .with_feature("titlebar", titlebar)
            .with_feature("tray", tray)
            .with_feature("tours", tours);

        configure_project(dir.path(), &catalog, &request).unwrap();
        let first = snapshot(dir.path());

        for content in first.values() {
            let rest = without_inserted(content, &name);
            prop_assert!(!rest.contains("Vitron"), "display placeholder left in {}", content);
            prop_assert!(!rest.contains("vitron"), "identifier placeholder left in {}", content);
        }
        let package = &first["package.json"];
        let expected_name = format!("\"name\": \"{}\"", name.to_lowercase());
        prop_assert!(package.contains(&expected_name), "name missing from {}", package);
        prop_assert!(package.contains("\"version\": \"0.0.1\""));
        let title = format!("<title>{}</title>", name);
        let html = &first["src/renderer/index.html"];
        prop_assert!(html.contains(&title), "expected {} in {}", title, html);
        prop_assert_eq!(package.contains("\"VITRON_CUSTOM_TITLEBAR\": true"), titlebar);
        prop_assert_eq!(package.contains("\"VITRON_TRAY\": true"), tray);
        prop_assert_eq!(package.contains("\"VITRON_TOURS\": true"), tours);

        configure_project(dir.path(), &catalog, &request).unwrap();
        prop_assert_eq!(snapshot(dir.path()), first);
    }
}

#[test]
fn names_with_replacement_syntax_are_written_literally() {
    let catalog = embedded_catalog().unwrap();
    let dir = TempDir::new().unwrap();
    write_template_tree(dir.path());

    configure_project(dir.path(), &catalog, &ScaffoldRequest::new("App$1", "react-typescript"))
        .unwrap();

    let html = fs::read_to_string(dir.path().join("src/renderer/index.html")).unwrap();
    assert!(html.contains("<title>App$1</title>"));
}

fn configure_twice(name: &str) -> BTreeMap<&'static str, String> {
    let catalog = embedded_catalog().unwrap();
    let dir = TempDir::new().unwrap();
    write_template_tree(dir.path());
    let request = ScaffoldRequest::new(name, "react-typescript");

    configure_project(dir.path(), &catalog, &request).unwrap();
    let first = snapshot(dir.path());
    configure_project(dir.path(), &catalog, &request).unwrap();
    assert_eq!(snapshot(dir.path()), first);
    first
}

#[test]
fn name_containing_lowercase_placeholder_is_inserted_once() {
    let files = configure_twice("vitronic");
    assert!(files["src/renderer/index.html"].contains("<title>vitronic</title>"));
    assert!(files["package.json"].contains("\"name\": \"vitronic\""));
    assert!(files["electron-builder.yml"].contains("productName: vitronic\n"));
}

#[test]
fn name_starting_with_placeholder_survives_a_rerun() {
    let files = configure_twice("VitronApp");
    assert!(files["package.json"].contains("\"name\": \"vitronapp\""));
    assert!(files["src/renderer/index.html"].contains("<title>VitronApp</title>"));
    assert!(files["src/renderer/src/store/useStore.ts"].contains("'vitronapp-storage'"));
    assert!(files["src/main/index.ts"].contains("title: 'VitronApp'"));
}

#[test]
fn missing_optional_files_are_skipped() {
    let catalog = embedded_catalog().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();

    let report =
        configure_project(dir.path(), &catalog, &ScaffoldRequest::new("MyApp", "react-typescript"))
            .unwrap();

    assert_eq!(report.files_written, ["package.json"]);
    assert!(report.unmatched_rules.is_empty());
}
