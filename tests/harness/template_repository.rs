//! A local git repository shaped like the Vitron template.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub(crate) const PACKAGE_JSON: &str = r#"{
  "name": "vitron",
  "version": "0.9.13",
  "description": "Vitron - supercharged Electron + Vite",
  "env": {
    "VITRON_CUSTOM_TITLEBAR": true,
    "VITRON_TRAY": true,
    "VITRON_TOURS": true,
    "VITRON_PRIMARY_COLOR": "default"
  }
}
"#;

pub(crate) const INDEX_HTML: &str =
    "<!DOCTYPE html>\n<html>\n  <head><title>Vitron</title></head>\n</html>\n";

pub(crate) const BUILDER_YML: &str =
    "appId: com.electron.app\nproductName: Vitron\nexecutableName: vitron\n";

pub(crate) const MAIN_TS: &str = "const NOTIFICATION_TITLE = 'Vitron - by Blade'\n\
new BrowserWindow({ title: 'Vitron' })\n\
tray.setToolTip('Vitron by Blade')\n\
const menu = [{ label: 'Restart Vitron' }]\n";

pub(crate) const STORE_TS: &str =
    "export const useStore = create(persist(() => ({}), { name: 'vitron-storage' }))\n";

/// Files of the fixture template, relative to its root.
pub(crate) fn template_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("package.json", PACKAGE_JSON),
        ("electron-builder.yml", BUILDER_YML),
        ("src/renderer/index.html", INDEX_HTML),
        ("src/renderer/src/store/useStore.ts", STORE_TS),
        ("src/main/index.ts", MAIN_TS),
        ("resources/icon.ico", "template-ico"),
        ("README.md", "# Vitron\n"),
    ]
}

/// Write the fixture template into `root` without any git metadata.
pub(crate) fn write_template_tree(root: &Path) {
    for (relative, content) in template_files() {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(["-c", "user.name=Test User", "-c", "user.email=test@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Committed template repository reachable through a `file://` URL.
pub(crate) struct TemplateRepository {
    _root: TempDir,
    path: PathBuf,
}

impl TemplateRepository {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create template repository directory");
        let path = root.path().join("vitron");
        fs::create_dir_all(&path).unwrap();

        git(&path, &["init", "--initial-branch=main"]);
        write_template_tree(&path);
        git(&path, &["add", "."]);
        git(&path, &["commit", "-m", "template"]);

        Self { _root: root, path }
    }

    pub(crate) fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }
}
