#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const PACKAGE_JSON: &str = r#"{
  "name": "fraction.js",
  "title": "Fraction.js",
  "version": "4.3.7",
  "homepage": "https://example.com/fraction",
  "author": {
    "name": "Jane Doe",
    "url": "https://example.com"
  },
  "license": "MIT"
}
"#;

pub fn modgen_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("modgen"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `package.json` and `src/<stem>.js` under `root`.
pub fn write_project(root: &Path, stem: &str, source: &str) {
	std::fs::write(root.join("package.json"), PACKAGE_JSON)
		.unwrap_or_else(|e| panic!("write package.json: {e}"));
	std::fs::create_dir_all(root.join("src")).unwrap_or_else(|e| panic!("create src: {e}"));
	std::fs::write(root.join("src").join(format!("{stem}.js")), source)
		.unwrap_or_else(|e| panic!("write source: {e}"));
}

pub fn read(path: impl AsRef<Path>) -> String {
	let path = path.as_ref();
	std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
