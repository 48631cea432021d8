use std::cell::RefCell;
use std::path::Path;

use chrono::NaiveDate;

use crate::Author;
use crate::BuildConfig;
use crate::Minifier;
use crate::MinifyOutput;
use crate::MinifyRequest;
use crate::ModgenConfig;
use crate::ModgenError;
use crate::ModgenResult;
use crate::PackageMetadata;

pub(crate) const PACKAGE_JSON: &str = r#"{
  "name": "fraction.js",
  "title": "Fraction.js",
  "version": "4.3.7",
  "homepage": "https://example.com/fraction",
  "author": {
    "name": "Jane Doe",
    "email": "jane@example.com",
    "url": "https://example.com"
  },
  "license": "MIT"
}
"#;

pub(crate) fn sample_metadata() -> PackageMetadata {
	PackageMetadata {
		title: "Fraction.js".to_string(),
		version: "4.3.7".to_string(),
		homepage: "https://example.com/fraction".to_string(),
		author: Author {
			name: "Jane Doe".to_string(),
			url: "https://example.com".to_string(),
		},
		license: "MIT".to_string(),
	}
}

pub(crate) fn sample_date() -> NaiveDate {
	NaiveDate::from_ymd_opt(2024, 3, 7).unwrap_or_else(|| panic!("valid date"))
}

pub(crate) const SAMPLE_HEADER: &str = "/**
 * @license Fraction.js v4.3.7 3/7/2024
 * https://example.com/fraction
 *
 * Copyright (c) 2024, Jane Doe (https://example.com)
 * Licensed under the MIT license.
 **/

";

/// Lay out `package.json`, `src/<stem>.js` and optionally a README.
pub(crate) fn write_project(root: &Path, stem: &str, source: &str, readme: Option<&str>) {
	std::fs::write(root.join("package.json"), PACKAGE_JSON)
		.unwrap_or_else(|e| panic!("write package.json: {e}"));
	std::fs::create_dir_all(root.join("src")).unwrap_or_else(|e| panic!("create src: {e}"));
	std::fs::write(root.join("src").join(format!("{stem}.js")), source)
		.unwrap_or_else(|e| panic!("write source: {e}"));
	if let Some(readme) = readme {
		std::fs::write(root.join("README.md"), readme)
			.unwrap_or_else(|e| panic!("write readme: {e}"));
	}
}

pub(crate) fn build_config(root: &Path, module_name: &str) -> BuildConfig {
	BuildConfig::new(
		Some(module_name.to_string()),
		root,
		ModgenConfig::default(),
		sample_date(),
	)
}

pub(crate) fn read(path: impl AsRef<Path>) -> String {
	let path = path.as_ref();
	std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// What a [`FakeMinifier`] saw when it was called.
#[derive(Debug, Clone)]
pub(crate) struct MinifyCall {
	pub args: Vec<String>,
	pub input: String,
	pub externs: String,
}

/// Records its calls and answers with a canned result.
pub(crate) struct FakeMinifier {
	pub result: Option<MinifyOutput>,
	pub calls: RefCell<Vec<MinifyCall>>,
}

impl FakeMinifier {
	pub fn succeeding(stdout: &str, stderr: &str) -> Self {
		Self::returning(MinifyOutput {
			success: true,
			exit_code: Some(0),
			stdout: stdout.to_string(),
			stderr: stderr.to_string(),
		})
	}

	pub fn returning(output: MinifyOutput) -> Self {
		Self {
			result: Some(output),
			calls: RefCell::new(Vec::new()),
		}
	}

	/// Behaves like a compiler binary that is not installed.
	pub fn missing() -> Self {
		Self {
			result: None,
			calls: RefCell::new(Vec::new()),
		}
	}
}

impl Minifier for FakeMinifier {
	fn name(&self) -> String {
		"fake-compiler".to_string()
	}

	fn minify(&self, request: &MinifyRequest<'_>) -> ModgenResult<MinifyOutput> {
		self.calls.borrow_mut().push(MinifyCall {
			args: request.args(),
			input: std::fs::read_to_string(request.input).unwrap_or_default(),
			externs: std::fs::read_to_string(request.externs).unwrap_or_default(),
		});

		self.result.clone().ok_or_else(|| {
			ModgenError::MinifierSpawn {
				command: self.name(),
				reason: "No such file or directory (os error 2)".to_string(),
			}
		})
	}
}
