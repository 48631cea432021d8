use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::ModgenError;
use crate::ModgenResult;

/// Author entry of the project descriptor.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Author {
	pub name: String,
	pub url: String,
}

/// The subset of `package.json` used to build license banners and license
/// documents. Read once per run and never mutated.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PackageMetadata {
	pub title: String,
	pub version: String,
	pub homepage: String,
	pub author: Author,
	pub license: String,
}

impl PackageMetadata {
	/// Parse metadata from the contents of a project descriptor. `path` is only
	/// used for error reporting.
	pub fn from_json(content: &str, path: &Path) -> ModgenResult<Self> {
		serde_json::from_str(content).map_err(|e| {
			ModgenError::MetadataParse {
				path: path.to_path_buf(),
				reason: e.to_string(),
			}
		})
	}

	/// Read and parse the project descriptor at `path`.
	pub fn load(path: &Path) -> ModgenResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| {
			ModgenError::MetadataRead {
				path: path.to_path_buf(),
				reason: e.to_string(),
			}
		})?;

		Self::from_json(&content, path)
	}
}
