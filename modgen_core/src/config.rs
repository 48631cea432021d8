use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::ModgenError;
use crate::ModgenResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["modgen.toml", ".modgen.toml", ".config/modgen.toml"];

/// Module identifier used when none is supplied on the command line.
pub const DEFAULT_MODULE_NAME: &str = "None";

/// How the browser-global variant attaches the module once its body has run.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GlobalWrapper {
	/// Detect an AMD loader, then a CommonJS `exports` object, and fall back
	/// to a property on the global object.
	#[default]
	FeatureDetect,
	/// Always assign the module to a property on the global object.
	Plain,
}

impl fmt::Display for GlobalWrapper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FeatureDetect => write!(f, "feature-detect"),
			Self::Plain => write!(f, "plain"),
		}
	}
}

/// Input and output locations, relative to the project root.
///
/// ```toml
/// [paths]
/// metadata = "package.json"
/// source_dir = "src"
/// dist_dir = "dist"
/// readme = "README.md"
/// license = "LICENSE"
/// externs = "externs.js"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
	pub metadata: PathBuf,
	pub source_dir: PathBuf,
	pub dist_dir: PathBuf,
	pub readme: PathBuf,
	pub license: PathBuf,
	pub externs: PathBuf,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			metadata: PathBuf::from("package.json"),
			source_dir: PathBuf::from("src"),
			dist_dir: PathBuf::from("dist"),
			readme: PathBuf::from("README.md"),
			license: PathBuf::from("LICENSE"),
			externs: PathBuf::from("externs.js"),
		}
	}
}

/// External minifier settings.
///
/// ```toml
/// [minifier]
/// enabled = true
/// command = ["npx", "google-closure-compiler"]
/// warning_level = "VERBOSE"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MinifierConfig {
	/// When false the global variant is written unminified.
	pub enabled: bool,
	/// Program followed by any leading arguments. The compiler flags are
	/// appended after these.
	pub command: Vec<String>,
	/// Value passed as `--warning_level`.
	pub warning_level: String,
}

impl Default for MinifierConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			command: vec!["npx".to_string(), "google-closure-compiler".to_string()],
			warning_level: "VERBOSE".to_string(),
		}
	}
}

/// Configuration loaded from a `modgen.toml` file.
///
/// ```toml
/// global_wrapper = "plain"
///
/// [paths]
/// dist_dir = "build"
///
/// [minifier]
/// command = ["closure-compiler"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ModgenConfig {
	/// Strategy for the browser-global wrapper.
	#[serde(default)]
	pub global_wrapper: GlobalWrapper,
	#[serde(default)]
	pub paths: PathsConfig,
	#[serde(default)]
	pub minifier: MinifierConfig,
}

impl ModgenConfig {
	/// Find the first existing config file under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load configuration from the first config candidate found in `root`.
	/// Returns `Ok(None)` when no config file exists.
	pub fn load(root: &Path) -> ModgenResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: Self =
			toml::from_str(&content).map_err(|e| ModgenError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}

/// Everything a single build run needs, resolved once up front and then
/// passed by reference to each stage.
#[derive(Debug, Clone)]
pub struct BuildConfig {
	/// Exported symbol name, exactly as given on the command line.
	pub module_name: String,
	/// Project root every configured path is relative to.
	pub root: PathBuf,
	pub paths: PathsConfig,
	pub global_wrapper: GlobalWrapper,
	pub minifier: MinifierConfig,
	/// Date stamped into the license banner.
	pub date: NaiveDate,
}

impl BuildConfig {
	/// Combine a loaded config with the run-specific values.
	pub fn new(
		module_name: Option<String>,
		root: impl Into<PathBuf>,
		config: ModgenConfig,
		date: NaiveDate,
	) -> Self {
		Self {
			module_name: module_name.unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string()),
			root: root.into(),
			paths: config.paths,
			global_wrapper: config.global_wrapper,
			minifier: config.minifier,
			date,
		}
	}

	/// Lower-cased module identifier used as the file-name stem.
	pub fn stem(&self) -> String {
		self.module_name.to_lowercase()
	}

	/// All paths touched by this run.
	pub fn output_paths(&self) -> OutputPaths {
		OutputPaths::new(&self.root, &self.paths, &self.module_name)
	}
}

/// Absolute input and output paths derived from the module identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
	pub metadata: PathBuf,
	/// `src/<stem>.js`, read and then rewritten in place.
	pub source: PathBuf,
	/// `dist/<stem>.js`
	pub commonjs: PathBuf,
	/// `dist/<stem>.mjs`
	pub esm: PathBuf,
	/// `dist/<stem>.min.js`
	pub global: PathBuf,
	pub readme: PathBuf,
	pub license: PathBuf,
	pub externs: PathBuf,
}

impl OutputPaths {
	pub fn new(root: &Path, paths: &PathsConfig, module_name: &str) -> Self {
		let stem = module_name.to_lowercase();
		let dist = root.join(&paths.dist_dir);

		Self {
			metadata: root.join(&paths.metadata),
			source: root.join(&paths.source_dir).join(format!("{stem}.js")),
			commonjs: dist.join(format!("{stem}.js")),
			esm: dist.join(format!("{stem}.mjs")),
			global: dist.join(format!("{stem}.min.js")),
			readme: root.join(&paths.readme),
			license: root.join(&paths.license),
			externs: root.join(&paths.externs),
		}
	}
}
