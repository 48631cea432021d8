use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ModgenError {
	#[error(transparent)]
	#[diagnostic(code(modgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read package metadata `{path}`: {reason}")]
	#[diagnostic(
		code(modgen::metadata_read),
		help("run modgen from the project root or pass `--path` pointing at it")
	)]
	MetadataRead { path: PathBuf, reason: String },

	#[error("failed to parse package metadata `{path}`: {reason}")]
	#[diagnostic(
		code(modgen::metadata_parse),
		help("package.json needs `title`, `version`, `homepage`, `author.name`, `author.url` and `license`")
	)]
	MetadataParse { path: PathBuf, reason: String },

	#[error("failed to read source file `{path}`: {reason}")]
	#[diagnostic(
		code(modgen::source_read),
		help("the source file path is derived from the lower-cased module name, e.g. `src/foo.js` for `Foo`")
	)]
	SourceRead { path: PathBuf, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(modgen::config_parse),
		help("check that modgen.toml is valid TOML with optional [paths] and [minifier] sections")
	)]
	ConfigParse(String),

	#[error("template rendering failed: {0}")]
	#[diagnostic(code(modgen::template_render))]
	TemplateRender(String),

	#[error("failed to start minifier `{command}`: {reason}")]
	#[diagnostic(
		code(modgen::minifier_spawn),
		help("install the compiler or point `[minifier] command` in modgen.toml at it, or pass `--no-minify`")
	)]
	MinifierSpawn { command: String, reason: String },

	#[error("minifier command is empty")]
	#[diagnostic(
		code(modgen::minifier_command),
		help("set `[minifier] command` to a non-empty list, e.g. [\"npx\", \"google-closure-compiler\"]")
	)]
	EmptyMinifierCommand,
}

pub type ModgenResult<T> = Result<T, ModgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
