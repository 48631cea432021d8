use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::MinifierConfig;
use crate::ModgenError;
use crate::ModgenResult;

/// Sources containing this marker are compiled with
/// [`CompilationLevel::Simple`].
pub const SIMPLE_COMPILATION_MARKER: &str = "!simple-compilation";

static LEADING_SPACES: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^ +").expect("leading spaces pattern is valid"));

/// Closure Compiler optimization level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationLevel {
	Simple,
	Advanced,
}

impl CompilationLevel {
	/// `Simple` when the source opts out of advanced renaming, `Advanced`
	/// otherwise.
	pub fn for_source(source: &str) -> Self {
		if source.contains(SIMPLE_COMPILATION_MARKER) {
			Self::Simple
		} else {
			Self::Advanced
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Simple => "SIMPLE",
			Self::Advanced => "ADVANCED",
		}
	}
}

impl fmt::Display for CompilationLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One minifier invocation.
#[derive(Debug, Clone, Copy)]
pub struct MinifyRequest<'a> {
	/// File to compile; the browser-global variant.
	pub input: &'a Path,
	/// Externs listing the compiler must respect.
	pub externs: &'a Path,
	pub level: CompilationLevel,
	pub warning_level: &'a str,
}

impl MinifyRequest<'_> {
	/// Command line flags understood by the Closure Compiler CLI.
	pub fn args(&self) -> Vec<String> {
		vec![
			format!("--js={}", self.input.display()),
			format!("--compilation_level={}", self.level),
			format!("--warning_level={}", self.warning_level),
			format!("--externs={}", self.externs.display()),
			"--emit_use_strict".to_string(),
		]
	}
}

/// What the compiler produced. A failed run still carries whatever it wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinifyOutput {
	pub success: bool,
	pub exit_code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

/// Anything that can turn the global variant into minified code.
pub trait Minifier {
	/// Human readable name used in logs.
	fn name(&self) -> String;

	/// Run the compiler. An `Err` means it could not be started at all; a
	/// compiler that ran and failed returns `Ok` with `success == false`.
	fn minify(&self, request: &MinifyRequest<'_>) -> ModgenResult<MinifyOutput>;
}

/// Spawns the Closure Compiler (or any CLI accepting the same flags).
#[derive(Debug, Clone)]
pub struct ClosureCompiler {
	program: String,
	leading_args: Vec<String>,
	current_dir: PathBuf,
}

impl ClosureCompiler {
	pub fn new(
		program: impl Into<String>,
		leading_args: Vec<String>,
		current_dir: impl Into<PathBuf>,
	) -> Self {
		Self {
			program: program.into(),
			leading_args,
			current_dir: current_dir.into(),
		}
	}

	/// Build from `[minifier] command`, running from the project root.
	pub fn from_config(config: &MinifierConfig, root: &Path) -> ModgenResult<Self> {
		let Some((program, leading_args)) = config.command.split_first() else {
			return Err(ModgenError::EmptyMinifierCommand);
		};

		Ok(Self::new(program.clone(), leading_args.to_vec(), root))
	}
}

impl Minifier for ClosureCompiler {
	fn name(&self) -> String {
		std::iter::once(self.program.as_str())
			.chain(self.leading_args.iter().map(String::as_str))
			.collect::<Vec<_>>()
			.join(" ")
	}

	fn minify(&self, request: &MinifyRequest<'_>) -> ModgenResult<MinifyOutput> {
		let output = Command::new(&self.program)
			.args(&self.leading_args)
			.args(request.args())
			.current_dir(&self.current_dir)
			.output()
			.map_err(|e| {
				ModgenError::MinifierSpawn {
					command: self.name(),
					reason: e.to_string(),
				}
			})?;

		Ok(MinifyOutput {
			success: output.status.success(),
			exit_code: output.status.code(),
			stdout: String::from_utf8_lossy(&output.stdout).to_string(),
			stderr: String::from_utf8_lossy(&output.stderr).to_string(),
		})
	}
}

/// Drop the leading spaces of every line of compiler output.
pub fn strip_leading_indentation(text: &str) -> String {
	LEADING_SPACES.replace_all(text, "").into_owned()
}
