use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use chrono::Datelike;

use crate::BuildConfig;
use crate::CompilationLevel;
use crate::Externs;
use crate::Minifier;
use crate::MinifyRequest;
use crate::ModgenError;
use crate::ModgenResult;
use crate::OutputPaths;
use crate::PackageMetadata;
use crate::RenderInput;
use crate::extract_externs;
use crate::license_file;
use crate::license_header;
use crate::readme_section;
use crate::render_externs_listing;
use crate::render_variants;
use crate::splice_readme;
use crate::strip_leading_indentation;
use crate::strip_license_comment;

/// Which generated file a [`PlannedFile`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
	Source,
	CommonJs,
	EsModule,
	Global,
	License,
	Readme,
}

impl fmt::Display for OutputKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Source => "source",
			Self::CommonJs => "commonjs",
			Self::EsModule => "esm",
			Self::Global => "global",
			Self::License => "license",
			Self::Readme => "readme",
		};
		f.write_str(label)
	}
}

/// A file the build will write, with its full new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
	pub kind: OutputKind,
	pub path: PathBuf,
	pub content: String,
}

impl PlannedFile {
	/// Current content on disk, if the file exists and is readable.
	pub fn current_content(&self) -> Option<String> {
		std::fs::read_to_string(&self.path).ok()
	}

	/// True when writing this file would change what is on disk.
	pub fn is_changed(&self) -> bool {
		self.current_content().as_deref() != Some(self.content.as_str())
	}
}

/// Every output of a run, computed before anything is written.
#[derive(Debug, Clone)]
pub struct BuildPlan {
	pub paths: OutputPaths,
	/// Files in write order. The global variant always precedes minification.
	pub files: Vec<PlannedFile>,
	pub externs: Externs,
	/// Declarations handed to the minifier.
	pub externs_listing: String,
	pub level: CompilationLevel,
	/// Outputs left out of `files` because their current content could not
	/// be read. Carried into the report as failures.
	pub skipped: Vec<WriteFailure>,
}

impl BuildPlan {
	pub fn file(&self, kind: OutputKind) -> Option<&PlannedFile> {
		self.files.iter().find(|file| file.kind == kind)
	}
}

/// A write or removal that failed. Failures never stop the remaining writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
	pub path: PathBuf,
	pub reason: String,
}

/// How the minifier run went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyReport {
	pub command: String,
	pub level: CompilationLevel,
	pub success: bool,
	pub exit_code: Option<i32>,
	/// Compiler stderr, passed through untouched.
	pub diagnostics: String,
}

/// Outcome of [`execute_plan`].
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
	pub written: Vec<PathBuf>,
	pub removed: Vec<PathBuf>,
	pub failures: Vec<WriteFailure>,
	pub externs: Externs,
	pub minify: Option<MinifyReport>,
}

impl BuildReport {
	/// True when every write succeeded and the minifier (if any) could be
	/// started.
	pub fn is_ok(&self) -> bool {
		self.failures.is_empty()
	}

	fn write(&mut self, path: &Path, content: &str) -> bool {
		match write_file(path, content) {
			Ok(()) => {
				tracing::info!(path = %path.display(), "wrote");
				self.written.push(path.to_path_buf());
				true
			}
			Err(e) => {
				tracing::warn!(path = %path.display(), error = %e, "write failed");
				self.failures.push(WriteFailure {
					path: path.to_path_buf(),
					reason: e.to_string(),
				});
				false
			}
		}
	}

	fn remove(&mut self, path: &Path) {
		match std::fs::remove_file(path) {
			Ok(()) => {
				tracing::debug!(path = %path.display(), "removed");
				self.removed.push(path.to_path_buf());
			}
			Err(e) => {
				self.failures.push(WriteFailure {
					path: path.to_path_buf(),
					reason: e.to_string(),
				});
			}
		}
	}
}

/// Read the metadata and source and compute every output.
///
/// Nothing is written. A missing or unreadable source file is reported as
/// [`ModgenError::SourceRead`] before any output exists, so callers that stop
/// on error never produce a partial build.
pub fn plan_build(config: &BuildConfig) -> ModgenResult<BuildPlan> {
	let paths = config.output_paths();

	let meta = PackageMetadata::load(&paths.metadata)?;
	tracing::debug!(title = %meta.title, version = %meta.version, "loaded metadata");

	let raw_source = std::fs::read_to_string(&paths.source).map_err(|e| {
		ModgenError::SourceRead {
			path: paths.source.clone(),
			reason: e.to_string(),
		}
	})?;

	let year = config.date.year();
	let header = license_header(&meta, config.date)?;
	let source = strip_license_comment(&raw_source);
	let extracted = extract_externs(&source);
	let level = CompilationLevel::for_source(&extracted.source);
	tracing::debug!(
		externs = extracted.externs.len(),
		level = %level,
		"transformed source"
	);

	let input = RenderInput {
		module_name: &config.module_name,
		header: &header,
		source: &extracted.source,
		externs: &extracted.externs,
	};
	let variants = render_variants(&source, &input, config.global_wrapper)?;

	let mut skipped = Vec::new();
	let readme = match std::fs::read_to_string(&paths.readme) {
		Ok(content) => Some(content),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
			tracing::debug!(path = %paths.readme.display(), "readme not found, starting empty");
			Some(String::new())
		}
		Err(e) => {
			tracing::warn!(path = %paths.readme.display(), error = %e, "readme not readable, leaving it untouched");
			skipped.push(WriteFailure {
				path: paths.readme.clone(),
				reason: e.to_string(),
			});
			None
		}
	};

	let mut files = vec![
		PlannedFile {
			kind: OutputKind::Source,
			path: paths.source.clone(),
			content: variants.original,
		},
		PlannedFile {
			kind: OutputKind::CommonJs,
			path: paths.commonjs.clone(),
			content: variants.commonjs,
		},
		PlannedFile {
			kind: OutputKind::EsModule,
			path: paths.esm.clone(),
			content: variants.esm,
		},
		PlannedFile {
			kind: OutputKind::Global,
			path: paths.global.clone(),
			content: variants.global,
		},
		PlannedFile {
			kind: OutputKind::License,
			path: paths.license.clone(),
			content: license_file(&meta, year)?,
		},
	];
	if let Some(readme) = readme {
		files.push(PlannedFile {
			kind: OutputKind::Readme,
			path: paths.readme.clone(),
			content: splice_readme(&readme, &readme_section(&meta, year)?),
		});
	}

	Ok(BuildPlan {
		externs_listing: render_externs_listing(&extracted.externs)?,
		paths,
		files,
		externs: extracted.externs,
		level,
		skipped,
	})
}

/// Write every planned file in order, then minify the global variant when a
/// minifier is given.
///
/// Every write is attempted; failures are collected in the report. The
/// minified output replaces the global variant whatever the compiler's exit
/// status, and the externs listing is always removed afterwards.
pub fn execute_plan(
	plan: &BuildPlan,
	config: &BuildConfig,
	minifier: Option<&dyn Minifier>,
) -> BuildReport {
	let mut report = BuildReport {
		externs: plan.externs.clone(),
		failures: plan.skipped.clone(),
		..BuildReport::default()
	};

	let mut global_written = false;
	for file in &plan.files {
		let ok = report.write(&file.path, &file.content);
		if file.kind == OutputKind::Global {
			global_written = ok;
		}
	}

	let Some(minifier) = minifier else {
		return report;
	};

	if !global_written {
		tracing::warn!("global variant was not written, skipping minification");
		return report;
	}

	if !report.write(&plan.paths.externs, &plan.externs_listing) {
		return report;
	}

	let request = MinifyRequest {
		input: &plan.paths.global,
		externs: &plan.paths.externs,
		level: plan.level,
		warning_level: &config.minifier.warning_level,
	};
	tracing::info!(command = %minifier.name(), level = %plan.level, "minifying");

	match minifier.minify(&request) {
		Ok(output) => {
			if !output.success {
				tracing::warn!(exit_code = ?output.exit_code, "minifier exited with failure");
			}

			report.write(&plan.paths.global, &strip_leading_indentation(&output.stdout));
			report.minify = Some(MinifyReport {
				command: minifier.name(),
				level: plan.level,
				success: output.success,
				exit_code: output.exit_code,
				diagnostics: output.stderr,
			});
		}
		Err(e) => {
			tracing::warn!(error = %e, "minifier could not be started");
			report.failures.push(WriteFailure {
				path: plan.paths.global.clone(),
				reason: e.to_string(),
			});
		}
	}

	report.remove(&plan.paths.externs);
	report
}

/// Plan and execute a full build.
pub fn run_build(config: &BuildConfig, minifier: Option<&dyn Minifier>) -> ModgenResult<BuildReport> {
	let plan = plan_build(config)?;
	Ok(execute_plan(&plan, config, minifier))
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}

	std::fs::write(path, content)
}
