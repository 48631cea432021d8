use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use modgen_cli::ModgenCli;
use modgen_core::BuildConfig;
use modgen_core::BuildPlan;
use modgen_core::BuildReport;
use modgen_core::ClosureCompiler;
use modgen_core::Minifier;
use modgen_core::ModgenConfig;
use modgen_core::execute_plan;
use modgen_core::plan_build;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ModgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_logger(args.verbose, use_color);

	match run(&args) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			// Try to render through miette for rich diagnostics with help text
			// and error codes.
			match e.downcast::<modgen_core::ModgenError>() {
				Ok(modgen_err) => {
					let report: miette::Report = (*modgen_err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!("error:", red));
				}
			}
			process::exit(2);
		}
	}
}

/// Log to stderr so stdout only carries the command's own output.
fn init_logger(verbose: bool, use_color: bool) {
	let default_filter = if verbose {
		"modgen=debug,modgen_core=debug"
	} else {
		"modgen=info,modgen_core=info"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(use_color)
				.with_target(false)
				.without_time()
				.compact(),
		)
		.init();
}

/// Absolute project root. The minifier runs from this directory, so its
/// input paths must not depend on the caller's working directory.
fn resolve_root(args: &ModgenCli) -> std::io::Result<PathBuf> {
	match &args.path {
		Some(path) => std::path::absolute(path),
		None => std::env::current_dir(),
	}
}

fn resolve_build_config(args: &ModgenCli) -> Result<BuildConfig, Box<dyn std::error::Error>> {
	let root = resolve_root(args)?;
	let config_path = ModgenConfig::resolve_path(&root);
	let config = ModgenConfig::load(&root)?.unwrap_or_default();

	let mut build = BuildConfig::new(
		args.name.clone(),
		root,
		config,
		chrono::Local::now().date_naive(),
	);
	if let Some(wrapper) = args.global_wrapper {
		build.global_wrapper = wrapper.into();
	}
	if args.no_minify {
		build.minifier.enabled = false;
	}

	tracing::debug!(
		module = %build.module_name,
		root = %build.root.display(),
		config = ?config_path,
		wrapper = %build.global_wrapper,
		minify = build.minifier.enabled,
		"resolved build config"
	);

	Ok(build)
}

/// Run one build. Returns `Ok(false)` when some output could not be written.
fn run(args: &ModgenCli) -> Result<bool, Box<dyn std::error::Error>> {
	let build = resolve_build_config(args)?;
	let plan = plan_build(&build)
		.inspect_err(|e| tracing::error!(error = %e, "build aborted, nothing was written"))?;

	if args.dry_run {
		print_dry_run(&plan, &build, args.diff);
		return Ok(true);
	}

	let compiler = if build.minifier.enabled {
		Some(ClosureCompiler::from_config(&build.minifier, &build.root)?)
	} else {
		None
	};
	let minifier = compiler.as_ref().map(|compiler| compiler as &dyn Minifier);

	let report = execute_plan(&plan, &build, minifier);
	print_report(&report, &build, args.verbose);

	Ok(report.is_ok())
}

fn print_report(report: &BuildReport, build: &BuildConfig, verbose: bool) {
	if let Some(minify) = &report.minify {
		if !minify.diagnostics.is_empty() {
			eprint!("{}", minify.diagnostics);
		}
		if !minify.success {
			let status = minify
				.exit_code
				.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"));
			eprintln!(
				"{} minifier `{}` exited with {status}; its output was written anyway",
				colored!("warning:", yellow),
				minify.command
			);
		}
	}

	for failure in &report.failures {
		let rel = make_relative(&failure.path, &build.root);
		eprintln!("{} {rel}: {}", colored!("error:", red), failure.reason);
	}

	if verbose {
		for path in &report.written {
			println!("  wrote {}", make_relative(path, &build.root));
		}
	}

	let externs = if report.externs.is_empty() {
		"no externs".to_string()
	} else {
		format!(
			"{} extern(s): {}",
			report.externs.len(),
			report.externs.names().join(", ")
		)
	};
	let minified = match &report.minify {
		Some(minify) => format!(", minified ({})", minify.level),
		None => String::new(),
	};

	let summary = format!(
		"Built {}: {} file(s) written, {externs}{minified}.",
		build.module_name,
		report.written.len()
	);
	if report.is_ok() {
		println!("{}", colored!(summary, green));
	} else {
		println!("{summary}");
		eprintln!(
			"{} {} output(s) failed.",
			colored!("error:", red),
			report.failures.len()
		);
	}
}

fn print_dry_run(plan: &BuildPlan, build: &BuildConfig, show_diff: bool) {
	let changed: Vec<_> = plan.files.iter().filter(|file| file.is_changed()).collect();

	if changed.is_empty() {
		println!("Dry run: all outputs are already up to date.");
	} else {
		println!("Dry run: would write {} file(s):", changed.len());
	}

	for skipped in &plan.skipped {
		let rel = make_relative(&skipped.path, &build.root);
		eprintln!(
			"{} {rel} would be skipped: {}",
			colored!("warning:", yellow),
			skipped.reason
		);
	}

	for file in &changed {
		let rel = make_relative(&file.path, &build.root);
		println!("  {:<9} {rel}", file.kind.to_string());

		if show_diff {
			let current = file.current_content().unwrap_or_default();
			print_diff(&current, &file.content);
		}
	}

	if !plan.externs.is_empty() {
		println!(
			"{} {}",
			colored!("Externs:", bold),
			plan.externs.names().join(", ")
		);
	}

	if build.minifier.enabled {
		println!(
			"Would minify {} with `{}` ({}).",
			make_relative(&plan.paths.global, &build.root),
			build.minifier.command.join(" "),
			plan.level
		);
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
