use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use modgen_core::GlobalWrapper;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate CommonJS, ES module and browser-global builds from a single JavaScript source.",
	long_about = "modgen reads `package.json` and `src/<name>.js`, refreshes the license banner \
	              of the source, and writes `dist/<name>.js` (CommonJS), `dist/<name>.mjs` (ES \
	              module) and `dist/<name>.min.js` (browser global, minified with the Closure \
	              Compiler). It also regenerates `LICENSE` and the copyright section of \
	              `README.md`.\n\nDeclare external dependencies with `import Name from 'path';` \
	              or `/* @extern Name from 'path' */`. They become `require`/`import` statements \
	              in the module builds and externs for the minifier.\n\nQuick start:\n  modgen \
	              Fraction            Build src/fraction.js\n  modgen Fraction --dry-run  Show \
	              what would change\n  modgen Fraction --no-minify Skip the Closure Compiler"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModgenCli {
	/// Module identifier. Used verbatim as the exported symbol and
	/// lower-cased for every file name. Defaults to `None`.
	pub name: Option<String>,

	/// Path to the project root directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// How the browser-global build attaches the module. Overrides
	/// `global_wrapper` in modgen.toml.
	#[arg(long, value_enum)]
	pub global_wrapper: Option<WrapperArg>,

	/// Skip the minifier and leave `dist/<name>.min.js` unminified.
	#[arg(long, default_value_t = false)]
	pub no_minify: bool,

	/// Compute every output and list the files that would change without
	/// writing anything or running the minifier.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// With `--dry-run`, print a unified diff for each file that would
	/// change.
	#[arg(long, default_value_t = false, requires = "dry_run")]
	pub diff: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WrapperArg {
	/// Detect an AMD loader or a CommonJS `exports` object before falling
	/// back to a property on the global object.
	FeatureDetect,
	/// Always assign the module to a property on the global object.
	Plain,
}

impl From<WrapperArg> for GlobalWrapper {
	fn from(value: WrapperArg) -> Self {
		match value {
			WrapperArg::FeatureDetect => Self::FeatureDetect,
			WrapperArg::Plain => Self::Plain,
		}
	}
}
