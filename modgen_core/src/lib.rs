//! `modgen_core` is the library behind the `modgen` command. It takes a single
//! JavaScript source file and produces the files a small library ships: a
//! CommonJS build, an ES module build, a browser-global build that is then
//! minified, a `LICENSE` file and the copyright section of the README.
//!
//! ## Processing Pipeline
//!
//! ```text
//! package.json + src/<name>.js
//!   → License stripping (drops any previous `@license` banner)
//!   → Extern extraction (collects and removes `import X from 'x'` declarations)
//!   → Renderers (original, CommonJS, ES module, browser-global)
//!   → Sequenced writes, failures collected in a `BuildReport`
//!   → Minifier (Closure Compiler) over the browser-global build
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `modgen.toml` loading, the resolved [`BuildConfig`] and the
//!   derived [`OutputPaths`].
//! - [`minify`]: compilation level selection and the [`Minifier`] trait with
//!   its process-backed [`ClosureCompiler`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modgen_core::BuildConfig;
//! use modgen_core::ClosureCompiler;
//! use modgen_core::ModgenConfig;
//! use modgen_core::run_build;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = ModgenConfig::load(root).unwrap().unwrap_or_default();
//! let today = chrono::Local::now().date_naive();
//! let build = BuildConfig::new(Some("Fraction".to_string()), root, config, today);
//! let compiler = ClosureCompiler::from_config(&build.minifier, root).unwrap();
//!
//! let report = run_build(&build, Some(&compiler)).unwrap();
//! for failure in &report.failures {
//!     eprintln!("{}: {}", failure.path.display(), failure.reason);
//! }
//! ```

pub use build::*;
pub use config::*;
pub use error::*;
pub use externs::*;
pub use header::*;
pub use license::*;
pub use metadata::*;
pub use minify::*;
pub use render::*;

mod build;
pub mod config;
#[allow(unused_assignments)]
mod error;
mod externs;
mod header;
mod license;
mod metadata;
pub mod minify;
mod render;
mod templates;

#[cfg(test)]
mod __fixtures;
