use minijinja::context;

use crate::Externs;
use crate::GlobalWrapper;
use crate::ModgenResult;
use crate::templates;

/// Everything a variant is rendered from. Rendering is a pure function of
/// these values.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
	/// Exported symbol name.
	pub module_name: &'a str,
	/// License banner, already rendered.
	pub header: &'a str,
	/// Source body after license and extern stripping.
	pub source: &'a str,
	pub externs: &'a Externs,
}

/// The four renderings of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variants {
	/// Banner plus the license-stripped source, written back over the input.
	pub original: String,
	pub commonjs: String,
	pub esm: String,
	pub global: String,
}

/// Banner followed by the source. The source passed in here is the
/// license-stripped text *before* extern extraction so the rewritten input
/// keeps its declarations.
pub fn render_original(header: &str, source: &str) -> ModgenResult<String> {
	templates::render(
		"original",
		templates::ORIGINAL,
		context! { header => header, source => source },
	)
}

/// `require`-based build with a `module.exports` trailer.
pub fn render_commonjs(input: &RenderInput<'_>) -> ModgenResult<String> {
	templates::render(
		"commonjs",
		templates::COMMONJS,
		context! {
			name => input.module_name,
			source => input.source,
			externs => input.externs,
		},
	)
}

/// `import`-based build with an `export { .. }` trailer.
pub fn render_esm(input: &RenderInput<'_>) -> ModgenResult<String> {
	templates::render(
		"esm",
		templates::ESM,
		context! {
			name => input.module_name,
			source => input.source,
			externs => input.externs,
		},
	)
}

/// Self-invoking closure over the global object. Externs are expected to be
/// globals already, so no inclusion statements are emitted.
pub fn render_global(input: &RenderInput<'_>, wrapper: GlobalWrapper) -> ModgenResult<String> {
	let (name, template) = match wrapper {
		GlobalWrapper::FeatureDetect => ("global_feature_detect", templates::GLOBAL_FEATURE_DETECT),
		GlobalWrapper::Plain => ("global_plain", templates::GLOBAL_PLAIN),
	};

	templates::render(
		name,
		template,
		context! {
			name => input.module_name,
			header => input.header,
			source => input.source,
		},
	)
}

/// Declarations handed to the minifier so it keeps extern bindings intact.
pub fn render_externs_listing(externs: &Externs) -> ModgenResult<String> {
	templates::render(
		"externs_listing",
		templates::EXTERNS_LISTING,
		context! { externs => externs },
	)
}

/// Render every variant. `original_source` is the license-stripped input;
/// `input.source` has its extern declarations removed as well.
pub fn render_variants(
	original_source: &str,
	input: &RenderInput<'_>,
	wrapper: GlobalWrapper,
) -> ModgenResult<Variants> {
	Ok(Variants {
		original: render_original(input.header, original_source)?,
		commonjs: render_commonjs(input)?,
		esm: render_esm(input)?,
		global: render_global(input, wrapper)?,
	})
}
