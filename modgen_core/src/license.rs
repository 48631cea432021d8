use std::sync::LazyLock;

use minijinja::context;
use regex::Regex;

use crate::ModgenResult;
use crate::PackageMetadata;
use crate::templates;

/// A `## Copyright ...` heading line and every following line up to the next
/// line that starts with `#`.
static README_COPYRIGHT_SECTION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?im)^##[ \t]*copyright[^\n]*(?:\n(?:[^#\n][^\n]*)?)*")
		.expect("readme copyright pattern is valid")
});

/// Full license text for the `LICENSE` file.
///
/// Only `MIT` is known. Every other identifier yields an empty document.
pub fn license_file(meta: &PackageMetadata, year: i32) -> ModgenResult<String> {
	match meta.license.as_str() {
		"MIT" => {
			templates::render(
				"mit_license",
				templates::MIT_LICENSE,
				context! { meta => meta, year => year },
			)
		}
		other => {
			tracing::debug!(license = other, "no license text available");
			Ok(String::new())
		}
	}
}

/// The copyright section appended to the README.
pub fn readme_section(meta: &PackageMetadata, year: i32) -> ModgenResult<String> {
	templates::render(
		"readme_section",
		templates::README_SECTION,
		context! { meta => meta, year => year },
	)
}

/// Replace the README's copyright section with `section`.
///
/// The existing section is removed by heading match, the remainder trimmed,
/// and `section` appended after one blank line. An empty README becomes just
/// the section.
pub fn splice_readme(existing: &str, section: &str) -> String {
	let rest = README_COPYRIGHT_SECTION.replace(existing, "");
	let rest = rest.trim();

	if rest.is_empty() {
		section.to_string()
	} else {
		format!("{rest}\n\n{section}")
	}
}
