use std::sync::LazyLock;

use chrono::Datelike;
use chrono::NaiveDate;
use minijinja::context;
use regex::Regex;

use crate::ModgenResult;
use crate::PackageMetadata;
use crate::templates;

/// A single block comment carrying a `@license` tag. The body may span lines
/// but never contains `*/`, so a match cannot reach across code.
static LICENSE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"/\*(?:[^*]|\*+[^*/])*@license(?:[^*]|\*+[^*/])*\*+/")
		.expect("license comment pattern is valid")
});

/// Build the license banner placed at the top of the rewritten source and
/// the browser-global variant.
///
/// The date is rendered as `month/day/year` without zero padding, and the
/// copyright line uses the year of the same date.
pub fn license_header(meta: &PackageMetadata, date: NaiveDate) -> ModgenResult<String> {
	templates::render(
		"license_header",
		templates::LICENSE_HEADER,
		context! {
			meta => meta,
			date => format_banner_date(date),
			year => date.year(),
		},
	)
}

/// `M/D/YYYY`
pub fn format_banner_date(date: NaiveDate) -> String {
	format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Remove the first `@license` block comment and trim the remaining text.
///
/// Applying this before prepending a fresh banner keeps the rewrite
/// idempotent: a source file never accumulates more than one banner.
pub fn strip_license_comment(source: &str) -> String {
	LICENSE_COMMENT.replace(source, "").trim().to_string()
}

/// Number of `@license` banners in `text`.
pub fn count_license_banners(text: &str) -> usize {
	LICENSE_COMMENT.find_iter(text).count()
}
