use std::sync::LazyLock;

use derive_more::Deref;
use derive_more::DerefMut;
use regex::Captures;
use regex::Regex;
use serde::Serialize;

/// Matches either declaration form, together with the whitespace before it:
///
/// - `import Name from 'path';` (semicolon optional)
/// - `/* @extern Name from 'path' */`
///
/// Both forms share one pattern so a single left-to-right scan yields the
/// declarations in source order.
static EXTERN_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(concat!(
		r#"(?i)\s*(?:"#,
		r#"\bimport\s+(?P<import_name>[a-z0-9_$.-]+)\s+from\s*["'](?P<import_source>[a-z0-9_@/.-]+)["']\s*;?"#,
		r#"|"#,
		r#"/\*\s*@extern\s+(?P<extern_name>[a-z0-9_$.-]+)\s+from\s*["'](?P<extern_source>[a-z0-9_@/.-]+)["']\s*\*/"#,
		r#")"#,
	))
	.expect("extern declaration pattern is valid")
});

/// An external dependency: the binding the minifier must leave alone and the
/// module it is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extern {
	pub name: String,
	pub source: String,
}

impl Extern {
	pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			source: source.into(),
		}
	}

	fn from_captures(caps: &Captures<'_>) -> Option<Self> {
		let (name, source) = match (caps.name("import_name"), caps.name("import_source")) {
			(Some(name), Some(source)) => (name, source),
			_ => (caps.name("extern_name")?, caps.name("extern_source")?),
		};

		Some(Self::new(name.as_str(), source.as_str()))
	}
}

/// Externs in the order they appear in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct Externs(Vec<Extern>);

impl Externs {
	/// Binding names only, in order.
	pub fn names(&self) -> Vec<&str> {
		self.0.iter().map(|e| e.name.as_str()).collect()
	}
}

impl From<Vec<Extern>> for Externs {
	fn from(value: Vec<Extern>) -> Self {
		Self(value)
	}
}

impl FromIterator<Extern> for Externs {
	fn from_iter<T: IntoIterator<Item = Extern>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Source text with its extern declarations removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSource {
	pub source: String,
	pub externs: Externs,
}

/// Collect every extern declaration in `source` and cut it out of the text.
///
/// Declarations that don't fit either form are left untouched; there is no
/// error case.
pub fn extract_externs(source: &str) -> ExtractedSource {
	let mut externs = Externs::default();

	let stripped = EXTERN_DECLARATION.replace_all(source, |caps: &Captures<'_>| {
		if let Some(found) = Extern::from_captures(caps) {
			tracing::debug!(name = %found.name, source = %found.source, "found extern");
			externs.push(found);
		}
		""
	});

	ExtractedSource {
		source: stripped.into_owned(),
		externs,
	}
}
