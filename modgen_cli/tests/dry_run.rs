mod common;

use modgen_core::AnyEmptyResult;
use similar_asserts::assert_eq;

#[test]
fn dry_run_lists_files_without_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "import Bar from 'bar';\nvar Foo = 1;\n");
	let original = common::read(tmp.path().join("src/foo.js"));

	common::modgen_cmd()
		.arg("Foo")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run: would write 6 file(s):"))
		.stdout(predicates::str::contains("commonjs"))
		.stdout(predicates::str::contains("Externs: Bar"))
		.stdout(predicates::str::contains("google-closure-compiler"));

	assert_eq!(common::read(tmp.path().join("src/foo.js")), original);
	assert!(!tmp.path().join("dist").exists());
	assert!(!tmp.path().join("LICENSE").exists());
	assert!(!tmp.path().join("README.md").exists());

	Ok(())
}

#[test]
fn dry_run_diff_shows_new_content() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");

	common::modgen_cmd()
		.arg("Foo")
		.arg("--dry-run")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("+'use strict';"))
		.stdout(predicates::str::contains("+ * @license Fraction.js"));

	Ok(())
}

#[test]
fn dry_run_after_build_reports_up_to_date() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");

	common::modgen_cmd()
		.arg("Foo")
		.arg("--no-minify")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::modgen_cmd()
		.arg("Foo")
		.arg("--no-minify")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("all outputs are already up to date"));

	Ok(())
}

#[test]
fn diff_requires_dry_run() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");

	common::modgen_cmd()
		.arg("Foo")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure();

	assert!(!tmp.path().join("dist").exists());

	Ok(())
}
