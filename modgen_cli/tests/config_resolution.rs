mod common;

use modgen_core::AnyEmptyResult;

#[test]
fn config_paths_move_outputs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");
	std::fs::write(
		tmp.path().join("modgen.toml"),
		"[paths]\ndist_dir = \"build\"\nlicense = \"LICENSE.txt\"\n\n[minifier]\nenabled = false\n",
	)?;

	common::modgen_cmd()
		.arg("Foo")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("build/foo.js").exists());
	assert!(tmp.path().join("build/foo.mjs").exists());
	assert!(tmp.path().join("build/foo.min.js").exists());
	assert!(tmp.path().join("LICENSE.txt").exists());
	assert!(!tmp.path().join("dist").exists());

	Ok(())
}

#[test]
fn config_resolves_dot_config_modgen_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");
	std::fs::create_dir_all(tmp.path().join(".config"))?;
	std::fs::write(
		tmp.path().join(".config/modgen.toml"),
		"global_wrapper = \"plain\"\n\n[minifier]\nenabled = false\n",
	)?;

	common::modgen_cmd()
		.arg("Foo")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let global = common::read(tmp.path().join("dist/foo.min.js"));
	assert!(!global.contains("define"));

	Ok(())
}

#[test]
fn cli_flag_overrides_configured_wrapper() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");
	std::fs::write(
		tmp.path().join(".modgen.toml"),
		"global_wrapper = \"plain\"\n",
	)?;

	common::modgen_cmd()
		.arg("Foo")
		.arg("--no-minify")
		.arg("--global-wrapper")
		.arg("feature-detect")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let global = common::read(tmp.path().join("dist/foo.min.js"));
	assert!(global.contains("define['amd']"));

	Ok(())
}

#[test]
fn invalid_config_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), "foo", "var Foo = 1;\n");
	std::fs::write(tmp.path().join("modgen.toml"), "global_wrapper = 3\n")?;

	common::modgen_cmd()
		.arg("Foo")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to parse config file"));

	assert!(!tmp.path().join("dist").exists());

	Ok(())
}
