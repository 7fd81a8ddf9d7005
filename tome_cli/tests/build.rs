mod common;

use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;
use tome_core::AnyEmptyResult;

#[test]
fn build_prints_the_catalog_as_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("site.page.md"),
		"+++\n[home]\ntitle = \"Home\"\n+++\n",
	)?;

	let mut cmd = common::tome_cmd();
	let assert = cmd
		.env("NO_COLOR", "1")
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.arg("--class")
		.arg("page")
		.assert()
		.success();

	let output: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(output["home"]["title"], Value::String("Home".to_string()));

	Ok(())
}

#[test]
fn build_reads_the_class_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("tome.toml"), "class = \"page\"\n")?;
	std::fs::write(
		tmp.path().join("site.page.toml"),
		"[home]\ntitle = \"Home\"\n",
	)?;

	let mut cmd = common::tome_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Home"));

	Ok(())
}

#[test]
fn build_without_a_class_fails_with_a_hint() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let mut cmd = common::tome_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("--class"));

	Ok(())
}

#[test]
fn build_fails_on_cross_file_conflicts() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(tmp.path().join("one.page.toml"), "[page]\ntitle = \"A\"\n")?;
	std::fs::write(tmp.path().join("two.page.toml"), "[page]\ntitle = \"B\"\n")?;

	let mut cmd = common::tome_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.arg("--class")
		.arg("page")
		.assert()
		.failure()
		.stderr(
			predicates::str::contains("page").and(predicates::str::contains("title")),
		);

	Ok(())
}

#[test]
fn build_renders_configured_markdown_fields() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("tome.toml"),
		"class = \"page\"\nmarkdownFields = [\"description\"]\n",
	)?;
	std::fs::write(
		tmp.path().join("site.page.md"),
		"+++\n[home]\ntitle = \"Home\"\n+++\nSome *body* text.\n",
	)?;

	let mut cmd = common::tome_cmd();
	let assert = cmd
		.env("NO_COLOR", "1")
		.arg("build")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let output: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(
		output["home"]["description"],
		Value::String("<p>Some <em>body</em> text.</p>".to_string())
	);

	Ok(())
}

#[test]
fn list_shows_files_and_document_ids() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	std::fs::write(
		tmp.path().join("site.page.toml"),
		"[home]\ntitle = \"Home\"\n\n[about]\ntitle = \"About\"\n",
	)?;

	let mut cmd = common::tome_cmd();
	cmd.env("NO_COLOR", "1")
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.arg("--class")
		.arg("page")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("site.page.toml")
				.and(predicates::str::contains("home"))
				.and(predicates::str::contains("about")),
		);

	Ok(())
}
