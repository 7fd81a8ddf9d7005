use assert_cmd::Command;

pub fn tome_cmd() -> Command {
	Command::cargo_bin("tome").expect("binary `tome` should be built")
}
