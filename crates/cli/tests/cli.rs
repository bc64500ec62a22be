use std::io::Write;

use assert_cmd::Command;

fn sqlfmt() -> Command {
    Command::cargo_bin("sqlfmt").unwrap()
}

#[test]
fn formats_a_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "select * from foo where goo = 'taco'").unwrap();

    sqlfmt()
        .arg("--no-color")
        .arg(file.path())
        .assert()
        .success()
        .stdout("SELECT\n  *\nFROM\n  foo\nWHERE\n  goo = 'taco'\n");
}

#[test]
fn formats_stdin_when_no_path_given() {
    sqlfmt()
        .arg("--no-color")
        .write_stdin("select 1")
        .assert()
        .success()
        .stdout("SELECT\n  1\n");
}

#[test]
fn unknown_dialect_falls_back_with_a_warning_but_still_succeeds() {
    sqlfmt()
        .arg("--no-color")
        .arg("--dialect")
        .arg("not-a-real-dialect")
        .write_stdin("select 1")
        .assert()
        .success()
        .stdout("SELECT\n  1\n");
}

#[test]
fn missing_file_is_a_clean_failure() {
    sqlfmt()
        .arg("/no/such/file.sql")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn mysql_dialect_preserves_versioned_comment() {
    let output = sqlfmt()
        .arg("--no-color")
        .arg("--dialect")
        .arg("mysql")
        .write_stdin("SELECT /*! STRAIGHT_JOIN */ a.x FROM a")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("/*! STRAIGHT_JOIN */"));
}
