use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("csvcompare").unwrap()
}

fn temp_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn reports_mismatches_as_csv() {
    let file1 = temp_file(&["a,b,c", "b,c,d", "e,f,g"]);
    let file2 = temp_file(&["a,n,x", "b,m,d", "e,m,f"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3"])
        .assert()
        .code(1)
        .stdout("key,file1_value,file2_value\r\na,c,x\r\ne,g,f\r\n");
}

#[test]
fn identical_files_exit_zero() {
    let file1 = temp_file(&["a,b,c", "e,f,g"]);
    let file2 = temp_file(&["a,n,c", "e,m,g"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3"])
        .assert()
        .success()
        .stdout("key,file1_value,file2_value\r\n");
}

#[test]
fn unmatched_flag_reports_sentinels() {
    let file1 = temp_file(&["a,b,c", "v,w,x"]);
    let file2 = temp_file(&["a,n,c", "w,y,z"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3", "--unmatched"])
        .assert()
        .code(1)
        .stdout(contains("w,notFoundInFile1,z"))
        .stdout(contains("v,x,notFoundInFile2"));
}

#[test]
fn custom_delimiter() {
    let file1 = temp_file(&["a^b^c", "e^f^g"]);
    let file2 = temp_file(&["a^n^x", "e^f^g"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3", "--delimiter", "^"])
        .assert()
        .code(1)
        .stdout(contains("a,c,x"));
}

#[test]
fn json_format() {
    let file1 = temp_file(&["a,b,c"]);
    let file2 = temp_file(&["a,n,x"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3", "--format", "json"])
        .assert()
        .code(1)
        .stdout(contains("\"file1_value\": \"c\""));
}

#[test]
fn bad_column_exits_with_error() {
    let file1 = temp_file(&["a,b,c"]);
    let file2 = temp_file(&["a,n,x"]);
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "4", "--comparable-column", "3"])
        .assert()
        .code(2)
        .stderr(contains("column 4 is out of range"));
}

#[test]
fn writes_output_file() {
    let file1 = temp_file(&["a,b,c"]);
    let file2 = temp_file(&["a,n,x"]);
    let out = NamedTempFile::new().unwrap();
    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .args(["--key-column", "1", "--comparable-column", "3"])
        .arg("--output")
        .arg(out.path())
        .assert()
        .code(1);
    let written = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(written, "key,file1_value,file2_value\r\na,c,x\r\n");
}
