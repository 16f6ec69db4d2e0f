use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn reckon(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                                             .env_remove("RUST_LOG")
                                                             .stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .stderr(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to start reckon");

    let mut pipe = child.stdin.take().expect("stdin is piped");
    if let Some(input) = stdin {
        pipe.write_all(input.as_bytes()).expect("failed to write stdin");
    }
    drop(pipe);

    child.wait_with_output().expect("failed to wait for reckon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn evaluates_argument() {
    let output = reckon(&["2 + 3 * 4"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "14\n");
}

#[test]
fn leading_minus_is_an_expression_not_a_flag() {
    let output = reckon(&["-5 + 1"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-4\n");
}

#[test]
fn reads_one_line_from_stdin() {
    let output = reckon(&[], Some("sqrt(16)\n7\n"));
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4\n");
}

#[test]
fn empty_stdin_exits_quietly() {
    let output = reckon(&[], Some(""));
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn errors_exit_with_failure() {
    let output = reckon(&["1 / 0"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim_end(), "Division by zero");

    let output = reckon(&["(2 + 3"], None);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim_end(), "Expected ')'");
}

#[test]
fn prints_tree_before_result() {
    let output = reckon(&["--ast", "1 + 2 * 3"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(1 + (2 * 3))\n7\n");
}

#[test]
fn lists_functions() {
    let output = reckon(&["--functions"], None);
    assert!(output.status.success());
    let names: Vec<_> = stdout(&output).lines().map(str::to_owned).collect();
    assert_eq!(names.len(), reckon::BUILTIN_FUNCTIONS.len());
    assert!(names.iter().any(|name| name == "factorial"));
}

#[test]
fn verbose_logs_to_piped_stderr_without_colour() {
    let output = reckon(&["-v", "1 + 1"], None);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n");

    let log = stderr(&output);
    assert!(log.contains("tokenized expression"), "{log}");
    assert!(!log.contains('\u{1b}'), "{log:?}");
}
