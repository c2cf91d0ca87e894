use std::{io::Write, process::ExitCode};

use super::{load_source_file, run, to_json, Argument, Parser, DEMO_SOURCE};

#[test]
fn arguments() {
    let argument = Argument::parse_from(["notal", "-e", "42", "--compact"]);

    assert_eq!(argument.source.as_deref(), Some("42"));
    assert_eq!(argument.file, None);
    assert!(argument.compact);
    assert!(!argument.tokens);

    assert!(Argument::try_parse_from(["notal", "program.notal", "--source", "42"]).is_err());
}

#[test]
fn source_selection() {
    let inline = load_source_file(&Argument::parse_from(["notal", "--source", "\"hi\""])).unwrap();
    assert_eq!(inline.content(), "\"hi\"");

    let demo = load_source_file(&Argument::parse_from(["notal"])).unwrap();
    assert_eq!(demo.content(), DEMO_SOURCE);
    assert_eq!(demo.line_number(), 4);

    let mut file = tempfile::Builder::new().suffix(".notal").tempfile().unwrap();
    write!(file.as_file_mut(), "7").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let loaded = load_source_file(&Argument::parse_from(["notal", path.as_str()])).unwrap();
    assert_eq!(loaded.content(), "7");
}

#[test]
fn missing_file_fails() {
    let argument = Argument::parse_from(["notal", "/nonexistent/notal/program.notal"]);

    assert_eq!(load_source_file(&argument).unwrap_err(), ExitCode::FAILURE);
    assert_eq!(run(argument), ExitCode::FAILURE);
}

#[test]
fn demo_program_json() {
    let program = notal_syntax::parser::Parser::new()
        .parse(DEMO_SOURCE)
        .unwrap();

    let compact = to_json(&program, true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(compact.starts_with(r#"{"type":"Program","body":{"type":"StringLiteral""#));
    assert!(compact.ends_with(r#""span":{"start":{"line":1,"column":0},"end":{"line":4,"column":7}}}"#));

    let pretty = to_json(&program, false).unwrap();
    assert!(pretty.lines().count() > 1);
}

#[test]
fn run_exit_codes() {
    assert_eq!(run(Argument::parse_from(["notal", "-e", "42"])), ExitCode::SUCCESS);
    assert_eq!(
        run(Argument::parse_from(["notal", "-e", "42", "--tokens"])),
        ExitCode::SUCCESS
    );
    assert_eq!(run(Argument::parse_from(["notal", "-e", ""])), ExitCode::FAILURE);
    assert_eq!(
        run(Argument::parse_from(["notal", "-e", "abc", "--tokens"])),
        ExitCode::FAILURE
    );
}
