use std::io::Cursor;

use anka::{
    Session,
    repl::{Command, internal_listing, run},
};

fn session_output(input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&mut Session::new(), Cursor::new(input), &mut out, &mut err, false).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn commands_are_recognised() {
    assert_eq!(Command::parse(".clear"), Command::Clear);
    assert_eq!(Command::parse(".cls"), Command::ClearScreen);
    assert_eq!(Command::parse(".internal"), Command::Internal);
    assert_eq!(Command::parse(".history"), Command::History);
    assert_eq!(Command::parse(".other"), Command::Source(".other".into()));
}

#[test]
fn errors_go_to_the_error_stream_and_the_session_survives() {
    let (out, err) = session_output("10 20\ninc 1\n");
    assert_eq!(out, "2\n");
    assert_eq!(err, "Could not fold words.\nword: 10\nword: 20\n");
}

#[test]
fn bindings_persist_until_cleared() {
    let (out, err) = session_output("inc2: {inc inc}\ninc2 1\n.clear\ninc2 1\n.history\n");
    assert_eq!(out, "user-defined block\n3\ninc2 1\n");
    assert!(err.starts_with("Name not found."));
}

#[test]
fn clearing_the_screen_keeps_bindings() {
    let (out, err) = session_output("val: 4\n.cls\ninc val\n");
    assert_eq!(out, "4\n\x1b[2J\x1b[H5\n");
    assert_eq!(err, "");
}

#[test]
fn blank_lines_print_nothing() {
    let (out, err) = session_output("\n   \n# comment\n");
    assert_eq!(out, "");
    assert_eq!(err, "");
}

#[test]
fn prompt_is_written_before_each_line() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&mut Session::new(), Cursor::new("inc 1\n"), &mut out, &mut err, true).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "anka> 2\nanka> ");
}

#[test]
fn listing_shows_builtins_and_sorted_bindings() {
    let mut session = Session::new();
    session.run("zeta: 1").unwrap();
    session.run("alpha: 2").unwrap();

    let listing = internal_listing(&session);
    assert!(listing.starts_with("builtins:\n  ioata int -> (int)\n"));
    assert!(listing.contains("  foldl [fn[int int] -> int (int)] -> int\n"));
    assert!(listing.ends_with("bindings:\n  alpha: 2\n  e: 2.718282\n  pi: 3.141593\n  zeta: 1\n"));
}
