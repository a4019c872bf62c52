use super::*;

fn resolve(line: &str) -> Result<(MdbCommandKind, &str), CommandError> {
    let map = command_map();
    map.resolve(line).map(|(cmd, rest)| (cmd.kind(), rest))
}

#[test]
fn abbreviations() {
    assert_eq!(resolve("e fib<3>"), Ok((MdbCommandKind::Evaluate, "fib<3>")));
    assert_eq!(resolve("s over 2"), Ok((MdbCommandKind::Step, "over 2")));
    assert_eq!(resolve("c"), Ok((MdbCommandKind::Continue, "")));
    assert_eq!(resolve("ft 2"), Ok((MdbCommandKind::Forwardtrace, "2")));
    assert_eq!(resolve("bt"), Ok((MdbCommandKind::Backtrace, "")));
    assert_eq!(resolve("fr 1"), Ok((MdbCommandKind::Frame, "1")));
    assert_eq!(resolve("r fib"), Ok((MdbCommandKind::Rbreak, "fib")));
    assert_eq!(resolve("h"), Ok((MdbCommandKind::Help, "")));
    assert_eq!(resolve("q"), Ok((MdbCommandKind::Quit, "")));
}

#[test]
fn f_is_ambiguous() {
    assert_eq!(
        resolve("f"),
        Err(CommandError::AmbiguousCommand("f".to_owned()))
    );
}

#[test]
fn every_key_is_unique() {
    let map = command_map();
    let registered: usize = COMMANDS.iter().map(|c| c.keys().len()).sum();

    assert_eq!(map.keys().count(), registered);
}

#[test]
fn synopsis() {
    let map = command_map();
    let lines: Vec<_> = map.commands().iter().map(MdbCommand::synopsis).collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    evaluate [-full] [<type>]
    step [over|out] [n]
    continue [n]
    forwardtrace|ft [-full] [n]
    backtrace|bt
    frame n
    rbreak <regex>
    help [<command>]
    quit
    ");
}

#[test]
fn only_stepping_repeats() {
    let repeatable: Vec<_> = COMMANDS
        .iter()
        .filter(|c| c.is_repeatable())
        .map(|c| c.kind())
        .collect();

    assert_eq!(repeatable, [MdbCommandKind::Step, MdbCommandKind::Continue]);
}
