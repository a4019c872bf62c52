use super::*;

#[test]
fn wraps_at_word_boundary() {
    let mut ind = Indenter::new(20, "");

    ind.left_align("aaa bbb ccc ddd eee", "    ", "- ");

    assert_eq!(ind.lines(), ["- aaa bbb ccc ddd", "    eee"]);
}

#[test]
fn long_word_gets_own_line() {
    let mut ind = Indenter::new(10, "");

    ind.left_align("a verylongwordhere b", "", "");

    assert_eq!(ind.lines(), ["a", "verylongwordhere", "b"]);
}

#[test]
fn collapses_whitespace() {
    let mut ind = Indenter::new(80, "");

    ind.left_align("  foo \n  bar  ", "", "> ");

    assert_eq!(ind.str(), "> foo bar");
}

#[test]
fn empty_line_has_no_trailing_space() {
    let mut ind = Indenter::new(80, " * ");

    ind.raw("/*").empty_line().raw(" */");

    assert_eq!(ind.str(), "/*\n *\n */");
}

#[test]
fn empty_text_keeps_prefix() {
    let mut ind = Indenter::new(80, "");

    ind.left_align("", "", "// ");

    assert_eq!(ind.lines(), ["// "]);
}
