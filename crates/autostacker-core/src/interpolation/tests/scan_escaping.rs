//! Escape sequences and introducers that start nothing

use super::helpers::{join, lit, reference, text};
use super::*;

#[test]
fn test_escapes_introducer() {
    assert_eq!(
        interpolate("hullebulle@@bla.com").unwrap(),
        text("hullebulle@bla.com")
    );
}

#[test]
fn test_escapes_introducer_everywhere() {
    assert_eq!(
        interpolate("@@hullebulle@@bla.com@@").unwrap(),
        text("@hullebulle@bla.com@")
    );
}

#[test]
fn test_introducer_escapes_only_introducer() {
    assert_eq!(interpolate("@.@[@:@@.[:").unwrap(), text("@.@[@:@.[:"));
}

#[test]
fn test_escaped_introducer_before_name() {
    assert_eq!(interpolate("@@Param").unwrap(), text("@Param"));
}

#[test]
fn test_odd_run_of_introducers() {
    // @@ @@ then a real expression
    assert_eq!(
        interpolate("@@@@@Param").unwrap(),
        join(vec![lit("@@"), reference("Param").into()])
    );
}

#[test]
fn test_trailing_introducer() {
    assert_eq!(interpolate("mail me @").unwrap(), text("mail me @"));
    assert_eq!(interpolate("@").unwrap(), text("@"));
}

#[test]
fn test_introducer_before_non_name() {
    assert_eq!(interpolate("@ 1 @9 @-").unwrap(), text("@ 1 @9 @-"));
}

#[test]
fn test_escaped_text_merges_with_neighbours() {
    let result = interpolate("a@@b @X c@@d").unwrap();
    assert_eq!(
        result,
        join(vec![lit("a@b "), reference("X").into(), lit(" c@d")])
    );
}
