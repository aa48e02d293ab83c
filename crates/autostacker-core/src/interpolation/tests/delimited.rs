//! `@{ ... }` expressions

use super::helpers::{attribute, expr, join, lit, lookup, reference, text};
use super::*;

#[test]
fn test_stops_expression_at_curly_brace() {
    assert_eq!(
        interpolate("@{Param}.domain.tld").unwrap(),
        join(vec![reference("Param").into(), lit(".domain.tld")])
    );
}

#[test]
fn test_stops_expression_at_curly_brace_embedded() {
    assert_eq!(
        interpolate("bla @{Param}.bla bla").unwrap(),
        join(vec![
            lit("bla "),
            reference("Param").into(),
            lit(".bla bla")
        ])
    );
}

#[test]
fn test_dot_in_curly_is_attribute() {
    assert_eq!(
        interpolate("@{Param.attr1.attr2}.domain.tld").unwrap(),
        join(vec![
            attribute("Param", "attr1.attr2").into(),
            lit(".domain.tld")
        ])
    );
}

#[test]
fn test_dot_in_curly_is_attribute_embedded() {
    assert_eq!(
        interpolate("bla @{Param.attr}bla bla").unwrap(),
        join(vec![
            lit("bla "),
            attribute("Param", "attr").into(),
            lit("bla bla")
        ])
    );
}

#[test]
fn test_curly_removes_ambiguity() {
    assert_eq!(
        interpolate("@{subdomain}.example.com.").unwrap(),
        join(vec![reference("subdomain").into(), lit(".example.com.")])
    );
}

#[test]
fn test_find_in_map_in_curly() {
    assert_eq!(
        interpolate("@{MyMap[Top, Second]}").unwrap(),
        expr(lookup("MyMap", vec![lit("Top"), lit("Second")]))
    );
}

#[test]
fn test_whitespace_inside_curly_is_trimmed() {
    assert_eq!(interpolate("@{ Param }").unwrap(), expr(reference("Param")));
}

#[test]
fn test_nested_curly_in_key() {
    assert_eq!(
        interpolate("@{Map[@{Top}, x]}-y").unwrap(),
        join(vec![
            lookup("Map", vec![reference("Top").into(), lit("x")]).into(),
            lit("-y")
        ])
    );
}

#[test]
fn test_malformed_body_degrades_to_text() {
    assert_eq!(interpolate("@{}").unwrap(), text("@{}"));
    assert_eq!(interpolate("@{ 42 }").unwrap(), text("@{ 42 }"));
    assert_eq!(interpolate("@{Param rest}").unwrap(), text("@{Param rest}"));
}

#[test]
fn test_malformed_body_keeps_scanning() {
    assert_eq!(
        interpolate("@{1} @X").unwrap(),
        join(vec![lit("@{1} "), reference("X").into()])
    );
}
