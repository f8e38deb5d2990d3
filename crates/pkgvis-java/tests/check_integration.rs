//! End-to-end checks over a representative Java fixture.
//!
//! The fixture exercises every checked declaration kind in one nested
//! class: marked, unmarked, and wrongly marked variants, plus the cases
//! that must never produce findings (interface members, locals).

use std::path::PathBuf;

use pkgvis_core::Violation;
use pkgvis_java::{CheckConfig, CheckEngine};

const FIXTURE: &str = r"package com.acme.widget;

class WidgetRegistry
{
    class PlainInner
    {
    }

    /* package */ class MarkedInner
    {
    }

    /* package */ protected class WronglyMarkedInner
    {
    }

    interface PlainContract
    {
        void apply();
    }

    /* package */ interface MarkedContract
    {
    }

    /* package */ public interface WronglyMarkedContract
    {
    }

    enum PlainState
    {
    }

    /* package */ enum MarkedState
    {
    }

    /* package */ protected enum WronglyMarkedState
    {
    }

    int plainCount;

    /* package */ int markedCount;

    protected/* package */int wronglyMarkedCount;

    WidgetRegistry()
    {
    }

    /* package */ WidgetRegistry(int size)
    {
    }

    /* package */ protected WidgetRegistry(int size, int depth)
    {
    }

    void plainReset()
    {
    }

    /* package */ void markedReset()
    {
    }

    /* package */void tightMarkedReset()
    {
    }

    // package
    void otherFormatReset()
    {
    }

    /* package */ public void wronglyMarkedReset()
    {
    }

    // package
    public void wronglyOtherFormatReset()
    {
    }

    public void withLocals() {
        int localCount;
        class LocalHelper {}
    }
}
";

fn run(config: &CheckConfig, source: &str) -> Vec<Violation> {
    CheckEngine::new(config)
        .expect("engine")
        .check_source(&PathBuf::from("WidgetRegistry.java"), source)
        .expect("check failed")
}

fn summarize(violations: &[Violation]) -> Vec<(usize, String)> {
    violations
        .iter()
        .map(|v| (v.location.line, v.code.clone()))
        .collect()
}

#[test]
fn default_configuration_full_fixture() {
    let violations = run(&CheckConfig::default(), FIXTURE);
    assert_eq!(
        summarize(&violations),
        vec![
            (3, "PKG001".to_owned()),  // WidgetRegistry
            (5, "PKG001".to_owned()),  // PlainInner
            (13, "PKG003".to_owned()), // WronglyMarkedInner
            (17, "PKG001".to_owned()), // PlainContract
            (26, "PKG003".to_owned()), // WronglyMarkedContract
            (30, "PKG001".to_owned()), // PlainState
            (38, "PKG003".to_owned()), // WronglyMarkedState
            (42, "PKG001".to_owned()), // plainCount
            (46, "PKG003".to_owned()), // wronglyMarkedCount
            (48, "PKG001".to_owned()), // WidgetRegistry()
            (56, "PKG003".to_owned()), // WidgetRegistry(int, int)
            (60, "PKG001".to_owned()), // plainReset
            (68, "PKG002".to_owned()), // tightMarkedReset
            (73, "PKG001".to_owned()), // otherFormatReset
            (77, "PKG003".to_owned()), // wronglyMarkedReset
        ]
    );
}

#[test]
fn default_configuration_messages() {
    let violations = run(&CheckConfig::default(), FIXTURE);
    let by_line = |line: usize| -> &Violation {
        violations
            .iter()
            .find(|v| v.location.line == line)
            .expect("violation at line")
    };
    assert_eq!(
        by_line(5).message,
        "'PlainInner' should be commented for package visibility."
    );
    assert_eq!(
        by_line(68).message,
        "Comment of 'tightMarkedReset' for package visibility should add trailing whitespace."
    );
    assert_eq!(
        by_line(13).message,
        "Is visibility of 'WronglyMarkedInner' package?"
    );
}

#[test]
fn trailing_whitespace_not_required() {
    let config = CheckConfig {
        require_trailing_whitespace: false,
        ..CheckConfig::default()
    };
    let violations = run(&config, FIXTURE);
    // Only the tight marker finding disappears.
    assert!(violations.iter().all(|v| v.code != "PKG002"));
    assert!(!violations.iter().any(|v| v.location.line == 68));
    assert_eq!(violations.len(), 14);
}

#[test]
fn line_comment_pattern() {
    let config = CheckConfig {
        pattern: "// package\n".to_owned(),
        ..CheckConfig::default()
    };
    let violations = run(&config, FIXTURE);

    // Every block-comment marker stops matching; the line-comment marker
    // before otherFormatReset now counts (its trailing whitespace is the
    // next line's indentation).
    assert!(!violations.iter().any(|v| v.location.line == 73));
    // ...and the line-comment marker on the public method is questioned.
    let wrong = violations
        .iter()
        .find(|v| v.location.line == 82)
        .expect("finding at line 82");
    assert_eq!(wrong.code, "PKG003");
    assert!(wrong.message.contains("'wronglyOtherFormatReset'"));

    let (pkg001, rest): (Vec<_>, Vec<_>) = violations.iter().partition(|v| v.code == "PKG001");
    assert_eq!(pkg001.len(), 14);
    assert_eq!(rest.len(), 1);
}

#[test]
fn default_package_source() {
    let source = r"class TopLevel
{
    class Inner
    {
    }
}
";
    let violations = run(&CheckConfig::default(), source);
    assert_eq!(
        summarize(&violations),
        vec![(1, "PKG001".to_owned()), (3, "PKG001".to_owned())]
    );
}

#[test]
fn marker_between_sibling_classes() {
    // The window for B spans from the end of A to the start of B's name,
    // so the marker between them is found.
    let source = "class C { class A {} /* package */ class B {} }";
    let violations = run(&CheckConfig::default(), source);
    let names: Vec<&str> = violations
        .iter()
        .map(|v| v.message.split('\'').nth(1).unwrap_or(""))
        .collect();
    assert_eq!(names, vec!["C", "A"]);
}

#[test]
fn repeated_runs_are_identical() {
    let first = run(&CheckConfig::default(), FIXTURE);
    let second = run(&CheckConfig::default(), FIXTURE);
    assert_eq!(summarize(&first), summarize(&second));
}
