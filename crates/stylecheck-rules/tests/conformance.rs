//! End-to-end scenarios over the built-in catalog.

use std::fs;
use std::path::Path;

use stylecheck_core::{
    AppliesTo, CancelToken, Category, Config, Node, Outcome, Rule, RuleContext, Runner,
    Severity, SeverityLevel, Violation,
};
use stylecheck_rules::builtin_registry;
use tempfile::TempDir;

fn write_tree(dir: &Path, name: &str, json: &str) {
    fs::write(dir.join(name), json).expect("write tree file");
}

fn run(dir: &TempDir, config: Config) -> stylecheck_core::RunReport {
    let runner = Runner::builder()
        .root(dir.path())
        .registry(builtin_registry())
        .config(config)
        .build()
        .expect("build runner");
    runner.run(&CancelToken::new()).expect("run")
}

const MISORDERED_IMPORTS: &str = r#"{
    "kind": "Unit",
    "children": [
        {"kind": "Import", "text": "./b", "span": {"start": 0, "end": 18}},
        {"kind": "Import", "text": "./a", "span": {"start": 19, "end": 37}},
        {"kind": "Import", "text": "react", "span": {"start": 38, "end": 62}},
        {"kind": "Import", "text": "lodash", "span": {"start": 63, "end": 88}}
    ]
}"#;

#[test]
fn misordered_imports_report_exactly_one_violation_at_first_element() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(dir.path(), "imports.tree.json", MISORDERED_IMPORTS);

    let report = run(&dir, Config::default());
    let violations: Vec<&Violation> = report.violations().collect();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "import-order");
    // Anchored at './b', the first element of the first bad pair.
    assert_eq!(violations[0].span.start, 0);
    assert_eq!(report.outcome(), Outcome::Warning);
}

#[test]
fn lowercase_class_name_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(
        dir.path(),
        "class.tree.json",
        r#"{
            "kind": "Unit",
            "children": [
                {"kind": "ClassDecl", "text": "myComponent", "span": {"start": 7, "end": 18}}
            ]
        }"#,
    );

    let report = run(&dir, Config::default());
    let violations: Vec<&Violation> = report.violations().collect();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, "naming-convention");
    assert_eq!(violations[0].severity, Severity::Error);
    assert!(violations[0].message.contains("PascalCase"));
    assert_eq!(report.outcome(), Outcome::Failure);
}

#[test]
fn disabled_rule_reports_nothing_anywhere() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(dir.path(), "imports.tree.json", MISORDERED_IMPORTS);
    write_tree(
        dir.path(),
        "more_imports.tree.json",
        r#"{
            "kind": "Unit",
            "children": [
                {"kind": "Import", "text": "./z", "span": {"start": 0, "end": 18}},
                {"kind": "Import", "text": "react", "span": {"start": 19, "end": 43}}
            ]
        }"#,
    );

    let config = Config::parse("[rules]\nimport-order = \"off\"").expect("parse");
    let report = run(&dir, config);

    assert_eq!(report.violations().count(), 0);
    assert_eq!(report.outcome(), Outcome::Success);
}

#[test]
fn severity_override_escalates_outcome() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(dir.path(), "imports.tree.json", MISORDERED_IMPORTS);

    let config = Config::parse("[rules]\nimport-order = \"error\"").expect("parse");
    let report = run(&dir, config);

    assert_eq!(report.outcome(), Outcome::Failure);
    let violation = report.violations().next().expect("violation");
    assert_eq!(violation.severity, Severity::Error);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(dir.path(), "imports.tree.json", MISORDERED_IMPORTS);
    write_tree(
        dir.path(),
        "class.tree.json",
        r#"{
            "kind": "Unit",
            "children": [
                {"kind": "ClassDecl", "text": "myComponent", "span": {"start": 7, "end": 18}},
                {"kind": "ExportDefault", "span": {"start": 20, "end": 34}}
            ]
        }"#,
    );

    let flatten = |report: &stylecheck_core::RunReport| {
        report
            .violations()
            .map(|v| (v.rule.clone(), v.span.start, v.unit.clone()))
            .collect::<Vec<_>>()
    };

    let first = run(&dir, Config::default());
    let second = run(&dir, Config::default());
    assert_eq!(flatten(&first), flatten(&second));
    assert_eq!(first.violations().count(), 3);
}

#[test]
fn mutually_exclusive_pair_yields_one_violation_per_node() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(
        dir.path(),
        "styled.tree.json",
        r#"{
            "kind": "Unit",
            "children": [
                {"kind": "JsxElement", "text": "div", "children": [
                    {"kind": "JsxAttribute", "text": "style", "span": {"start": 5, "end": 40}, "children": [
                        {"kind": "JsxExpression", "children": [
                            {"kind": "ObjectExpr", "children": [
                                {"kind": "ObjectProperty", "text": "color", "children": [
                                    {"kind": "StringLiteral", "text": "red"}
                                ]}
                            ]}
                        ]}
                    ]}
                ]}
            ]
        }"#,
    );

    // Both rules enabled; the static style object matches both, but the
    // conflict declaration suppresses the second at the same node.
    let config =
        Config::parse("[rules]\nprefer-inline-style-dynamic = \"warn\"").expect("parse");
    let report = run(&dir, config);

    let style_violations: Vec<&Violation> = report
        .violations()
        .filter(|v| v.rule == "no-inline-style" || v.rule == "prefer-inline-style-dynamic")
        .collect();
    assert_eq!(style_violations.len(), 1);
    assert_eq!(style_violations[0].rule, "no-inline-style");
}

/// Panics on every unit root; registered alongside the catalog to prove
/// one faulting rule cannot take the run down.
struct FaultyRule;

impl Rule for FaultyRule {
    fn id(&self) -> &'static str {
        "faulty"
    }
    fn code(&self) -> &'static str {
        "TST99"
    }
    fn category(&self) -> Category {
        Category::Style
    }
    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Unit
    }
    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }
    fn check(&self, _node: &Node, _ctx: &RuleContext<'_>) -> Vec<Violation> {
        panic!("rule evaluation blew up");
    }
}

#[test]
fn faulting_rule_becomes_synthetic_violation_and_others_still_run() {
    let dir = TempDir::new().expect("tempdir");
    write_tree(dir.path(), "imports.tree.json", MISORDERED_IMPORTS);

    let mut registry = builtin_registry();
    registry.register(Box::new(FaultyRule)).expect("register");

    let runner = Runner::builder()
        .root(dir.path())
        .registry(registry)
        .build()
        .expect("build runner");
    let report = runner.run(&CancelToken::new()).expect("run");

    let rules: Vec<&str> = report.violations().map(|v| v.rule.as_str()).collect();
    assert!(rules.contains(&"import-order"));

    let fault = report
        .violations()
        .find(|v| v.rule == "faulty")
        .expect("synthetic violation for faulting rule");
    assert_eq!(fault.severity, Severity::Error);
    assert!(fault.message.contains("internal rule error"));
    assert!(fault.message.contains("rule evaluation blew up"));
}
