//! Rule trait and descriptor metadata.
//!
//! A rule is a pure predicate over one node (or the whole unit). It is
//! registered for a set of node kinds, receives the node, its ancestor
//! chain and its resolved options, and yields zero or more violations.
//! Rules hold no mutable state and perform no I/O, which is what makes
//! parallel execution across units safe and unit testing trivial.

use crate::node::{Node, NodeKind};
use crate::types::{Severity, SeverityLevel, Span, Violation};
use std::collections::HashMap;
use std::path::Path;

/// Rule category, matching the convention families of the style guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Identifier casing conventions.
    Naming,
    /// Import ordering and grouping.
    Imports,
    /// Component/file structure limits.
    Structure,
    /// Stylistic syntax preferences.
    Style,
    /// Known anti-patterns.
    AntiPattern,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naming => write!(f, "naming"),
            Self::Imports => write!(f, "imports"),
            Self::Structure => write!(f, "structure"),
            Self::Style => write!(f, "style"),
            Self::AntiPattern => write!(f, "anti-pattern"),
        }
    }
}

/// What a rule is registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesTo {
    /// Dispatched at every node whose kind is in the set.
    Kinds(&'static [NodeKind]),
    /// Run once per source unit, against the root, before traversal.
    Unit,
}

/// Type of a declared rule option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean flag.
    Bool,
    /// Integer value.
    Int,
    /// String value.
    Str,
    /// List of strings.
    StrList,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "boolean"),
            Self::Int => write!(f, "integer"),
            Self::Str => write!(f, "string"),
            Self::StrList => write!(f, "string list"),
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// String value.
    Str(String),
    /// List of strings.
    StrList(Vec<String>),
}

impl OptionValue {
    /// The kind this value belongs to.
    #[must_use]
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
            Self::Str(_) => OptionKind::Str,
            Self::StrList(_) => OptionKind::StrList,
        }
    }
}

/// Declaration of a single named, typed, defaulted rule option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Option name as it appears in configuration.
    pub name: &'static str,
    /// Expected value type.
    pub kind: OptionKind,
    /// Default used when configuration does not provide the option.
    pub default: OptionValue,
    /// One-line description for `list-rules`.
    pub help: &'static str,
}

impl OptionSpec {
    /// Creates an option spec.
    #[must_use]
    pub fn new(name: &'static str, default: OptionValue, help: &'static str) -> Self {
        Self {
            name,
            kind: default.kind(),
            default,
            help,
        }
    }
}

/// Resolved options for one rule in one run.
///
/// The resolver guarantees every declared option is present (defaults
/// filled in), so the typed accessors only need a fallback for the
/// impossible case.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions(HashMap<String, OptionValue>);

impl RuleOptions {
    /// Creates options from resolved values.
    #[must_use]
    pub fn new(values: HashMap<String, OptionValue>) -> Self {
        Self(values)
    }

    /// Options with every declared default filled in, exactly as the
    /// resolver produces for an unconfigured rule.
    #[must_use]
    pub fn defaults(rule: &dyn Rule) -> Self {
        let values = rule
            .options()
            .into_iter()
            .map(|spec| (spec.name.to_string(), spec.default))
            .collect();
        Self(values)
    }

    /// Gets a boolean option.
    #[must_use]
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.0.get(name) {
            Some(OptionValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Gets an integer option.
    #[must_use]
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.0.get(name) {
            Some(OptionValue::Int(i)) => *i,
            _ => default,
        }
    }

    /// Gets a string option.
    #[must_use]
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.0.get(name) {
            Some(OptionValue::Str(s)) => s,
            _ => default,
        }
    }

    /// Gets a string-list option; empty when absent.
    #[must_use]
    pub fn get_str_list(&self, name: &str) -> &[String] {
        match self.0.get(name) {
            Some(OptionValue::StrList(v)) => v,
            _ => &[],
        }
    }
}

/// Context handed to a rule at each invocation.
///
/// The ancestor chain is root-first and excludes the visited node; it is
/// the engine's stack, valid only for the duration of the call.
pub struct RuleContext<'a> {
    /// Path of the unit being checked.
    pub unit: &'a Path,
    /// Ancestors of the visited node, root first.
    pub ancestors: &'a [&'a Node],
    /// Options resolved for this rule.
    pub options: &'a RuleOptions,
    /// Effective severity for this rule in this run.
    pub severity: Severity,
}

impl RuleContext<'_> {
    /// Builds a violation attributed to `rule` at `span`.
    #[must_use]
    pub fn violation(&self, rule: &dyn Rule, span: Span, message: impl Into<String>) -> Violation {
        Violation::new(
            rule.code(),
            rule.id(),
            self.severity,
            span,
            self.unit,
            message,
        )
    }

    /// Whether any ancestor satisfies the predicate.
    #[must_use]
    pub fn has_ancestor(&self, pred: impl Fn(&Node) -> bool) -> bool {
        self.ancestors.iter().any(|n| pred(n))
    }
}

/// A style-conformance rule.
///
/// # Example
///
/// ```ignore
/// use stylecheck_core::{AppliesTo, Category, NodeKind, Rule, RuleContext, SeverityLevel};
///
/// pub struct NoDebugger;
///
/// impl Rule for NoDebugger {
///     fn id(&self) -> &'static str { "no-debugger" }
///     fn code(&self) -> &'static str { "SC099" }
///     fn category(&self) -> Category { Category::AntiPattern }
///     fn applies_to(&self) -> AppliesTo { AppliesTo::Kinds(&[NodeKind::Statement]) }
///     fn default_severity(&self) -> SeverityLevel { SeverityLevel::Error }
///
///     fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
///         if node.lexeme() == "debugger" {
///             vec![ctx.violation(self, node.span, "debugger statement left in code")]
///         } else {
///             Vec::new()
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Globally unique kebab-case id (e.g., "import-order").
    fn id(&self) -> &'static str;

    /// Rule code (e.g., "SC002").
    fn code(&self) -> &'static str;

    /// Convention family this rule belongs to.
    fn category(&self) -> Category;

    /// One-line description for `list-rules`.
    fn description(&self) -> &'static str {
        ""
    }

    /// Node kinds this rule is dispatched at, or `Unit`.
    fn applies_to(&self) -> AppliesTo;

    /// Default severity when configuration says nothing.
    fn default_severity(&self) -> SeverityLevel;

    /// Declared options with their types and defaults.
    fn options(&self) -> Vec<OptionSpec> {
        Vec::new()
    }

    /// Rule ids this rule is mutually exclusive with.
    ///
    /// When a conflicting rule has already fired on the same node, this
    /// rule is skipped there. Empty for almost all rules.
    fn conflicts_with(&self) -> &'static [&'static str] {
        &[]
    }

    /// Checks one node (the unit root for unit-scoped rules).
    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation>;
}

/// Boxed rule trait object.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn category(&self) -> Category {
            Category::Style
        }
        fn applies_to(&self) -> AppliesTo {
            AppliesTo::Kinds(&[NodeKind::Identifier])
        }
        fn default_severity(&self) -> SeverityLevel {
            SeverityLevel::Warn
        }

        fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
            vec![ctx.violation(self, node.span, "test violation")]
        }
    }

    #[test]
    fn context_violation_fills_attribution() {
        let options = RuleOptions::default();
        let ctx = RuleContext {
            unit: Path::new("src/a.tsx"),
            ancestors: &[],
            options: &options,
            severity: Severity::Warning,
        };
        let node = Node::new(NodeKind::Identifier).with_span(Span::new(4, 9));

        let violations = TestRule.check(&node, &ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "TEST001");
        assert_eq!(violations[0].rule, "test-rule");
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].span.start, 4);
        assert_eq!(violations[0].unit, Path::new("src/a.tsx"));
    }

    #[test]
    fn options_typed_accessors() {
        let mut values = HashMap::new();
        values.insert("max".to_string(), OptionValue::Int(40));
        values.insert(
            "allow".to_string(),
            OptionValue::StrList(vec!["x".to_string()]),
        );
        let options = RuleOptions::new(values);

        assert_eq!(options.get_int("max", 50), 40);
        assert_eq!(options.get_int("missing", 50), 50);
        assert_eq!(options.get_str_list("allow"), ["x".to_string()]);
        assert!(options.get_str_list("missing").is_empty());
        assert!(options.get_bool("missing", true));
    }

    #[test]
    fn option_spec_derives_kind_from_default() {
        let spec = OptionSpec::new("max_statements", OptionValue::Int(50), "statement cap");
        assert_eq!(spec.kind, OptionKind::Int);
    }
}
