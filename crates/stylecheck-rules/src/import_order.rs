//! Rule to enforce import grouping and ordering.
//!
//! # Rationale
//!
//! A fixed import order keeps diffs small and makes a file's external
//! surface readable at a glance. Imports are grouped by origin and each
//! group is kept alphabetical.
//!
//! # Ordering
//!
//! Group rank, non-decreasing across the unit:
//! builtin < external < internal < parent < sibling < index < unknown.
//! Within a group, specifiers must be lexicographically non-decreasing
//! (case-insensitive). Only the first out-of-order pair is reported,
//! anchored at the first element of the pair.
//!
//! # Configuration
//!
//! - `builtins`: specifiers treated as platform builtins
//! - `internal_prefixes`: prefixes marking project-internal aliases
//!   (default: `["@/", "~/"]`)

use stylecheck_core::{
    AppliesTo, Category, Node, NodeKind, OptionSpec, OptionValue, Rule, RuleContext,
    SeverityLevel, Violation,
};

/// Rule code for import-order.
pub const CODE: &str = "SC002";

/// Rule name for import-order.
pub const NAME: &str = "import-order";

const DEFAULT_BUILTINS: &[&str] = &[
    "assert", "buffer", "child_process", "crypto", "events", "fs", "http", "https", "net", "os",
    "path", "process", "stream", "url", "util", "zlib",
];

/// Enforces the builtin/external/internal/relative import ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOrder;

impl Rule for ImportOrder {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn category(&self) -> Category {
        Category::Imports
    }

    fn description(&self) -> &'static str {
        "Requires imports grouped by origin and alphabetical within each group"
    }

    fn applies_to(&self) -> AppliesTo {
        AppliesTo::Unit
    }

    fn default_severity(&self) -> SeverityLevel {
        SeverityLevel::Warn
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::new(
                "builtins",
                OptionValue::StrList(DEFAULT_BUILTINS.iter().map(ToString::to_string).collect()),
                "specifiers treated as platform builtins",
            ),
            OptionSpec::new(
                "internal_prefixes",
                OptionValue::StrList(vec!["@/".to_string(), "~/".to_string()]),
                "prefixes marking project-internal aliases",
            ),
        ]
    }

    fn check(&self, node: &Node, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let builtins = ctx.options.get_str_list("builtins");
        let internal = ctx.options.get_str_list("internal_prefixes");

        let imports: Vec<&Node> = node.children_of(NodeKind::Import).collect();

        for pair in imports.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            let prev_group = classify(prev.lexeme(), builtins, internal);
            let cur_group = classify(cur.lexeme(), builtins, internal);

            let out_of_order = cur_group < prev_group
                || (cur_group == prev_group
                    && cur.lexeme().to_ascii_lowercase() < prev.lexeme().to_ascii_lowercase());

            if out_of_order {
                // One report per unit; the first bad pair localizes the fix.
                return vec![ctx.violation(
                    self,
                    prev.span,
                    format!(
                        "import '{}' ({}) must come before '{}' ({})",
                        cur.lexeme(),
                        cur_group,
                        prev.lexeme(),
                        prev_group,
                    ),
                )];
            }
        }

        Vec::new()
    }
}

/// Origin group of an import specifier; the declaration order is the
/// required file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ImportGroup {
    Builtin,
    External,
    Internal,
    Parent,
    Sibling,
    Index,
    Unknown,
}

impl std::fmt::Display for ImportGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::External => write!(f, "external"),
            Self::Internal => write!(f, "internal"),
            Self::Parent => write!(f, "parent"),
            Self::Sibling => write!(f, "sibling"),
            Self::Index => write!(f, "index"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

fn classify(spec: &str, builtins: &[String], internal: &[String]) -> ImportGroup {
    if spec.is_empty() {
        return ImportGroup::Unknown;
    }
    if spec.starts_with("node:") || builtins.iter().any(|b| b == spec) {
        return ImportGroup::Builtin;
    }
    if internal.iter().any(|p| spec.starts_with(p.as_str())) {
        return ImportGroup::Internal;
    }
    if spec == "." || spec == "./index" || spec.starts_with("./index.") {
        return ImportGroup::Index;
    }
    if spec.starts_with("../") || spec == ".." {
        return ImportGroup::Parent;
    }
    if spec.starts_with("./") {
        return ImportGroup::Sibling;
    }
    if spec.starts_with('@') || spec.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
        return ImportGroup::External;
    }
    ImportGroup::Unknown
}
