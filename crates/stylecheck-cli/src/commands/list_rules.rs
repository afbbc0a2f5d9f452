//! List rules command implementation.

use stylecheck_core::SeverityLevel;
use stylecheck_rules::builtin_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<8} {:<28} {:<13} {:<8} Description",
        "Code", "Name", "Category", "Default"
    );
    println!("{}", "-".repeat(100));

    for rule in builtin_rules() {
        println!(
            "{:<8} {:<28} {:<13} {:<8} {}",
            rule.code(),
            rule.id(),
            rule.category().to_string(),
            rule.default_severity().to_string(),
            rule.description()
        );

        for option in rule.options() {
            println!("{:>10} {} - {}", "option:", option.name, option.help);
        }
    }

    println!("\nRules marked '{}' must be enabled in stylecheck.toml.", SeverityLevel::Off);
    println!("Configure severity and options per rule, e.g.:");
    println!("  [rules]");
    println!("  import-order = \"error\"");
    println!();
    println!("  [rules.component-size]");
    println!("  severity = \"warn\"");
    println!("  max_statements = 40");
}
