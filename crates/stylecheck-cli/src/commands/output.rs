//! Shared output formatting for check results.

use anyhow::Result;
use stylecheck_core::{RunReport, Severity, Span, UnitStatus};

use crate::OutputFormat;

/// Print a run report in the specified format.
pub fn print(report: &RunReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &RunReport) {
    for unit in &report.units {
        match &unit.status {
            UnitStatus::Checked => {}
            UnitStatus::ParseFailed { message } => {
                println!(
                    "\x1b[31mfailed\x1b[0m {}: {message}",
                    unit.unit.display()
                );
                continue;
            }
            UnitStatus::LimitExceeded => {
                println!(
                    "\x1b[31mfailed\x1b[0m {}: tree exceeds the depth limit",
                    unit.unit.display()
                );
                continue;
            }
        }

        for violation in &unit.violations {
            let severity_indicator = match violation.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };

            println!(
                "{} {} at {}:{}",
                violation.code,
                violation.rule,
                violation.unit.display(),
                position(&violation.span),
            );
            println!("  {severity_indicator}: {}", violation.message);
            if let Some(help) = &violation.help {
                println!("  = help: {help}");
            }
            println!();
        }
    }

    let errors = report.count(Severity::Error);
    let warnings = report.count(Severity::Warning);

    let summary_color = if errors > 0 || report.files_failed() > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let partial = if report.partial { " (partial run)" } else { "" };
    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s), {} failed{}\x1b[0m",
        summary_color,
        errors,
        warnings,
        report.files_checked(),
        report.files_failed(),
        partial,
    );
}

fn print_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &RunReport) {
    for violation in report.violations() {
        println!(
            "{}:{}: {} [{}] {}",
            violation.unit.display(),
            position(&violation.span),
            violation.severity,
            violation.code,
            violation.message,
        );
    }
}

/// Line:column when the front-end recorded it, byte range otherwise.
fn position(span: &Span) -> String {
    if span.line > 0 {
        format!("{}:{}", span.line, span.column)
    } else {
        format!("{}..{}", span.start, span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_prefers_line_column() {
        assert_eq!(position(&Span::new(4, 9).at(2, 5)), "2:5");
        assert_eq!(position(&Span::new(4, 9)), "4..9");
    }
}
