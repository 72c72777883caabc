//! Formatting and reporting for health check results

use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::runner::HealthCheckReport;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "System")]
    system: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Formats a health check report as a table followed by a summary
pub fn format_report(report: &HealthCheckReport) -> String {
    let rows = report.results.iter().map(|(name, result)| ReportRow {
        system: name.clone(),
        status: result.status.as_colored_str(),
        duration: format!("{:.2?}", result.duration),
        message: result.message.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n{}", format_summary(report))
}

fn format_summary(report: &HealthCheckReport) -> String {
    let mut lines = vec![
        String::new(),
        "Summary".bold().underline().to_string(),
        format!("  Total checks: {}", report.total),
        format!("  {} Passed: {}", "✓".green(), report.passed),
    ];
    if report.warned > 0 {
        lines.push(format!("  {} Warned: {}", "⚠".yellow(), report.warned));
    }
    if report.failed > 0 {
        lines.push(format!("  {} Failed: {}", "✗".red(), report.failed));
    }
    lines.push(String::new());

    let overall = match (report.is_healthy(), report.has_warnings()) {
        (true, false) => "Overall: HEALTHY".green().bold(),
        (true, true) => "Overall: HEALTHY (with warnings)".yellow().bold(),
        (false, _) => "Overall: UNHEALTHY".red().bold(),
    };
    lines.push(format!("  {overall}"));

    lines.join("\n") + "\n"
}

/// Prints a health check report, followed by each check's notes
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    for (name, result) in &report.results {
        if result.notes.is_empty() {
            continue;
        }
        println!("\n{} Details:", name.bold());
        for note in &result.notes {
            println!("  {note}");
        }
    }
}
