use serde::Serialize;

use super::aggregate::SystemReport;
use crate::report_helpers;
use crate::scoring::CategoryReport;

const WIDTH: usize = 66;

/// Print the whole-system verdict as a table: per-category breakdown, balance
/// checks, collected issues and suitable workloads.
pub fn print_report(report: &SystemReport, target: Option<&str>) {
    let separator = report_helpers::separator(WIDTH);

    match target {
        Some(t) => println!("Build Report: {t}"),
        None => println!("Build Report"),
    }
    println!("{separator}");
    println!(
        " Overall Score:  {} ({})",
        report.overall_tier, report.overall_score
    );
    println!(" Problem Level:  {}", report.problem_level.label());
    println!("{separator}");
    println!(
        " {:<14} {:>6}   {:>5}   {:<4}  {:<12}",
        "Category", "Weight", "Score", "Tier", "Status"
    );
    println!("{separator}");

    for (r, weight) in report.weighted_categories() {
        println!(
            " {:<14} {:>5.0}%   {:>5}   {:<4}  {:<12}",
            r.category.label(),
            weight * 100.0,
            r.score,
            r.tier.as_str(),
            r.status.label(),
        );
    }
    println!("{separator}");

    let b = &report.bottleneck;
    println!();
    println!(" Bottleneck: {} ({}-point gap)", b.level.label(), b.difference);
    println!("   {}", b.message);
    if !b.recommendation.is_empty() {
        println!("   {}", b.recommendation);
    }

    if report.budget.has_waste {
        println!();
        println!(" Budget Waste: {}", report.budget.severity.label());
        for issue in &report.budget.issues {
            println!("   - {issue}");
        }
    }

    if !report.issues.is_empty() {
        println!();
        println!(" Issues");
        println!("{separator}");
        for issue in &report.issues {
            println!(" - {issue}");
        }
    }

    println!();
    println!(" Recommended For");
    println!("{separator}");
    println!(" {}", report.recommended_uses.join(", "));
    println!("{separator}");
}

/// Print a single category report.
pub fn print_category(report: &CategoryReport, target: Option<&str>) {
    let separator = report_helpers::separator(WIDTH);

    let title = report.category.label();
    match target {
        Some(t) => println!("{title} Score: {t}"),
        None => println!("{title} Score"),
    }
    println!("{separator}");
    println!(" Score:   {} ({})", report.tier, report.score);
    println!(" Status:  {}", report.status.label());
    println!(" {}", report.message);

    if !report.issues.is_empty() {
        println!("{separator}");
        for issue in &report.issues {
            println!(" - {issue}");
        }
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(flatten)]
    report: &'a T,
}

/// Serialize any report type to pretty JSON on stdout, tagged with the input
/// it was produced from.
pub fn print_json<T: Serialize>(
    report: &T,
    target: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonReport { target, report })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
