//! Terminal display utilities for the compbench CLI

use compbench_compression::{Registry, Report, WriteSummary};
use console::style;

/// Print the comparison report with a styled title
pub fn display_report(report: &Report, show_unsupported: bool) {
    println!("{}", style(report.render_title()).bold());
    print!("{}", report.render_table());

    if show_unsupported {
        println!();
        print!("{}", report.render_unsupported());
    }
}

/// Print every registered algorithm, marking those without a codec
pub fn display_algorithm_list(registry: &Registry) {
    println!("{}", style("Available algorithms:").bold().underlined());
    for descriptor in registry.descriptors() {
        let levels = match descriptor.codec.level_range() {
            Some(range) => format!("levels {}-{}", range.min, range.max),
            None => "fixed level".to_string(),
        };

        if descriptor.platform_supported {
            println!(
                "  {:<8} {:<10} {}",
                style(descriptor.id).green(),
                descriptor.display_name,
                style(levels).dim()
            );
        } else {
            println!(
                "  {:<8} {:<10} {}",
                style(descriptor.id).red(),
                descriptor.display_name,
                style("not supported on this platform").dim()
            );
        }
    }
}

/// Report failed payload writes
pub fn display_write_summary(summary: &WriteSummary) {
    for failure in &summary.failures {
        display_warning(&failure.to_string());
    }
}

/// Display a warning message with proper formatting
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Display an error message with proper formatting
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}
