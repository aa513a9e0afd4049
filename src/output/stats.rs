//! Statistics reporting.

use console::style;

use crate::download::DownloadSummary;

/// Print statistics for a finished run.
pub fn print_download_summary(summary: &DownloadSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Statistics:").bold());
    println!("  Songs:       {}", summary.total);
    println!("  Downloaded:  {}", style(summary.downloaded).green());
    println!(
        "  Unavailable: {} (not streamable with this account)",
        style(summary.unavailable).yellow()
    );
    if summary.failed > 0 {
        println!("  Failed:      {}", style(summary.failed).red());
    }
    println!("{}", style("═".repeat(50)).dim());
}
