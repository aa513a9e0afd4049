//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Baboom Exporter                                   ║
║     Export your Baboom library to disk                ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    email: &str,
    download_dir: &Path,
    preferred_format: &str,
    concurrency: usize,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Account: {}", email);
    println!("  Directory: {}", download_dir.display());
    println!("  Format: {}", preferred_format);
    println!("  Parallel downloads: {}", concurrency);
    println!();
}
