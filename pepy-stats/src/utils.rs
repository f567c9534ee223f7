use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner progress indicator
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print success message
pub fn print_success(msg: &str) {
    println!("\n{} {}", "✓".green().bold(), msg.green());
}

/// Print error message
pub fn print_error(msg: &str) {
    eprintln!("\n{} {}", "✗".red().bold(), msg.red());
}

/// Print info message
pub fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Print warning message
pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠".yellow().bold(), msg.yellow());
}
