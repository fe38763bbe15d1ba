//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::ExtractReport;

/// Create a progress bar for the dedup pass
pub fn create_dedup_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} transcripts ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Create a spinner for the quadratic subset pass
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:24} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let mut remaining = digits.len();
    for c in digits.chars() {
        result.push(c);
        remaining -= 1;
        if remaining > 0 && remaining.is_multiple_of(3) {
            result.push(',');
        }
    }
    result
}

/// Print the aggregate counts of an extraction run
pub fn print_report(report: &ExtractReport) {
    print_section("EXTRACTION SUMMARY");
    print_kv("Transcripts parsed", &format_number(report.total_parsed));
    if report.malformed > 0 {
        print_kv("Malformed (skipped)", &format_number(report.malformed));
    }
    print_kv("Unique raw games", &format_number(report.unique_raw));
    print_kv("Unique canonical games", &format_number(report.unique_canonical));
    if report.failed > 0 {
        print_kv("Failed games", &format_number(report.failed));
    }
    print_kv("Dominated games", &format_number(report.dominated));
    print_kv("Surviving games", &format_number(report.surviving));
}
