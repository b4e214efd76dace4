use colored::*;

pub fn print_header(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "=".repeat(text.chars().count()).bright_cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_info(text: &str) {
    println!("{}", text.blue());
}

/// Code blocks are printed uncolored so they can be copied as-is
pub fn print_code(title: &str, code: &str) {
    println!("\n{}\n{}", format!("--- {} ---", title).yellow().bold(), code);
}
