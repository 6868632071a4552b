use colored::Colorize;

/// Print a warning message with a yellow marker.
pub fn warning(message: &str) {
    println!("{} {}", "!".yellow(), message);
}

/// Print an error message with a red cross to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "×".red(), message);
}
