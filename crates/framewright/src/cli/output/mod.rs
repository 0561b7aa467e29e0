//! Output formatting utilities

use console::style;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Write rendered text to a file, or to stdout when no path is given
pub fn emit(text: &str, path: Option<&std::path::Path>, quiet: bool) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            framewright_core::fs::write_text(text, path)?;
            if !quiet {
                success(&format!("Wrote {}", style(path.display()).cyan()));
            }
        }
        None => print!("{}", text),
    }
    Ok(())
}
