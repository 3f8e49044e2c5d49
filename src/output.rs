//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and, where the command prints a report, a `print_*` wrapper
//! that writes to stdout. Format functions are pure — no I/O, no side effects.
//!
//! Data URLs themselves are printed raw by `main` so they can be piped; the
//! human-readable summaries here go to stderr for `compress`.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! living.jpg: ok (2.4 MB, image/jpeg)
//! scan.gif: rejected (89.1 KB, image/gif)
//!     Please upload a valid image file (JPEG, PNG, or WebP)
//! ```
//!
//! ## Compress
//!
//! ```text
//! living.jpg: 4032x3024 → 1024x768 (2.4 MB → 181.3 KB)
//! ```

use crate::imaging::CompressedImage;
use crate::validation::ValidationOutcome;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count using binary multiples.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Format one file's validation result.
pub fn format_validation(
    label: &str,
    media_type: &str,
    size: u64,
    outcome: &ValidationOutcome,
) -> Vec<String> {
    let media_type = if media_type.is_empty() {
        "unknown type"
    } else {
        media_type
    };
    let detail = format!("{}, {}", format_bytes(size), media_type);
    match outcome.message() {
        None => vec![format!("{label}: ok ({detail})")],
        Some(message) => vec![
            format!("{label}: rejected ({detail})"),
            format!("{}{message}", indent(1)),
        ],
    }
}

pub fn print_validation(label: &str, media_type: &str, size: u64, outcome: &ValidationOutcome) {
    for line in format_validation(label, media_type, size, outcome) {
        println!("{}", line);
    }
}

/// Format the summary line for one compressed file.
pub fn format_compression(label: &str, original_size: u64, result: &CompressedImage) -> String {
    format!(
        "{label}: {}x{} → {}x{} ({} → {})",
        result.original_width,
        result.original_height,
        result.width,
        result.height,
        format_bytes(original_size),
        format_bytes(result.encoded_len as u64)
    )
}

/// Format the known room types as an aligned two-column table.
pub fn format_room_types<'a>(rooms: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<String> {
    let rooms: Vec<_> = rooms.collect();
    let width = rooms.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rooms
        .into_iter()
        .map(|(key, label)| format!("{key:<width$}  {label}"))
        .collect()
}

pub fn print_room_types<'a>(rooms: impl Iterator<Item = (&'a str, &'a str)>) {
    for line in format_room_types(rooms) {
        println!("{}", line);
    }
}
