//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use dinefind_core::records::{Cuisine, Restaurant};
use owo_colors::OwoColorize;
use std::collections::HashMap;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

const COLUMNS: [&str; 6] = ["#", "Name", "Cuisine", "Distance", "Rating", "Price"];

/// Render search results as an aligned text table.
///
/// Cuisine ids are shown by name when `cuisines` knows them.
pub fn render_table(results: &[Restaurant], cuisines: &[Cuisine]) -> String {
    let names: HashMap<&str, &str> = cuisines
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let rows: Vec<[String; 6]> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.name.clone(),
                names
                    .get(r.cuisine_id.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| r.cuisine_id.clone()),
                r.distance.clone(),
                r.customer_rating.clone(),
                r.price.clone(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(&COLUMNS));
    out.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(line(&cells));
    }
    out.join("\n")
}

/// Print results, or a note when there are none.
pub fn print_results(results: &[Restaurant], cuisines: &[Cuisine]) {
    if results.is_empty() {
        println!("{}", "No matching restaurants".dimmed());
        return;
    }
    println!("{}", render_table(results, cuisines));
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<Restaurant> {
        vec![
            Restaurant::new("3", "Deliciouszilla", "2", "1", "4", "15"),
            Restaurant::new("8", "Cafe", "99", "3", "3", "5"),
        ]
    }

    #[test]
    fn test_table_resolves_cuisine_names() {
        let table = render_table(&results(), &[Cuisine::new("2", "Chinese")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#  Name"));
        assert!(lines[2].contains("Deliciouszilla"));
        assert!(lines[2].contains("Chinese"));
        // Unknown cuisine falls back to its id.
        assert!(lines[3].contains("99"));
    }

    #[test]
    fn test_table_columns_align() {
        let table = render_table(&results(), &[]);
        let lines: Vec<&str> = table.lines().collect();

        let cuisine_col = lines[0].find("Cuisine").unwrap();
        assert_eq!(&lines[3][cuisine_col..cuisine_col + 2], "99");
    }

    #[test]
    fn test_empty_table_has_header() {
        let table = render_table(&[], &[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "restaurant", "restaurants"), "1 restaurant");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "restaurant", "restaurants"), "5 restaurants");
    }
}
