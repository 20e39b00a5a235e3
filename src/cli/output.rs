//! Terminal output helpers.
//!
//! Status lines carry a one-character marker. Success, info and tips go
//! to stdout. Warnings and errors go to stderr so that `get` and
//! `gen-password` output stays pipeable. Secrets are printed with
//! [`secret`] and nothing else.

use comfy_table::{ContentArrangement, Table};
use console::{style, StyledObject};

fn line(marker: StyledObject<&str>, msg: &str) -> String {
    format!("{marker} {msg}")
}

/// `✓ msg` in green, on stdout.
pub fn success(msg: &str) {
    println!("{}", line(style("\u{2713}").green().bold(), msg));
}

/// `✗ msg` in red, on stderr.
pub fn error(msg: &str) {
    eprintln!("{}", line(style("\u{2717}").red().bold(), msg));
}

/// `⚠ msg` in yellow, on stderr.
pub fn warning(msg: &str) {
    eprintln!("{}", line(style("\u{26a0}").yellow().bold(), msg));
}

/// `ℹ msg` in blue, on stdout.
pub fn info(msg: &str) {
    println!("{}", line(style("\u{2139}").blue().bold(), msg));
}

/// A dimmed hint line.
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// A bare secret on its own stdout line, unstyled.
pub fn secret(value: &str) {
    println!("{value}");
}

/// Numbered one-column table of identifiers.
pub fn print_entries_table(identifiers: &[String]) {
    if identifiers.is_empty() {
        info("There are no password entries in this vault.");
        tip("Run `pwvault add <IDENTIFIER>` or `pwvault generate <IDENTIFIER>`.");
        return;
    }

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Identifier"]);

    for (n, id) in (1..).zip(identifiers) {
        table.add_row(vec![n.to_string(), id.clone()]);
    }

    println!("{table}");
}
