//! Terminal reporter with colored output
//!
//! Based on Rust compiler diagnostic design (RFC 1644)

use crate::analysis::Issue;
use crate::report::colors::{SeveritySymbol, StructureColors};
use colored::Colorize;
use miette::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, issues: &[Issue]) -> Result<()> {
        if issues.is_empty() {
            println!("{}", "No issues found!".green().bold());
            return Ok(());
        }

        println!();
        println!(
            "Found {} issues:",
            StructureColors::count(&issues.len().to_string())
        );
        println!();

        for (file, items) in group_by_file(issues) {
            println!("{}", StructureColors::file_path(&file.display().to_string()));
            for item in items {
                println!("{}", self.format_item(item));
            }
            println!();
        }

        Ok(())
    }

    fn format_item(&self, item: &Issue) -> String {
        let location = format!("{:>5}:{:<3}", item.span.line, item.span.column);
        format!(
            "  {} {} [{}] {}",
            StructureColors::location(&location),
            SeveritySymbol::colored(item.severity),
            StructureColors::rule_code(item.kind.code()),
            item.message
        )
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Issues grouped by file, files in path order, lines ascending
pub(crate) fn group_by_file(issues: &[Issue]) -> BTreeMap<&Path, Vec<&Issue>> {
    let mut by_file: BTreeMap<&Path, Vec<&Issue>> = BTreeMap::new();
    for item in issues {
        by_file.entry(item.file.as_path()).or_default().push(item);
    }
    for items in by_file.values_mut() {
        items.sort_by_key(|i| (i.span.line, i.span.column));
    }
    by_file
}
