//! Compact terminal reporter - minimal output format
//!
//! One line per issue, optimized for scanning large result sets

use crate::analysis::{Issue, Severity};
use crate::report::colors::{BoxChars, SeveritySymbol, StructureColors};
use crate::report::terminal::group_by_file;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Compact reporter for minimal, scannable output
pub struct CompactReporter {
    /// Base path to strip from file paths for shorter display
    base_path: Option<PathBuf>,
    /// Maximum width for file paths (truncate if longer)
    max_path_width: usize,
}

impl CompactReporter {
    pub fn new() -> Self {
        Self {
            base_path: None,
            max_path_width: 60,
        }
    }

    pub fn with_base_path(mut self, path: PathBuf) -> Self {
        self.base_path = Some(path);
        self
    }

    /// Format a path relative to base path if set
    fn format_path(&self, path: &Path) -> String {
        let display = if let Some(base) = &self.base_path {
            path.strip_prefix(base)
                .unwrap_or(path)
                .display()
                .to_string()
        } else {
            path.display().to_string()
        };

        let chars: Vec<char> = display.chars().collect();
        if chars.len() > self.max_path_width {
            let tail: String = chars[chars.len() - self.max_path_width + 3..].iter().collect();
            format!("...{}", tail)
        } else {
            display
        }
    }

    pub fn report(&self, issues: &[Issue]) {
        if issues.is_empty() {
            println!("{}", "No issues found!".green().bold());
            return;
        }

        for (file, items) in group_by_file(issues) {
            println!("{}", StructureColors::file_path(&self.format_path(file)));
            for item in items {
                self.print_item(item);
            }
            println!();
        }

        self.print_summary(issues);
    }

    fn print_item(&self, item: &Issue) {
        let location = format!("{:>5}:{:<3}", item.span.line, item.span.column);
        println!(
            "  {}  {}  {}  {}",
            StructureColors::location(&location),
            SeveritySymbol::colored(item.severity),
            StructureColors::rule_code(item.kind.code()),
            item.message
        );
    }

    fn print_summary(&self, issues: &[Issue]) {
        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        let errors = count(Severity::Error);
        let warnings = count(Severity::Warning);
        let infos = count(Severity::Info);

        println!("{}", BoxChars::heavy_line(50).dimmed());

        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(format!("{} {}", errors, "errors".red()));
        }
        if warnings > 0 {
            parts.push(format!("{} {}", warnings, "warnings".yellow()));
        }
        if infos > 0 {
            parts.push(format!("{} {}", infos, "info".blue()));
        }

        println!(
            "  {} {} ({})",
            StructureColors::count(&issues.len().to_string()),
            "issues".bold(),
            parts.join(", ")
        );
    }
}

impl Default for CompactReporter {
    fn default() -> Self {
        Self::new()
    }
}
