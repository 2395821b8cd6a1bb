//! JSON reporter for machine consumption

use crate::analysis::Issue;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    rule: &'static str,
    severity: &'static str,
    file: String,
    line: usize,
    column: usize,
    message: &'a str,
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            rule: issue.kind.code(),
            severity: issue.severity.as_str(),
            file: issue.file.display().to_string(),
            line: issue.span.line,
            column: issue.span.column,
            message: &issue.message,
        }
    }
}

/// Writes issues as a pretty-printed JSON array
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, issues: &[Issue]) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let file = File::create(path).into_diagnostic()?;
                let mut writer = BufWriter::new(file);
                write_json(&mut writer, issues).into_diagnostic()?;
                writer.flush().into_diagnostic()
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_json(&mut handle, issues).into_diagnostic()
            }
        }
    }
}

fn write_json<W: Write>(w: &mut W, issues: &[Issue]) -> io::Result<()> {
    let records: Vec<JsonIssue<'_>> = issues.iter().map(JsonIssue::from).collect();
    serde_json::to_writer_pretty(&mut *w, &records)?;
    writeln!(w)
}
