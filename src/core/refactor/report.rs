//! Progress and summary reporting for rename runs.

use std::io::Write;
use std::path::Path;

use super::engine::{FileOutcome, FileReport, RunSummary};
use super::rules::RuleTable;
use super::walker::TARGET_EXTENSIONS;

const RULE: &str = "============================================================";

/// Receives run events as the renamer progresses.
pub trait Reporter {
    /// Called once the root is known to exist, before any file is processed.
    fn start(&mut self, _root: &Path, _table: &RuleTable) {}

    fn file(&mut self, report: &FileReport);

    fn finish(&mut self, _summary: &RunSummary) {}
}

/// Human-readable report written to any `Write` sink.
///
/// Write failures are ignored; the report is advisory.
pub struct ConsoleReporter<W: Write> {
    out: W,
    decorate: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// `decorate` adds emoji status markers (meant for interactive terminals).
    pub fn new(out: W, decorate: bool) -> Self {
        Self { out, decorate }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn marker(decorate: bool, emoji: &'static str) -> &'static str {
    if decorate {
        emoji
    } else {
        ""
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn start(&mut self, root: &Path, table: &RuleTable) {
        let shown = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let extensions: Vec<String> = TARGET_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect();

        let _ = writeln!(
            self.out,
            "{}Theme to ColorScheme Identifier Renaming",
            marker(self.decorate, "🎨 ")
        );
        let _ = writeln!(self.out, "{}", RULE);
        let _ = writeln!(
            self.out,
            "{}Scanning directory: {}",
            marker(self.decorate, "🔍 "),
            shown.display()
        );
        let _ = writeln!(
            self.out,
            "{}Target extensions: {}",
            marker(self.decorate, "📝 "),
            extensions.join(", ")
        );
        let _ = writeln!(
            self.out,
            "{}Replacements to apply: {}",
            marker(self.decorate, "🔄 "),
            table.len()
        );
        let _ = writeln!(self.out, "{}", RULE);
    }

    fn file(&mut self, report: &FileReport) {
        let path = report.path.display();
        match &report.outcome {
            FileOutcome::Modified(changes) => {
                let _ = writeln!(self.out, "{}Modified: {}", marker(self.decorate, "✅ "), path);
                for change in changes {
                    let _ = writeln!(
                        self.out,
                        "   {} -> {} ({} times)",
                        change.pattern, change.replacement, change.occurrences
                    );
                }
            }
            FileOutcome::Unchanged => {
                let _ = writeln!(self.out, "{}No changes: {}", marker(self.decorate, "⚪ "), path);
            }
            FileOutcome::Errored(err) => {
                let _ = writeln!(
                    self.out,
                    "{}Error processing {}: {}",
                    marker(self.decorate, "❌ "),
                    path,
                    err
                );
            }
        }
    }

    fn finish(&mut self, summary: &RunSummary) {
        let _ = writeln!(self.out, "{}", RULE);
        let _ = writeln!(self.out, "{}Summary:", marker(self.decorate, "📊 "));
        let _ = writeln!(self.out, "   Total files scanned: {}", summary.total_files);
        let _ = writeln!(self.out, "   Files modified: {}", summary.modified_files);
        let _ = writeln!(self.out, "   Files unchanged: {}", summary.unchanged_files());
        if summary.errored_files > 0 {
            let _ = writeln!(self.out, "   Files with errors: {}", summary.errored_files);
        }
        let _ = writeln!(
            self.out,
            "{}Theme to ColorScheme renaming complete!",
            marker(self.decorate, "✨ ")
        );
        let _ = self.out.flush();
    }
}
