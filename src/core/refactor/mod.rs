//! Identifier renaming — rewrite theme symbols to colorScheme symbols across a source tree.
//!
//! Walks JavaScript/TypeScript files, applies an ordered rule table with
//! word-boundary-aware matching, and writes back only files whose text changed.

pub mod engine;
pub mod matcher;
pub mod report;
pub mod rules;
pub mod walker;

pub use engine::{
    FileChanges, FileOutcome, FileReport, FileTask, RenameOptions, Renamer, RunSummary,
};
pub use matcher::{MatchKind, Substitution};
pub use report::{ConsoleReporter, Reporter};
pub use rules::{Rule, RuleChange, RuleTable, TableOutcome, COLOR_SCHEME_RENAMES};
pub use walker::{enumerate, is_target_file, TARGET_EXTENSIONS};
