//! Rename engine: walk the tree, rewrite each target file, tally the run.
//!
//! Every file moves through `Discovered → Read → Transformed` and ends as
//! written back, unchanged, or errored. Per-file failures are recorded and
//! never stop the walk; only a missing root aborts a run.

use std::path::{Path, PathBuf};

use super::report::Reporter;
use super::rules::{RuleChange, RuleTable};
use super::walker;
use crate::error::{Error, Result};
use crate::utils::io;

/// Knobs for a rename run.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Directory names pruned from the walk at any depth.
    pub skip_dirs: Vec<String>,
    /// Write back through a temp file + rename instead of overwriting in place.
    pub atomic_writes: bool,
}

/// One file's content during processing.
#[derive(Debug)]
pub struct FileTask {
    path: PathBuf,
    original: String,
    current: String,
}

impl FileTask {
    pub fn read(path: &Path) -> Result<Self> {
        let original = io::read_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            current: original.clone(),
            original,
        })
    }

    /// Run the whole table over the current buffer.
    pub fn transform(&mut self, table: &RuleTable) -> Vec<RuleChange> {
        let outcome = table.apply(&self.current);
        self.current = outcome.text;
        outcome.changes
    }

    pub fn is_changed(&self) -> bool {
        self.current != self.original
    }

    pub fn write_back(&self, atomic: bool) -> Result<()> {
        if atomic {
            io::write_file_atomic(&self.path, &self.current)
        } else {
            io::write_file(&self.path, &self.current)
        }
    }
}

/// Terminal state of a processed file.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Modified(Vec<RuleChange>),
    Unchanged,
    Errored(Error),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Changes written to one file.
#[derive(Debug, Clone)]
pub struct FileChanges {
    pub path: PathBuf,
    pub changes: Vec<RuleChange>,
}

/// Aggregate counts and change log for a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total_files: usize,
    pub modified_files: usize,
    pub errored_files: usize,
    pub log: Vec<FileChanges>,
}

impl RunSummary {
    /// Files that were scanned, not errored, and left as they were.
    pub fn unchanged_files(&self) -> usize {
        self.total_files
            .saturating_sub(self.modified_files)
            .saturating_sub(self.errored_files)
    }

    fn record(&mut self, report: &FileReport) {
        self.total_files += 1;
        match &report.outcome {
            FileOutcome::Modified(changes) => {
                self.modified_files += 1;
                self.log.push(FileChanges {
                    path: report.path.clone(),
                    changes: changes.clone(),
                });
            }
            FileOutcome::Unchanged => {}
            FileOutcome::Errored(_) => self.errored_files += 1,
        }
    }
}

/// Applies a rule table to every target file under a root.
pub struct Renamer<'a> {
    table: &'a RuleTable,
    options: RenameOptions,
}

impl<'a> Renamer<'a> {
    pub fn new(table: &'a RuleTable, options: RenameOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &RuleTable {
        self.table
    }

    /// Walk `root` and process each target file in order.
    ///
    /// Returns `RootNotFound` before touching anything if `root` is not a
    /// directory.
    pub fn run(&self, root: &Path, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let files = walker::enumerate(root, &self.options.skip_dirs)?;

        reporter.start(root, self.table);

        let mut summary = RunSummary::default();
        for path in files {
            let report = self.process_file(&path);
            reporter.file(&report);
            summary.record(&report);
        }

        reporter.finish(&summary);
        Ok(summary)
    }

    /// Read, transform, and (if changed) write back a single file.
    pub fn process_file(&self, path: &Path) -> FileReport {
        let outcome = match self.rewrite(path) {
            Ok(Some(changes)) => FileOutcome::Modified(changes),
            Ok(None) => FileOutcome::Unchanged,
            Err(err) => FileOutcome::Errored(err),
        };

        FileReport {
            path: path.to_path_buf(),
            outcome,
        }
    }

    fn rewrite(&self, path: &Path) -> Result<Option<Vec<RuleChange>>> {
        let mut task = FileTask::read(path)?;
        let changes = task.transform(self.table);

        if !task.is_changed() {
            return Ok(None);
        }

        task.write_back(self.options.atomic_writes)?;
        Ok(Some(changes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::refactor::report::tests::Recorder;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> RuleTable {
        RuleTable::color_scheme().unwrap()
    }

    #[test]
    fn tsx_file_is_rewritten_and_md_file_untouched() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("Component.tsx"), "const x = theme;\n").unwrap();
        fs::write(root.join("notes.md"), "the theme is nice\n").unwrap();

        let table = table();
        let renamer = Renamer::new(&table, RenameOptions::default());
        let summary = renamer.run(root, &mut Recorder::default()).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("Component.tsx")).unwrap(),
            "const x = colorScheme;\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("notes.md")).unwrap(),
            "the theme is nice\n"
        );
        assert_eq!(summary.total_files, 1);
        assert_eq!(summary.modified_files, 1);
    }

    #[test]
    fn unmatched_file_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.ts");
        fs::write(&path, "export const answer = 42;\r\n").unwrap();
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let table = table();
        let report = Renamer::new(&table, RenameOptions::default()).process_file(&path);

        assert!(matches!(report.outcome, FileOutcome::Unchanged));
        assert_eq!(fs::read(&path).unwrap(), b"export const answer = 42;\r\n");
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn modified_file_reports_per_rule_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("App.jsx");
        fs::write(
            &path,
            "const { theme } = useTheme();\nconsole.log(theme, theme);\n",
        )
        .unwrap();

        let table = table();
        let report = Renamer::new(&table, RenameOptions::default()).process_file(&path);

        let FileOutcome::Modified(changes) = report.outcome else {
            panic!("expected modified outcome");
        };
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].pattern, "theme");
        assert_eq!(changes[0].occurrences, 3);
        assert_eq!(changes[1].pattern, "useTheme");
        assert_eq!(changes[1].occurrences, 1);
    }

    #[test]
    fn aggregate_counts_match_fixture_tree() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("components/settings")).unwrap();
        fs::create_dir_all(root.join("utils")).unwrap();
        fs::write(root.join("index.ts"), "export * from './ThemeContext';\n").unwrap();
        fs::write(
            root.join("components/settings/ThemeSelector.tsx"),
            "export const ThemeSelector = () => null;\n",
        )
        .unwrap();
        fs::write(root.join("components/Button.jsx"), "export default 1;\n").unwrap();
        fs::write(root.join("utils/math.js"), "export const add = (a, b) => a + b;\n").unwrap();
        fs::write(root.join("utils/storage.TS"), "get(\"selectedTheme\");\n").unwrap();
        fs::write(root.join("README.md"), "theme\n").unwrap();

        let table = table();
        let mut recorder = Recorder::default();
        let summary = Renamer::new(&table, RenameOptions::default())
            .run(root, &mut recorder)
            .unwrap();

        assert_eq!(summary.total_files, 5);
        assert_eq!(summary.modified_files, 3);
        assert_eq!(summary.errored_files, 0);
        assert_eq!(summary.unchanged_files(), 2);
        assert_eq!(summary.log.len(), 3);
        assert_eq!(recorder.files.len(), 5);
        assert!(recorder.started);
        assert!(recorder.finished);
    }

    #[test]
    fn unreadable_file_is_errored_and_run_continues() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("a_binary.js"), [0xffu8, 0xfe, 0x00]).unwrap();
        fs::write(root.join("b_theme.ts"), "theme\n").unwrap();

        let table = table();
        let mut recorder = Recorder::default();
        let summary = Renamer::new(&table, RenameOptions::default())
            .run(root, &mut recorder)
            .unwrap();

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.errored_files, 1);
        assert_eq!(summary.modified_files, 1);
        assert_eq!(summary.unchanged_files(), 0);

        match &recorder.files[0].outcome {
            FileOutcome::Errored(err) => assert_eq!(err.code, ErrorCode::FileReadFailed),
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(
            fs::read_to_string(root.join("b_theme.ts")).unwrap(),
            "colorScheme\n"
        );
    }

    #[test]
    fn write_failure_is_errored_and_run_continues() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("a.ts"), "theme\n").unwrap();
        fs::create_dir(root.join("a.ts.tmp")).unwrap();
        fs::write(root.join("b.ts"), "theme\n").unwrap();

        let table = table();
        let options = RenameOptions {
            atomic_writes: true,
            ..RenameOptions::default()
        };
        let mut recorder = Recorder::default();
        let summary = Renamer::new(&table, options)
            .run(root, &mut recorder)
            .unwrap();

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.modified_files, 1);
        assert_eq!(summary.errored_files, 1);
        assert_eq!(summary.unchanged_files(), 0);

        assert_eq!(recorder.files[0].path, root.join("a.ts"));
        match &recorder.files[0].outcome {
            FileOutcome::Errored(err) => {
                assert_eq!(err.code, ErrorCode::FileWriteFailed);
                assert!(err.message.contains("a.ts"));
            }
            other => panic!("expected error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(root.join("a.ts")).unwrap(), "theme\n");
        assert!(root.join("a.ts.tmp").is_dir());
        assert_eq!(
            fs::read_to_string(root.join("b.ts")).unwrap(),
            "colorScheme\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn default_config_walks_whole_tree_including_symlinked_files() {
        use crate::config::RenameConfig;
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("node_modules/theme.js"), "theme\n").unwrap();
        fs::write(root.join("real.ts"), "theme\n").unwrap();
        symlink(root.join("real.ts"), root.join("link.ts")).unwrap();

        let table = table();
        let options = RenameConfig::default().rename_options();
        let summary = Renamer::new(&table, options)
            .run(root, &mut Recorder::default())
            .unwrap();

        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.modified_files, 2);
        assert_eq!(summary.unchanged_files(), 1);
        assert_eq!(
            fs::read_to_string(root.join("node_modules/theme.js")).unwrap(),
            "colorScheme\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("real.ts")).unwrap(),
            "colorScheme\n"
        );
        assert!(fs::symlink_metadata(root.join("link.ts"))
            .unwrap()
            .file_type()
            .is_symlink());
    }

    #[test]
    fn inconsistent_summary_reports_zero_unchanged() {
        let summary = RunSummary {
            total_files: 1,
            modified_files: 1,
            errored_files: 1,
            log: Vec::new(),
        };
        assert_eq!(summary.unchanged_files(), 0);
    }

    #[test]
    fn missing_root_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let table = table();
        let mut recorder = Recorder::default();

        let err = Renamer::new(&table, RenameOptions::default())
            .run(&dir.path().join("src"), &mut recorder)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RootNotFound);
        assert!(!recorder.started);
        assert!(recorder.files.is_empty());
    }

    #[test]
    fn atomic_writes_rewrite_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hook.ts");
        fs::write(&path, "export const useTheme = () => theme;\n").unwrap();

        let table = table();
        let options = RenameOptions {
            atomic_writes: true,
            ..RenameOptions::default()
        };
        let report = Renamer::new(&table, options).process_file(&path);

        assert!(matches!(report.outcome, FileOutcome::Modified(_)));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export const useColorScheme = () => colorScheme;\n"
        );
        assert!(!dir.path().join("hook.ts.tmp").exists());
    }

    #[test]
    fn second_run_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(
            root.join("Provider.tsx"),
            "<ThemeProvider theme={defaultTheme}>{children}</ThemeProvider>\n",
        )
        .unwrap();

        let table = table();
        let renamer = Renamer::new(&table, RenameOptions::default());
        let first = renamer.run(root, &mut Recorder::default()).unwrap();
        let second = renamer.run(root, &mut Recorder::default()).unwrap();

        assert_eq!(first.modified_files, 1);
        assert_eq!(second.modified_files, 0);
        assert_eq!(second.unchanged_files(), 1);
    }

    #[test]
    fn file_task_tracks_original_and_current() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("t.ts");
        fs::write(&path, "setTheme(x)").unwrap();

        let mut task = FileTask::read(&path).unwrap();
        assert!(!task.is_changed());

        let changes = task.transform(&table());
        assert!(task.is_changed());
        assert_eq!(changes[0].pattern, "setTheme");

        task.write_back(false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "setColorScheme(x)");
    }
}
