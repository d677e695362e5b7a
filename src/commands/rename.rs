use std::io;

use rescheme::refactor::{ConsoleReporter, Renamer, RuleTable, RunSummary};

use crate::commands::{current_dir, CmdResult, GlobalArgs};
use crate::tty;

/// Rename theme identifiers under the configured root, reporting to stdout.
pub fn run(global: &GlobalArgs) -> CmdResult<RunSummary> {
    let cwd = current_dir()?;
    let (config, root) = global.resolve(&cwd)?;

    let table = RuleTable::color_scheme()?;
    let renamer = Renamer::new(&table, config.rename_options());

    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock(), tty::is_stdout_tty());
    let summary = renamer.run(&root, &mut reporter)?;

    Ok((summary, 0))
}
