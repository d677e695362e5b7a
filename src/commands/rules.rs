use std::io::{self, Write};

use rescheme::refactor::RuleTable;
use rescheme::Error;

use crate::commands::{CmdResult, GlobalArgs};

/// Print the rename table in application order.
pub fn run(_global: &GlobalArgs) -> CmdResult<usize> {
    let table = RuleTable::color_scheme()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_table(&mut out, &table) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(Error::internal_io(e.to_string(), Some("write stdout".to_string())));
        }
    }

    Ok((table.len(), 0))
}

fn write_table(out: &mut impl Write, table: &RuleTable) -> io::Result<()> {
    let width = table.iter().map(|r| r.pattern().len()).max().unwrap_or(0);
    for (index, rule) in table.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<width$} -> {} [{}]",
            index + 1,
            rule.pattern(),
            rule.replacement(),
            rule.kind().label(),
            width = width
        )?;
    }
    out.flush()
}
