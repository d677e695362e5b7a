use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{rename, rules, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rescheme")]
#[command(version = VERSION)]
#[command(about = "Rename theme identifiers to colorScheme identifiers across a JS/TS source tree")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite target files under the root (default when no command is given)
    Run,
    /// List the rename rules in application order
    Rules,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let decorate = tty::is_stderr_tty();

    let exit_code = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => output::finish(rename::run(&cli.global), decorate),
        Commands::Rules => output::finish(rules::run(&cli.global), decorate),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
