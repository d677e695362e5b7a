//! CLI error reporting and exit code mapping.

use rescheme::{Error, ErrorCode, Result};
use std::io::{self, Write};

/// Render an error and its hints as console lines.
fn format_error(err: &Error, decorate: bool) -> String {
    let marker = if decorate { "❌ " } else { "error: " };
    let mut text = format!("{}{}\n", marker, err.message);
    for hint in &err.hints {
        text.push_str(&format!("   hint: {}\n", hint.message));
    }
    text
}

fn print_error(err: &Error, decorate: bool) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Nothing left to report to if stderr itself is gone.
    let _ = handle.write_all(format_error(err, decorate).as_bytes());
}

/// Map a command result to a process exit code, printing any error.
pub fn finish<T>(result: Result<(T, i32)>, decorate: bool) -> i32 {
    match result {
        Ok((_, exit_code)) => exit_code,
        Err(err) => {
            print_error(&err, decorate);
            exit_code_for_error(err.code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson | ErrorCode::RuleTableInvalid => 2,

        ErrorCode::RootNotFound => 4,

        ErrorCode::FileReadFailed | ErrorCode::FileWriteFailed | ErrorCode::InternalIoError => 1,
    }
}
