//! Check command - validate one password locally

use std::io::{self, BufRead as _};

use anyhow::Context as _;
use log::debug;

use passcheck::api::{self, ValidatePasswordRequest, ValidationResponse};
use passcheck::output::{CheckReport, OutputMode};

/// Validate a password given as an argument or on stdin
///
/// Exits with status 1 when the password is rejected, for either a rule
/// failure or an empty password.
pub fn check(password: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password_line()?,
    };

    let req = ValidatePasswordRequest {
        password: Some(password),
    };
    let response = api::validate_password(&req).unwrap_or_else(|e| {
        debug!("Rejected before validation: {e}");
        ValidationResponse::error(&e)
    });

    let report = CheckReport::new(response);
    report.render(mode);

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Read one line from stdin, dropping only the line terminator
fn read_password_line() -> anyhow::Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
