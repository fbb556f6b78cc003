//! Play fog-of-war chess against the engine over stdin/stdout.

mod driver;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fog_session::SessionConfig;
use tracing_subscriber::EnvFilter;

use driver::{Driver, HELP};

fn main() -> Result<()> {
    // stdout carries the board; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut driver = Driver::new(SessionConfig::default());
    writeln!(stdout, "{HELP}\n")?;
    writeln!(stdout, "{}", driver.handle("show").text)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let reply = driver.handle(line.trim());
        if reply.quit {
            break;
        }
        if !reply.text.is_empty() {
            writeln!(stdout, "{}", reply.text)?;
        }
        stdout.flush()?;
    }
    Ok(())
}
