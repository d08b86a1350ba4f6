use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use dojod::config::{Args, Settings};
use dojod::{ipc, App};
use serde_json::json;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dojod=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::resolve(&args).context("failed to resolve settings")?;
    info!(
        strict = settings.strict,
        enforce_roles = settings.enforce_roles,
        seed = settings.seed,
        "starting dojod"
    );

    let mut app = App::from_settings(&settings);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to read stdin");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id.
                let _ = writeln!(
                    stdout,
                    "{}",
                    json!({
                        "ok": false,
                        "error": { "code": "bad_json", "message": e.to_string() }
                    })
                );
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut app, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    info!("stdin closed, exiting");
    Ok(())
}
