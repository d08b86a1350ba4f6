//! Startup settings.
//!
//! Resolution order, highest first:
//! 1. command-line flag
//! 2. environment variable (`DOJOD_*`)
//! 3. TOML file given by `--config` / `DOJOD_CONFIG`
//! 4. built-in default

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::session::DEFAULT_SOCIAL_EMAIL;

#[derive(Parser, Debug, Default)]
#[command(name = "dojod")]
#[command(about = "Attendance sidecar for a martial-arts school")]
#[command(version)]
pub struct Args {
    /// Optional TOML settings file
    #[arg(long, env = "DOJOD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report not_found for updates/deletes of unknown ids
    #[arg(long, env = "DOJOD_STRICT", num_args = 0..=1, default_missing_value = "true")]
    pub strict: Option<bool>,

    /// Reject directory changes outside an admin session
    #[arg(long, env = "DOJOD_ENFORCE_ROLES", num_args = 0..=1, default_missing_value = "true")]
    pub enforce_roles: Option<bool>,

    /// Load the built-in sample roster at startup
    #[arg(long, env = "DOJOD_SEED", num_args = 0..=1, default_missing_value = "true")]
    pub seed: Option<bool>,

    /// External identity returned by the stubbed social login
    #[arg(long, env = "DOJOD_SOCIAL_EMAIL")]
    pub social_login_email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
struct FileConfig {
    strict: Option<bool>,
    enforce_roles: Option<bool>,
    seed: Option<bool>,
    social_login_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub strict: bool,
    pub enforce_roles: bool,
    pub seed: bool,
    pub social_login_email: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            enforce_roles: false,
            seed: true,
            social_login_email: DEFAULT_SOCIAL_EMAIL.to_string(),
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.to_string_lossy()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.to_string_lossy()))
}

impl Settings {
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let file = match args.config.as_deref() {
            Some(p) => load_file(p)?,
            None => FileConfig::default(),
        };
        let defaults = Settings::default();
        Ok(Self {
            strict: args.strict.or(file.strict).unwrap_or(defaults.strict),
            enforce_roles: args
                .enforce_roles
                .or(file.enforce_roles)
                .unwrap_or(defaults.enforce_roles),
            seed: args.seed.or(file.seed).unwrap_or(defaults.seed),
            social_login_email: args
                .social_login_email
                .clone()
                .or(file.social_login_email)
                .unwrap_or(defaults.social_login_email),
        })
    }
}
