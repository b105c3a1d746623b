// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Everything about *what* to monitor lives in the config file; the flags
// only choose the file and how to run.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

#[derive(Parser, Debug)]
#[command(
    name = "site-sentinel",
    version,
    about = "Watch the files linked from a set of websites and email a diff when they change",
    long_about = "site-sentinel crawls every configured website, follows its internal links, \
                  and keeps a snapshot of every file it finds. When a file's contents change \
                  between two polls it emails a line-by-line diff to the configured recipient."
)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, short, default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Run a single poll cycle, print its summary and exit
    ///
    /// Exit code is 0 when everything was fetched and delivered, 1 otherwise.
    /// A single cycle never reports changes; it records the baseline.
    #[arg(long)]
    pub once: bool,

    /// With --once, print the summary as JSON instead of a table
    #[arg(long, requires = "once")]
    pub json: bool,

    /// Log notifications instead of emailing them
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (overrides the SENTINEL_LOG environment variable)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
