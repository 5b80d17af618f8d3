//! CLI argument definitions
//!
//! The topic plus the options that shape where and whether the report is written.

use std::path::PathBuf;

use clap::Parser;

use crate::consts::DEFAULT_BASE_DIR;
use crate::core::Invocation;

#[derive(Debug, Parser)]
#[command(name = "notegen")]
#[command(about = "Create a dated markdown investigation report from a topic", version)]
pub(crate) struct Cli {
    /// Topic text for the report title and slug
    pub(crate) topic: String,

    /// Output directory, relative to the current working directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub(crate) base_dir: PathBuf,

    /// Override date (YYYY-MM-DD); defaults to today's local date
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub(crate) date: Option<String>,

    /// Print the target path without writing a file
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Output path, date and slug as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    pub(crate) fn invocation(&self) -> Invocation {
        Invocation {
            topic: self.topic.clone(),
            base_dir: self.base_dir.clone(),
            date: self.date.clone(),
            dry_run: self.dry_run,
        }
    }
}
