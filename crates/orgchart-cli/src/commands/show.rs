//! Show command
//!
//! Usage: orgchart show <CHART>

use clap::Args;
use orgchart_core::errors::ExError;
use std::path::PathBuf;

use crate::{chart_io, render};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Chart file (JSON, or YAML with a .yaml/.yml extension)
    pub chart: PathBuf,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), ExError> {
    let chart = chart_io::load_chart(&args.chart)?;
    print!("{}", render::render_outline(&chart));
    Ok(())
}
