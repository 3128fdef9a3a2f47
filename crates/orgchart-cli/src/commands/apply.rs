//! Apply command
//!
//! Usage: orgchart apply <CHART> --script <FILE> [--output <FILE>] [--keep-going]

use clap::Args;
use orgchart_core::errors::{ExError, ExErrorKind};
use orgchart_core::{apply, HierarchyManager};
use std::path::PathBuf;

use crate::{chart_io, render};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Chart file (JSON, or YAML with a .yaml/.yml extension)
    pub chart: PathBuf,

    /// Command script: a list of {op: move|undo|redo, ...} entries
    #[arg(short, long)]
    pub script: PathBuf,

    /// Write the resulting chart as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report failing commands and continue with the rest
    #[arg(long)]
    pub keep_going: bool,
}

/// Execute apply command
pub fn execute(args: ApplyArgs) -> Result<(), ExError> {
    let chart = chart_io::load_chart(&args.chart)?;
    let script = chart_io::load_script(&args.script)?;
    let mut manager = HierarchyManager::new(chart);

    let total = script.len();
    let mut failed = 0;
    for (index, cmd) in script.into_iter().enumerate() {
        let op = cmd.name();
        match apply(&mut manager, cmd) {
            Ok(outcome) => println!("[{}] {}", index + 1, outcome),
            Err(e) => {
                let err = ExError::from(e).with_op(op);
                if !args.keep_going {
                    let message =
                        format!("command {} of {} failed: {}", index + 1, total, err.message());
                    return Err(err.with_message(message));
                }
                println!("[{}] failed: {}", index + 1, err);
                failed += 1;
            }
        }
    }

    print!("{}", render::render_outline(manager.chart()));

    if let Some(output) = &args.output {
        chart_io::save_chart(output, manager.chart())?;
        println!("✓ Wrote chart to {}", output.display());
    }

    if failed > 0 {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("apply")
            .with_message(format!("{} of {} commands failed", failed, total)));
    }

    Ok(())
}
