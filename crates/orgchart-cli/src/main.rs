//! OrgChart CLI
//!
//! Command-line interface for inspecting org charts and replaying moves

use clap::{Parser, Subcommand};
use orgchart_core::logging_facility::{self, Profile};
use orgchart_core_types::{RequestContext, TraceId};

mod chart_io;
mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "orgchart")]
#[command(about = "OrgChart - hierarchy inspection and reorganisation", long_about = None)]
struct Cli {
    /// Logging profile (development, production); RUST_LOG overrides the filter
    #[arg(long, global = true, default_value = "production")]
    log_profile: Profile,

    /// Trace id of a wider workflow this run belongs to, echoed on errors
    #[arg(long, global = true)]
    trace_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a chart as an indented outline
    Show(commands::show::ShowArgs),
    /// Replay a script of move/undo/redo commands against a chart
    Apply(commands::apply::ApplyArgs),
    /// Run the built-in move/undo/redo walkthrough
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let mut ctx = RequestContext::new();
    if let Some(trace_id) = cli.trace_id {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }
    tracing::debug!(
        request_id = %ctx.request_id,
        trace_id = ?ctx.trace_id.as_ref().map(|t| t.as_str()),
        "cli invocation"
    );

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
        Commands::Demo(args) => commands::demo::execute(args),
    };

    if let Err(e) = result {
        let mut err = e.with_request_id(ctx.request_id);
        if let Some(trace_id) = ctx.trace_id {
            err = err.with_trace_id(trace_id);
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
