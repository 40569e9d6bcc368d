use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
mod scheduler;
mod session;
mod svg;

use cli::Cli;
use session::{Session, drag_script};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let args = cli.slider_args()?;
    let script = if cli.no_drag {
        Vec::new()
    } else {
        drag_script(cli.frames, cli.width, args.value)
    };

    let session = Session::new(args, (cli.width, cli.height), cli.frame_interval())?;
    let report = session.run(cli.frames, &script, &cli.output)?;

    info!(
        rendered = report.rendered.len(),
        skipped = report.skipped,
        changes = report.changes,
        finished_value = ?report.finished_value,
        frame_requests = report.frame_requests,
        output = %cli.output.display(),
        "wave slider session complete"
    );
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "error,wave_slider=info,wave_slider_demo=info";

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
