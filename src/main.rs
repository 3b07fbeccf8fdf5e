/*!
 * Command-line interface for dirclip
 */

use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use dirclip::clipboard::SystemClipboard;
use dirclip::config::{Args, Config};
use dirclip::report::summary_table;
use dirclip::reporter::{DirectoryReporter, RunOutcome};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);

    // Logs go to stderr so stdout carries only messages and the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    // Only draw the spinner for an interactive stderr
    let progress = if io::stderr().is_terminal() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_prefix("Scanning");
    progress.enable_steady_tick(Duration::from_millis(100));

    let reporter = DirectoryReporter::new(config.clone(), SystemClipboard)
        .with_progress(Arc::new(progress.clone()));

    let mut stdout = io::stdout().lock();
    let outcome = reporter.run(&mut stdout)?;
    progress.finish_and_clear();

    if config.summary {
        if let RunOutcome::Delivered { summary, .. } = outcome {
            eprintln!("\n{}", summary_table(&summary));
        }
    }

    Ok(())
}
