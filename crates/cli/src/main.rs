use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use markdown_adapter::MarkdownRosterRenderer;
use roster_core::application::EmployeeRosterView;
use roster_core::domain::{Locale, RaiseFactor, RosterAction};
use roster_core::ports::RosterRenderer;
use roster_core::seed::SeedRecordSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Replays roster interactions over the seeded employee list and prints the resulting table
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Sortable, editable employee roster with grouping by job function")]
struct Cli {
    /// Locale used for currency and dates (pt-BR or en-US)
    #[arg(long, env = "ROSTER_LOCALE", default_value = "pt-BR")]
    locale: Locale,

    /// Percentage applied by the raise actions
    #[arg(long, env = "ROSTER_RAISE_PERCENT", default_value_t = 10.0)]
    raise_percent: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Actions to apply in order: sort:<key>, remove:<id>, raise-all, raise:<id>
    actions: Vec<RosterAction>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let factor = RaiseFactor::from_percent(cli.raise_percent)?;

    let mut view = EmployeeRosterView::new(&SeedRecordSource, cli.locale)
        .map_err(|e| anyhow!("loading employees: {e}"))?
        .with_raise_factor(factor);

    for action in cli.actions {
        tracing::debug!(?action, "applying action");
        view.dispatch(action);
    }

    let snapshot = view.snapshot();
    match cli.format {
        OutputFormat::Markdown => {
            let renderer: Box<dyn RosterRenderer> =
                Box::new(MarkdownRosterRenderer::new(cli.output));
            renderer
                .render(&snapshot)
                .map_err(|e| anyhow!("rendering roster: {e}"))?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot)?;
            match cli.output {
                Some(path) => std::fs::write(&path, json + "\n")?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
