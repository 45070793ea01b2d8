//! CLI Adapter.

use clap::Parser;
use console::{Term, style};

use crate::adapters::{DialoguerPrompter, SystemProcessRunner, embedded_template_catalog};
use crate::app::AppContext;
use crate::app::commands::scaffold::{self, ScaffoldOutcome};
use crate::app::commands::summary::{self, SummaryView};
use crate::app::config::RuntimeConfig;
use crate::domain::AppError;
use crate::services::ProgressReporter;

#[derive(Parser)]
#[command(name = "create-vitron")]
#[command(disable_version_flag = true)]
#[command(
    about = "Scaffold an Electron + Vite desktop app from the Vitron template",
    long_about = None
)]
struct Cli {
    /// Display the current version of create-vitron
    #[arg(short = 'v', long)]
    version: bool,
    /// Show the getting-started screen with default choices
    #[arg(short = 'd', long, conflicts_with = "version")]
    docs: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    if cli.version {
        println!("create-vitron v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = if cli.docs { run_docs() } else { run_scaffold() };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run_docs() -> Result<(), AppError> {
    let catalog = embedded_template_catalog::load()?;
    let variant = catalog.default_variant();
    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen()?;
    }
    println!("{}", summary::render(variant, &SummaryView::defaults(variant)));
    Ok(())
}

fn run_scaffold() -> Result<(), AppError> {
    let config = RuntimeConfig::from_env()?;
    let catalog = embedded_template_catalog::load()?;
    let term = Term::stdout();

    if config.interactive {
        term.clear_screen()?;
    }
    println!(
        "\n    {} {}\n",
        style("Create Vitron (Electron + Vite)").red().bold(),
        style("by Blade").dim()
    );

    let delay = config.summary_delay;
    let interactive = config.interactive;
    let ctx =
        AppContext::new(DialoguerPrompter::new(), SystemProcessRunner::new(), catalog, config);
    let mut reporter = ProgressReporter::for_terminal(interactive);

    let outcome = match scaffold::execute(&ctx, &mut reporter) {
        Ok(outcome) => outcome,
        Err(err) => {
            reporter.fail();
            return Err(err);
        }
    };

    let ScaffoldOutcome::Completed(done) = outcome else {
        return Ok(());
    };

    println!("\n    {}\n", style("DONE!").green());
    std::thread::sleep(delay);
    if interactive {
        term.clear_screen()?;
    }

    let variant = ctx.catalog().get(&done.request.template)?;
    println!("{}", summary::render(variant, &SummaryView::from_run(variant, &done)));
    Ok(())
}
