use crate::demo::{run_demo, run_palette_guide, DemoArgs, PaletteGuideArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use stylist_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Agentic Style Orchestrator",
    about = "Demonstrate and run the chromatic analysis service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the season reference palettes
    Palette {
        #[command(subcommand)]
        command: PaletteCommand,
    },
    /// Run an end-to-end CLI demo covering the chromatic analysis workflow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PaletteCommand {
    /// Print the reference guide for one season
    Guide(PaletteGuideArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Palette {
            command: PaletteCommand::Guide(args),
        } => run_palette_guide(args),
        Command::Demo(args) => run_demo(args),
    }
}
