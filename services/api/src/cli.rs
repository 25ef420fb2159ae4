use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use housing_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Student Housing Desk",
    about = "Run and demonstrate the student housing application portal from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the portal API (the default when no command is given)
    Serve(ServeArgs),
    /// Walk the room inventory and application review flow end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind address override for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Bind port override for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload a starter room inventory at boot
    #[arg(long)]
    pub(crate) seed: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Serve(args)) => server::run(args).await,
        Some(Command::Demo(args)) => run_demo(args),
        None => server::run(ServeArgs::default()).await,
    }
}
