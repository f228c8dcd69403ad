use crate::client::{run_admission_submit, AdmissionSubmitArgs};
use crate::demo::{run_calendar, run_demo, CalendarArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hsga_portal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HSGA Portal",
    about = "Run and exercise the HSGA Telangana membership portal from the command line",
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
    /// Print a month of the organization calendar
    Calendar(CalendarArgs),
    /// Student admission forms
    Admission {
        #[command(subcommand)]
        command: AdmissionCommand,
    },
    /// Run an in-process walkthrough of registration, review, admission and calendar
    Demo,
}

#[derive(Subcommand, Debug)]
enum AdmissionCommand {
    /// Validate an admission form and submit it to a running portal
    Submit(AdmissionSubmitArgs),
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
        Command::Calendar(args) => run_calendar(args),
        Command::Admission {
            command: AdmissionCommand::Submit(args),
        } => run_admission_submit(args).await,
        Command::Demo => run_demo().await,
    }
}
