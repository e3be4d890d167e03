use clap::Parser;
use gridexplorer::{App, Session, SessionConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "gridexplorer", about = "Walk through grid rooms until you find the last portal")]
struct Args {
    /// JSON session config listing the rooms to play
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of <name>.txt room definitions
    #[arg(long)]
    room_dir: Option<PathBuf>,

    /// Room to play (repeat to play several, in order)
    #[arg(long = "room")]
    rooms: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match args.config.as_deref().map(SessionConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(error) => {
            tracing::error!(%error, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    if args.room_dir.is_some() {
        config.room_dir = args.room_dir;
    }
    if !args.rooms.is_empty() {
        config.rooms = args.rooms;
    }

    let session = match Session::new(config.rooms.clone(), config.room_source()) {
        Ok(session) => session,
        Err(error) => {
            tracing::error!(%error, "failed to start");
            return ExitCode::FAILURE;
        }
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(error) = App::new(session).run(stdin.lock(), stdout.lock()) {
        tracing::error!(%error, "terminal i/o failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
