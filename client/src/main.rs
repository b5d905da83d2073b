use clap::Parser;
use client::app::App;
use client::status::StatusPoller;
use client::storage;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Status endpoint to poll
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:8081/status")]
    status_url: String,

    /// Where the "gate passed" flag is saved
    #[arg(long, default_value = storage::STATE_FILE)]
    state_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Starting site...");
    info!("Status endpoint: {}", args.status_url);

    let status_rx = StatusPoller::new(&args.status_url)?.spawn();

    let mut app = App::new(status_rx, args.state_file);
    app.run().await?;

    Ok(())
}
