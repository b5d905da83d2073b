use clap::Parser;
use log::info;
use server::routes::{self, AppState};
use shared::{DEFAULT_MAX_PLAYERS, GAME_SERVER_ADDR};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the endpoint to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8081")]
    port: u16,

    /// Game server address to probe
    #[arg(short, long, default_value = GAME_SERVER_ADDR)]
    target: String,

    /// Player cap reported to clients
    #[arg(long, default_value_t = DEFAULT_MAX_PLAYERS)]
    max_players: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let app = routes::router(AppState {
        target: args.target.clone(),
        max_players: args.max_players,
    });

    info!("Status endpoint listening on {}", addr);
    info!("Probing game server at {}", args.target);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
