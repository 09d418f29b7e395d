//! Server binary.

use clap::Parser;
use petmoji_server::{app, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "petmoji-server", about = "Pet emoji pack generation API")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
    /// Run pending database migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.migrate {
        let mut conn = petmoji_database::establish_connection()?;
        petmoji_database::run_migrations(&mut conn)?;
        info!("Database migrations applied");
    }

    let state = AppState::from_env()?;
    let router = app(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "petmoji server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
