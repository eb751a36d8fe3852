use dotenv::dotenv;
use tallysheet::commands::Cli;
use tallysheet::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may itself enable debug mode, so load it before the first check
    dotenv().ok();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tallysheet=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu().await
}
