use clap::Parser;
use tracing_subscriber::EnvFilter;

use lever_dashboard::context::Context;
use lever_dashboard::server::run_server;
use lever_types::config::Config;

#[derive(Parser)]
#[command(author, version, about = "HTTP API for the leveraged lending dashboard")]
struct Cli {
    #[arg(long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let ctx = Context::new(config).await?;
    run_server(&cli.ip, cli.port, ctx).await?;
    Ok(())
}
