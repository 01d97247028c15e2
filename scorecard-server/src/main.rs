use anyhow::Result;
use scorecard::Config;
use scorecard_server::run_server_async;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_or_default()?;
    run_server_async(config).await
}
