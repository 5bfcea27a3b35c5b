use std::error::Error;

use tokio::net::TcpListener;

use greeting_api::{app, args::Args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::load()?;
    env_logger::init();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}");

    axum::serve(listener, app()).await?;

    Ok(())
}
