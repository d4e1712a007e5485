use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use curetrackr_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log)?;

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let addr = SocketAddr::new(args.server.host.parse()?, args.server.port);
    info!("CureTrackr listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
