//! Server entry point.

use actix_web::{middleware, App, HttpServer};
use clap::Parser;
use log::info;
use std::io;
use zalgo_core::{core_version, init_logging};
use zalgo_server::{configure, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = ServerConfig::parse();
    init_logging(config.effective_log_level(), config.log_dir.as_deref())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let (host, port) = config.bind_addr();
    info!(
        "event=server_start module=server status=start host={} port={} max_body_bytes={} version={}",
        host,
        port,
        config.max_body_bytes,
        core_version()
    );

    let max_body_bytes = config.max_body_bytes;
    let result = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure(max_body_bytes))
    })
    .bind(config.bind_addr())?
    .run()
    .await;

    info!(
        "event=server_stop module=server status={}",
        if result.is_ok() { "ok" } else { "error" }
    );
    result
}
