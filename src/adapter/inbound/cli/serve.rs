//! Handler for the `serve` command.

use crate::adapter::inbound::web;
use crate::error::Result;
use crate::infrastructure::config::service::ServerConfig;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_lookup_service;

use super::output;

/// Execute `serve [--bind ADDR]`.
pub async fn execute(config: &Config, bind: Option<String>) -> Result<()> {
    let server = match bind {
        Some(bind) => ServerConfig { bind },
        None => config.server.clone(),
    };
    let addr = server.socket_addr()?;
    let service = build_lookup_service(config)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", output::highlight(format!("http://{addr}")));
    output::hint("press Ctrl-C to stop");

    web::serve(addr, service).await
}
