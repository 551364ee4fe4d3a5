//! HTTP API server command

use std::time::{Duration, Instant};

use tiny_http::Server;

use lifeflow::adapters::DataFileWatcher;

use super::{Context, assistant};
use crate::server::tiny_http::handle_api_request;

/// How long one accept wait blocks before the loop checks for external writes
const ACCEPT_TIMEOUT: Duration = Duration::from_millis(250);

/// Serve the JSON API until interrupted
pub fn serve(host: Option<String>, port: Option<u16>, ctx: &Context) -> anyhow::Result<()> {
    let (config, mut coordinator) = ctx.open()?;
    let backend = assistant(&config);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    let watcher = match DataFileWatcher::watch(&config.storage.data_file) {
        Ok(w) => Some(w),
        Err(err) => {
            log::warn!("File watching unavailable, polling only: {err:#}");
            None
        },
    };
    let poll_interval = Duration::from_millis(config.server.poll_interval_ms);

    println!("Serving lifeflow API on http://{addr}/api/v1");
    println!("Data file: {}", config.storage.data_file.display());
    println!();
    println!("Press Ctrl+C to stop");

    let mut last_poll = Instant::now();
    loop {
        if let Some(mut request) = server.recv_timeout(ACCEPT_TIMEOUT)? {
            let response = handle_api_request(&mut request, &mut coordinator, backend.as_ref());
            if let Err(err) = request.respond(response) {
                log::warn!("Failed to send response: {err}");
            }
        }

        let woke = watcher.as_ref().is_some_and(DataFileWatcher::take_changed);
        if woke || last_poll.elapsed() >= poll_interval {
            last_poll = Instant::now();
            match coordinator.sync_external() {
                Ok(changed) if !changed.is_empty() => {
                    log::debug!("Revision {} after sync", coordinator.revision());
                },
                Ok(_) => {},
                Err(err) => log::warn!("External sync failed: {err:#}"),
            }
        }
    }
}
