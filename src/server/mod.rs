// Server module entry
// Listener construction, accept loop, connection handling, shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword)
#[path = "loop.rs"]
pub mod accept_loop;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::logger;

pub use listener::bind_listener;

/// Bind the listener and serve until a shutdown signal arrives
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let listener = bind_listener(addr)?;

    let state = Arc::new(AppState::new(config));
    let active_connections = Arc::new(AtomicUsize::new(0));

    let signals = Arc::new(signal::SignalHandler::new());
    signal::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&addr, &state.config);

    accept_loop::run_accept_loop(
        listener,
        state,
        active_connections,
        Arc::clone(&signals.shutdown),
    )
    .await
}
