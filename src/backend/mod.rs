//! Backend thread: owns the REST client and a Tokio runtime.
//!
//! - `handlers`: turns each `BackendAction` into API calls and `GuiEvent`s
//! - `run_backend`: the polling loop driven by the UI's action channel

mod handlers;

pub use handlers::handle_backend_action;

use crate::api::ApiClient;
use crate::protocol::{BackendAction, GuiEvent};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// Run the backend event loop on a tokio runtime.
///
/// Returns when the UI drops its end of the action channel.
pub fn run_backend(
    api_base_url: String,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create Tokio runtime: {}", e);
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    info!(api = %api_base_url, "backend started");

    rt.block_on(async move {
        let mut client = ApiClient::new(&api_base_url);

        loop {
            // Check for actions from the UI (non-blocking)
            match action_rx.try_recv() {
                Ok(action) => {
                    handle_backend_action(action, &mut client, &event_tx).await;
                }
                Err(TryRecvError::Empty) => {
                    // Nothing queued, sleep a bit to avoid busy-looping
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                Err(TryRecvError::Disconnected) => {
                    info!("UI closed the action channel, backend exiting");
                    break;
                }
            }
        }
    });
}
