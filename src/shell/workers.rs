use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::modules::requests::use_cases::expire_request::command::ExpireRequest;
use crate::shared::core::primitives::{now_millis, request_stream_id};
use crate::shell::state::AppState;

const SWEEP_BATCH: u64 = 100;

/// Expire every overdue pending request the read model knows about.
/// Returns how many requests were expired.
pub async fn sweep_overdue(state: &AppState, now: i64) -> anyhow::Result<usize> {
    let overdue = state.queries.list_overdue(now, SWEEP_BATCH).await?;
    let mut expired = 0;
    for view in overdue {
        let stream_id = request_stream_id(&view.request_id);
        let command = ExpireRequest {
            request_id: view.request_id,
            expired_at: now,
        };
        match state.expire_handler.handle(&stream_id, command).await {
            Ok(()) => {
                expired += 1;
                state.refresh(&stream_id).await;
            }
            // Answered between the listing and the expiry; the read model catches up.
            Err(e) => {
                warn!(stream_id, error = %e, "could not expire request");
                state.refresh(&stream_id).await;
            }
        }
    }
    Ok(expired)
}

pub fn spawn_expiry_sweeper(state: AppState, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            match sweep_overdue(&state, now_millis()).await {
                Ok(0) => {}
                Ok(count) => info!(count, "expired overdue requests"),
                Err(e) => error!(error = %e, "expiry sweep failed"),
            }
        }
    })
}
