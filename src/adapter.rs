//! Answers Store Adapter
//!
//! Async boundary in front of the app store. The views read and write
//! answers only through these operations.

use crate::models::AnswersSnapshot;
use crate::store::{store_read_answers, store_write_answers, AppStore};

/// Read the current snapshot
pub fn get_answers(store: &AppStore) -> AnswersSnapshot {
    store_read_answers(store)
}

/// Replace the stored answers with a submitted payload.
///
/// Runs with simulated transport latency so the in-flight submit state is
/// observable in the UI.
pub async fn update_answers(store: &AppStore, payload: AnswersSnapshot) -> Result<(), String> {
    transport_delay().await;
    store_write_answers(store, payload);
    Ok(())
}

/// Restore the default, empty answers
pub async fn reset_answers(store: &AppStore) -> Result<(), String> {
    transport_delay().await;
    store_write_answers(store, AnswersSnapshot::default());
    Ok(())
}

async fn transport_delay() {
    #[cfg(target_arch = "wasm32")]
    {
        const UPDATE_LATENCY_MS: u32 = 600;
        gloo_timers::future::TimeoutFuture::new(UPDATE_LATENCY_MS).await;
    }
}
