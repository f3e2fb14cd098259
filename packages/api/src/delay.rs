//! Platform-aware sleep used to simulate round-trip latency.

use std::time::Duration;

pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
