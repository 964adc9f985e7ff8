//! Timer glue shared by the debounced resize re-render and the live-update
//! interval. Web builds ride on `gloo-timers`; native builds use tokio.

/// Resize events must settle for this long before a re-render fires.
pub const RESIZE_QUIET_MS: u64 = 250;

/// Cadence of the simulated background update.
pub const LIVE_UPDATE_INTERVAL_MS: u64 = 30_000;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_LINGER_MS: u64 = 3_000;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
