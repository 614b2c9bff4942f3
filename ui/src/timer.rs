use std::time::Duration;

/// Resolves after `duration` on the browser's timer queue.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Timers only run in the browser. During server rendering the task just parks.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(_duration: Duration) {
    futures::future::pending::<()>().await;
}
