//! Runtime hosting the tick task.

use anyhow::Context;
use tokio::runtime::Runtime;

pub fn build_tick_runtime() -> anyhow::Result<Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("stopwatch-ticker")
        .enable_time()
        .build()
        .context("failed to build tick runtime")?;
    tracing::debug!("tick runtime started");
    Ok(runtime)
}
