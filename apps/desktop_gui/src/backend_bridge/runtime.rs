//! Tokio runtime owned by the GUI process. The UI thread never blocks on it; it only
//! hands out a `Handle` for spawning rating requests.

use anyhow::Context;
use tokio::runtime::{Builder, Handle, Runtime};

pub struct BackendRuntime {
    runtime: Runtime,
}

impl BackendRuntime {
    pub fn start() -> anyhow::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("techblog-backend")
            .enable_all()
            .build()
            .context("failed to build backend runtime")?;
        tracing::info!("backend runtime ready");
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }
}
