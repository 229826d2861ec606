//! Async wrapper around [`JreitSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Dataset loading is blocking I/O, so loading and queries run on the
//! blocking thread pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use jreit_sdk::AsyncJreitSdk;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncJreitSdk::builder()
//!         .url("https://example.com/buildings.json")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let count = sdk.run(|s| Ok(s.buildings().count())).await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{JreitError, Result};
use crate::{DataSource, JreitSdk, JreitSdkBuilder, SearchConfig};

fn join_error(e: tokio::task::JoinError) -> JreitError {
    JreitError::InvalidArgument(format!("Task join error: {e}"))
}

fn poisoned() -> JreitError {
    JreitError::InvalidArgument("SDK lock poisoned".into())
}

// ---------------------------------------------------------------------------
// AsyncJreitSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncJreitSdk`] instance.
///
/// Accepts the same settings as [`JreitSdkBuilder`].
#[derive(Default)]
pub struct AsyncJreitSdkBuilder {
    inner: JreitSdkBuilder,
}

impl AsyncJreitSdkBuilder {
    pub fn source(mut self, source: DataSource) -> Self {
        self.inner = self.inner.source(source);
        self
    }

    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.path(path);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.url(url);
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.inner = self.inner.offline(offline);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn search_config(mut self, config: SearchConfig) -> Self {
        self.inner = self.inner.search_config(config);
        self
    }

    /// Build the async SDK, loading the dataset on the blocking pool.
    pub async fn build(self) -> Result<AsyncJreitSdk> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncJreitSdk {
                inner: Arc::new(RwLock::new(sdk)),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncJreitSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`JreitSdk`].
///
/// Queries share a read lock; [`reload()`](Self::reload) takes the write
/// lock while it swaps the dataset.
#[derive(Clone)]
pub struct AsyncJreitSdk {
    inner: Arc<RwLock<JreitSdk>>,
}

impl AsyncJreitSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncJreitSdkBuilder {
        AsyncJreitSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&JreitSdk` and returns a `Result<T>`.
    /// Borrowed query results must be turned into owned values before
    /// they leave the closure.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use jreit_sdk::AsyncJreitSdk;
    /// # async fn example() -> jreit_sdk::Result<()> {
    /// # let sdk = AsyncJreitSdk::builder().path("buildings.json").build().await?;
    /// let ids = sdk.run(|s| {
    ///     let found = s.search().text("tokyo")?;
    ///     Ok(found.ids().into_iter().map(String::from).collect::<Vec<_>>())
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&JreitSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk.read().map_err(|_| poisoned())?;
            f(&guard)
        })
        .await
        .map_err(join_error)?
    }

    /// Number of buildings in the current dataset.
    pub async fn count(&self) -> Result<usize> {
        self.run(|s| Ok(s.buildings().count())).await
    }

    /// Reload the data source. See [`JreitSdk::reload`].
    pub async fn reload(&self) -> Result<usize> {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk.write().map_err(|_| poisoned())?;
            guard.reload()
        })
        .await
        .map_err(join_error)?
    }
}
