//! Generic fetch lifecycle wrapper around a single JSON endpoint.
//!
//! [`DataFetcher`] owns transport details only: one GET request, HTTP status
//! mapping, and JSON decoding into the caller's type. Construction performs
//! no I/O; the owner triggers each attempt explicitly with
//! [`DataFetcher::fetch`].
//!
//! Overlapping `fetch` calls on one fetcher race; the last-initiated call
//! wins. Each attempt takes a sequence ticket, and an attempt that is stale
//! by the time its response settles discards the outcome without touching
//! the shared state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

/// Failures a fetch attempt can settle with.
///
/// Every variant is terminal for its attempt: there is no retry, and the
/// error is stored in [`FetchState::error`] as well as reported to the
/// diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code carried by the response.
        status: u16,
    },
    /// The request failed below the HTTP layer.
    #[error("request failed: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
    /// The body arrived but did not decode as the expected type.
    #[error("invalid response body: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

/// Observable state of one fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// Last successfully decoded payload. A later failed attempt leaves the
    /// previous value in place.
    pub data: Option<T>,
    /// Whether an attempt is currently in flight.
    pub loading: bool,
    /// Error the latest settled attempt failed with, if any.
    pub error: Option<FetchError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Fetches one URL and exposes `{data, loading, error}` snapshots.
///
/// Cloning yields another handle over the same state, mirroring how several
/// observers may watch a single in-flight request.
#[derive(Debug, Clone)]
pub struct DataFetcher<T> {
    client: Client,
    url: Url,
    state: Arc<Mutex<FetchState<T>>>,
    seq: Arc<AtomicU64>,
}

impl<T> DataFetcher<T>
where
    T: DeserializeOwned + Clone,
{
    /// Build a fetcher with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(url: Url) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?, url))
    }

    /// Build a fetcher sharing an existing client.
    #[must_use]
    pub fn with_client(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            state: Arc::new(Mutex::new(FetchState::default())),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Target URL of this fetcher.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run one fetch attempt to completion.
    ///
    /// Sets `loading` and clears `error` up front. When the attempt settles,
    /// `loading` drops and either `data` (success) or `error` (failure) is
    /// written — unless a newer attempt was initiated meanwhile, in which
    /// case the outcome is discarded and the newer attempt keeps ownership
    /// of the state.
    pub async fn fetch(&self) {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock_state();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.perform().await;

        let mut state = self.lock_state();
        if self.seq.load(Ordering::SeqCst) != ticket {
            // A newer attempt started while this one was in flight.
            return;
        }
        state.loading = false;
        match outcome {
            Ok(value) => {
                state.data = Some(value);
            }
            Err(err) => {
                error!(url = %self.url, error = %err, "fetch failed");
                state.error = Some(err);
            }
        }
    }

    /// Copy of the current lifecycle state.
    #[must_use]
    pub fn snapshot(&self) -> FetchState<T> {
        self.lock_state().clone()
    }

    /// Last decoded payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.lock_state().data.clone()
    }

    /// Whether an attempt is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Error from the latest settled attempt, if any.
    #[must_use]
    pub fn error(&self) -> Option<FetchError> {
        self.lock_state().error.clone()
    }

    // The guard never lives across an await; a poisoned lock only means a
    // panicking observer, so the state itself is still coherent.
    fn lock_state(&self) -> MutexGuard<'_, FetchState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn perform(&self) -> Result<T, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&body).map_err(|err| FetchError::Decode {
            message: err.to_string(),
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    FetchError::Transport {
        message: error.to_string(),
    }
}
