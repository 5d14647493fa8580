//! Shared utility functions.

pub(crate) mod serialization;

use crate::error::ProviderError;
use std::future::Future;
use std::time::Duration;

/// Wraps a provider call with an optional timeout.
/// If `timeout` is `None`, the future runs without a timeout.
pub(crate) async fn with_optional_timeout<F, T>(
    future: F,
    timeout: Option<Duration>,
) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    match timeout {
        Some(duration) => tokio::time::timeout(duration, future)
            .await
            .map_err(|_| ProviderError::unreachable(format!("timed out after {:?}", duration)))?,
        None => future.await,
    }
}
