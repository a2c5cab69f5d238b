//! Submission transport abstract Trait

use async_trait::async_trait;

use crate::error::EditorResult;
use crate::types::{ActionEncoding, ActionRequest, TransportResponse};

/// Posts an [`ActionRequest`] to the server and hands back the raw response.
///
/// A server-reported failure is a successful exchange with a status text other
/// than `"OK"`. `Err` is reserved for the exchange itself failing; no
/// implementation is expected to retry.
///
/// Implementations:
/// - `HttpTransport` (reqwest, native and wasm32)
#[async_trait(?Send)]
pub trait Transport {
    /// Submit `request` to `endpoint`, appending the discriminator per `encoding`.
    async fn submit(
        &self,
        endpoint: &str,
        request: &ActionRequest,
        encoding: ActionEncoding,
    ) -> EditorResult<TransportResponse>;
}
