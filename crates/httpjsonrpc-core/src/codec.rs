//! Client codec contract driven by an RPC framework

use crate::{CodecResult, RequestHeader, ResponseHeader};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Transport codec used by a request/response RPC client framework
///
/// The framework submits calls through [`write_request`](Self::write_request),
/// possibly from many tasks at once, and drains completed replies with a single
/// sequential reader that calls [`read_response_header`](Self::read_response_header)
/// followed by [`read_response_body`](Self::read_response_body).
///
/// Replies arrive in completion order, not submission order. The framework matches
/// them to pending calls by `seq`.
///
/// # Example
///
/// ```ignore
/// use httpjsonrpc_core::prelude::*;
///
/// async fn call(codec: &mut impl ClientCodec) -> CodecResult<i64> {
///     codec.write_request(&RequestHeader::new("Arith.Multiply", 1), &(7, 6)).await?;
///
///     let header = codec.read_response_header().await?;
///     if let Some(err) = header.remote_error() {
///         codec.read_response_body::<()>(None).await?;
///         return Err(err);
///     }
///     let mut product = 0i64;
///     codec.read_response_body(Some(&mut product)).await?;
///     Ok(product)
/// }
/// ```
#[async_trait]
pub trait ClientCodec: Send + Sync {
    /// Submit one call, performing the network exchange before returning
    ///
    /// Only serialization, transport, protocol, and decode failures are
    /// reported here. A successful return means exactly one reply will become
    /// available to the reader unless the codec is closed first.
    async fn write_request<P>(&self, header: &RequestHeader, params: &P) -> CodecResult<()>
    where
        P: Serialize + Sync + ?Sized;

    /// Wait for the next completed reply and return its header
    async fn read_response_header(&mut self) -> CodecResult<ResponseHeader>;

    /// Decode the result of the reply returned by the last header read
    ///
    /// Passing `None` discards the body.
    async fn read_response_body<T>(&mut self, destination: Option<&mut T>) -> CodecResult<()>
    where
        T: DeserializeOwned + Send;

    /// Release resources and unblock pending internal work
    ///
    /// Safe to call any number of times, from any number of tasks.
    fn close(&self) -> CodecResult<()>;
}
