//! HTTP transport codec

use async_trait::async_trait;
use httpjsonrpc_core::{
    ClientCodec, CodecConfig, CodecError, CodecResult, RequestHeader, ResponseHeader,
};
use httpjsonrpc_runtime::{
    CancelHandle, DeliveryTracker, RendezvousReceiver, RendezvousSender, rendezvous,
};
use httpjsonrpc_transport::{JsonCodec, ReceivedResponse, ResponseEnvelope};
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client codec carrying JSON envelopes over HTTP POST
///
/// Cloning is cheap. Clones share the endpoint, HTTP client, reply hand-off, and
/// close state, so writers can run on clones while one handle reads. Each handle
/// keeps its own slot for the reply between a header read and its body read.
pub struct HttpCodec {
    inner: Arc<Inner>,
    current: Option<ResponseEnvelope>,
}

struct Inner {
    endpoint: String,
    client: reqwest::Client,
    json: JsonCodec,
    shared: OnceCell<Shared>,
}

/// Hand-off state, created on first use by any handle
struct Shared {
    sender: RendezvousSender<ReceivedResponse>,
    receiver: tokio::sync::Mutex<RendezvousReceiver<ReceivedResponse>>,
    cancel: CancelHandle,
    deliveries: DeliveryTracker,
}

impl Shared {
    fn new() -> Self {
        let (sender, receiver) = rendezvous();
        Self {
            sender,
            receiver: tokio::sync::Mutex::new(receiver),
            cancel: CancelHandle::new(),
            deliveries: DeliveryTracker::new(),
        }
    }
}

impl Inner {
    fn shared(&self) -> &Shared {
        self.shared.get_or_init(Shared::new)
    }
}

impl HttpCodec {
    /// Create a codec for `endpoint` with a default HTTP client
    pub fn new(endpoint: impl Into<String>) -> CodecResult<Self> {
        Self::from_config(&CodecConfig::new(endpoint))
    }

    /// Create a codec from configuration, building the HTTP client from its transport settings
    pub fn from_config(config: &CodecConfig) -> CodecResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.pool_idle_timeout() {
            builder = builder.pool_idle_timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| CodecError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(config.endpoint.trim(), client))
    }

    /// Create a codec around an externally configured HTTP client
    ///
    /// Timeouts, TLS, proxies, and connection reuse are whatever `client` was built with.
    /// The endpoint is not checked here; a URL the client cannot use fails each
    /// write with [`CodecError::Config`].
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            inner: Arc::new(Inner {
                endpoint: endpoint.into(),
                client,
                json: JsonCodec::new(),
                shared: OnceCell::new(),
            }),
            current: None,
        }
    }

    /// URL every request is POSTed to
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Whether [`close`](ClientCodec::close) has been called on any handle
    pub fn is_closed(&self) -> bool {
        self.inner
            .shared
            .get()
            .is_some_and(|shared| shared.cancel.is_triggered())
    }

    /// Number of decoded replies whose delivery task is still running
    pub fn pending_deliveries(&self) -> usize {
        self.inner
            .shared
            .get()
            .map_or(0, |shared| shared.deliveries.pending())
    }

    /// POST one request body and decode the reply envelope
    async fn round_trip(
        &self,
        header: &RequestHeader,
        body: Vec<u8>,
    ) -> CodecResult<ResponseEnvelope> {
        let inner = &self.inner;

        let response = inner
            .client
            .post(&inner.endpoint)
            .header(reqwest::header::CONTENT_TYPE, inner.json.content_type())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    tracing::warn!(
                        method = %header.service_method,
                        seq = header.seq,
                        error = %e,
                        "request could not be built"
                    );
                    return CodecError::Config(e.to_string());
                }
                tracing::warn!(
                    method = %header.service_method,
                    seq = header.seq,
                    error = %e,
                    "transport failure"
                );
                CodecError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                method = %header.service_method,
                seq = header.seq,
                %status,
                "request rejected"
            );
            return Err(CodecError::Protocol {
                status: status.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CodecError::Transport(e.to_string()))?;

        inner.json.decode_response(&bytes).inspect_err(|e| {
            tracing::warn!(
                method = %header.service_method,
                seq = header.seq,
                error = %e,
                "undecodable response"
            );
        })
    }
}

impl Clone for HttpCodec {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            current: None,
        }
    }
}

impl std::fmt::Debug for HttpCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCodec")
            .field("endpoint", &self.inner.endpoint)
            .field("closed", &self.is_closed())
            .field("pending_deliveries", &self.pending_deliveries())
            .finish()
    }
}

#[async_trait]
impl ClientCodec for HttpCodec {
    async fn write_request<P>(&self, header: &RequestHeader, params: &P) -> CodecResult<()>
    where
        P: Serialize + Sync + ?Sized,
    {
        let body = self
            .inner
            .json
            .encode_request(&header.service_method, header.seq, params)?;

        tracing::debug!(
            method = %header.service_method,
            seq = header.seq,
            endpoint = %self.inner.endpoint,
            "sending request"
        );
        let response = self.round_trip(header, body).await?;

        let shared = self.inner.shared();
        shared.deliveries.spawn(
            shared.sender.clone(),
            shared.cancel.signal(),
            ReceivedResponse::new(header.service_method.clone(), response),
        );
        Ok(())
    }

    async fn read_response_header(&mut self) -> CodecResult<ResponseHeader> {
        self.current = None;
        let shared = self.inner.shared();
        let mut cancel = shared.cancel.signal();

        let received = {
            let mut receiver = shared.receiver.lock().await;
            tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                received = receiver.recv() => received,
            }
        };
        let ReceivedResponse {
            service_method,
            response,
        } = received.ok_or(CodecError::Closed)?;

        let mut header = ResponseHeader::new(service_method, response.id);
        if response.is_failure() {
            match response.server_error().into_message() {
                Ok(message) => header.error = Some(message),
                Err(error) => {
                    return Err(CodecError::InvalidErrorShape {
                        service_method: header.service_method,
                        seq: header.seq,
                        error,
                    });
                }
            }
        }

        tracing::trace!(method = %header.service_method, seq = header.seq, "reply received");
        self.current = Some(response);
        Ok(header)
    }

    async fn read_response_body<T>(&mut self, destination: Option<&mut T>) -> CodecResult<()>
    where
        T: DeserializeOwned + Send,
    {
        let current = self.current.take();
        let Some(destination) = destination else {
            return Ok(());
        };
        let response = current.ok_or(CodecError::NoResponse)?;
        *destination = response.result_as()?;
        Ok(())
    }

    fn close(&self) -> CodecResult<()> {
        let shared = self.inner.shared();
        if shared.cancel.trigger() {
            tracing::debug!(
                endpoint = %self.inner.endpoint,
                pending = shared.deliveries.pending(),
                spawned = shared.deliveries.spawned(),
                "codec closed"
            );
        }
        Ok(())
    }
}
