use crate::errors::WriteError;
use crate::models::{FilmId, TicketsSoldPatch};
use reqwest::{Method, Url};
use tracing::{debug, error, info};

/// A write mirrored to the remote film store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteRequest {
    PatchTicketsSold { id: FilmId, tickets_sold: u32 },
    Purchase { id: FilmId },
    Delete { id: FilmId },
}

impl WriteRequest {
    pub fn method(&self) -> Method {
        match self {
            WriteRequest::PatchTicketsSold { .. } => Method::PATCH,
            WriteRequest::Purchase { .. } => Method::POST,
            WriteRequest::Delete { .. } => Method::DELETE,
        }
    }

    pub fn film_id(&self) -> &FilmId {
        match self {
            WriteRequest::PatchTicketsSold { id, .. }
            | WriteRequest::Purchase { id }
            | WriteRequest::Delete { id } => id,
        }
    }

    /// Resolves the write against the endpoint base. The film id is pushed as
    /// one percent-encoded path segment, so it can never address another film.
    pub fn url(&self, base: &Url) -> Result<Url, WriteError> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| WriteError::Base(base.to_string()))?;
            segments.pop_if_empty().push(self.film_id().as_str());
            if let WriteRequest::Purchase { .. } = self {
                segments.push("purchase");
            }
        }
        Ok(url)
    }
}

/// Fire-and-forget sink for writes. `submit` returns immediately; the outcome
/// is only logged and never reaches the caller.
pub trait RemoteWriter: Send + Sync {
    fn submit(&self, request: WriteRequest);
}

/// Sends each write on its own task. No retries, no ordering between writes.
#[derive(Clone)]
pub struct HttpWriter {
    client: reqwest::Client,
    base: Url,
}

impl HttpWriter {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    async fn send(client: reqwest::Client, url: Url, request: &WriteRequest) -> Result<reqwest::StatusCode, WriteError> {
        let builder = client.request(request.method(), url);
        let builder = match request {
            WriteRequest::PatchTicketsSold { tickets_sold, .. } => builder.json(&TicketsSoldPatch {
                tickets_sold: *tickets_sold,
            }),
            WriteRequest::Purchase { .. } | WriteRequest::Delete { .. } => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WriteError::Status(status));
        }
        Ok(status)
    }
}

impl RemoteWriter for HttpWriter {
    fn submit(&self, request: WriteRequest) {
        let client = self.client.clone();
        let url = match request.url(&self.base) {
            Ok(url) => url,
            Err(err) => {
                error!(film_id = %request.film_id(), "write dropped: {err}");
                return;
            }
        };
        debug!(method = %request.method(), %url, "submitting write");

        tokio::spawn(async move {
            match Self::send(client, url.clone(), &request).await {
                Ok(status) => info!(
                    method = %request.method(),
                    film_id = %request.film_id(),
                    %status,
                    "write accepted"
                ),
                Err(err) => error!(
                    method = %request.method(),
                    film_id = %request.film_id(),
                    %url,
                    "write failed: {err}"
                ),
            }
        });
    }
}

/// Used when films come from a static file and there is nowhere to write to.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl RemoteWriter for LogWriter {
    fn submit(&self, request: WriteRequest) {
        match &request {
            WriteRequest::PatchTicketsSold { id, tickets_sold } => {
                info!(film_id = %id, tickets_sold, "updating tickets_sold (not persisted)")
            }
            WriteRequest::Purchase { id } => info!(film_id = %id, "purchase (not persisted)"),
            WriteRequest::Delete { id } => info!(film_id = %id, "delete (not persisted)"),
        }
    }
}
