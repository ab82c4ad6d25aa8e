//! Image fetching over HTTP.
//!
//! The transport sits behind the one-method [`HttpGetter`] trait so the
//! status handling in [`fetch_image`] can be exercised with a stub. The
//! production implementation is [`HttpClient`].
//!
//! # Example
//!
//! ```no_run
//! use picsum_core::fetch::{HttpClient, fetch_image};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let mut stdout = std::io::stdout();
//! let body = fetch_image(&client, "https://picsum.photos/300", false, &mut stdout).await?;
//! # drop(body);
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod error;

use std::fmt;
use std::io::Write;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use reqwest::StatusCode;
use tracing::{debug, instrument};

pub use client::HttpClient;
pub use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use error::{FetchError, TransportSource};

/// Response body as a stream of chunks. Dropping it releases the connection.
pub type ByteStream = BoxStream<'static, Result<Bytes, std::io::Error>>;

/// Status line and body of a completed GET.
pub struct GetResponse {
    status: StatusCode,
    body: ByteStream,
}

impl GetResponse {
    /// Wraps a status and a body stream.
    #[must_use]
    pub fn new(status: StatusCode, body: ByteStream) -> Self {
        Self { status, body }
    }

    /// The HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> ByteStream {
        self.body
    }
}

impl fmt::Debug for GetResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Performs a GET by URL.
///
/// Implementations only report transport failures; any status code is a
/// successful `get`. Status policy lives in [`fetch_image`].
#[async_trait]
pub trait HttpGetter: Send + Sync {
    /// Sends a GET request to `url`.
    async fn get(&self, url: &str) -> Result<GetResponse, FetchError>;
}

/// Requests `url` and returns its body if the service answered `200 OK`.
///
/// Writes `Downloading from <url>...` to `output` unless `quiet`.
///
/// # Errors
///
/// - [`FetchError::Transport`] / [`FetchError::Timeout`] if the request fails
/// - [`FetchError::ServerStatus`] for any status other than 200
#[instrument(skip(getter, output))]
pub async fn fetch_image<G, W>(
    getter: &G,
    url: &str,
    quiet: bool,
    output: &mut W,
) -> Result<ByteStream, FetchError>
where
    G: HttpGetter + ?Sized,
    W: Write,
{
    if !quiet {
        let _ = writeln!(output, "Downloading from {url}...");
        let _ = output.flush();
    }

    let response = getter.get(url).await?;
    let status = response.status();

    if status != StatusCode::OK {
        debug!(status = status.as_u16(), "image service returned non-success status");
        // Dropping the response here closes the body.
        return Err(FetchError::server_status(
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
        ));
    }

    debug!("image response accepted");
    Ok(response.into_body())
}
