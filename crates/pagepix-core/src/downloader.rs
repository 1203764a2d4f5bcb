//! Single-image HTTP GET.
//!
//! Buffers the response body in memory and captures the Content-Type header
//! so the caller can decide whether WebP conversion applies. Runs in the
//! calling thread; the worker pool owns the threading.

use std::time::Duration;

/// Response of one image GET.
#[derive(Debug)]
pub struct FetchedImage {
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// `Content-Type` header value, if the server sent one.
    pub content_type: Option<String>,
}

/// Error from one image GET (curl failure, timeout, or non-2xx status).
/// Typed so the scheduler can render a precise per-task failure line.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {0}")]
    Http(u32),
}

/// Downloads `url` with a single GET, buffering the whole body.
///
/// `timeout` bounds the entire transfer, connect included. Redirects are
/// followed. A non-2xx final status is an error and the body is discarded.
pub fn fetch_image(
    url: &str,
    user_agent: &str,
    timeout: Duration,
) -> Result<FetchedImage, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(timeout)?;

    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            bytes.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code < 200 || code >= 300 {
        return Err(FetchError::Http(code));
    }
    let content_type = easy.content_type()?.map(str::to_string);

    Ok(FetchedImage {
        bytes,
        content_type,
    })
}
