//! Page HTML fetching.
//!
//! One blocking GET via a curl Easy handle with a browser-like User-Agent.
//! Any transfer error or non-2xx status is fatal for the whole run, so this
//! returns a plain `anyhow::Result` for the caller to propagate.

use anyhow::{Context, Result};
use std::time::Duration;

/// Connect timeout for the page GET.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// Total transfer timeout for the page GET.
const TOTAL_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches `url` and returns the response body as text.
///
/// Follows redirects. The body is decoded as UTF-8 with lossy replacement;
/// HTML parsing downstream tolerates that.
pub fn fetch_page(url: &str, user_agent: &str) -> Result<String> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.useragent(user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(TOTAL_TIMEOUT)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("page GET failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    tracing::debug!("fetched {} ({} bytes)", url, body.len());
    Ok(String::from_utf8_lossy(&body).into_owned())
}
