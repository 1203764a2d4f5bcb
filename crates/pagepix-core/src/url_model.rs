//! Image URL modeling: query stripping and relative-src resolution.
//!
//! `src` attributes come in three shapes: absolute http(s) URLs, site-relative
//! paths, and protocol-relative `//host/...` references. Everything that is
//! not an explicit http(s) URL is resolved against the page URL.

use anyhow::{Context, Result};
use url::Url;

/// Strips the query string (everything from the first `?`) from a raw `src`.
pub fn strip_query(src: &str) -> &str {
    match src.split_once('?') {
        Some((path, _)) => path,
        None => src,
    }
}

/// True if the value already carries an explicit http/https scheme.
fn has_http_scheme(src: &str) -> bool {
    src.starts_with("http:") || src.starts_with("https:")
}

/// Resolves a (possibly relative) `src` to an absolute URL.
///
/// Absolute http(s) values are parsed as-is; anything else is resolved
/// against `base` with standard RFC 3986 reference resolution.
pub fn resolve_src(base: &Url, src: &str) -> Result<Url> {
    if has_http_scheme(src) {
        Url::parse(src).with_context(|| format!("invalid image URL: {src}"))
    } else {
        base.join(src)
            .with_context(|| format!("cannot resolve {src} against {base}"))
    }
}
