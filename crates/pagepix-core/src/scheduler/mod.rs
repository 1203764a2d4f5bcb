//! Per-page pipeline and the bounded image worker pool.
//!
//! Coordinates one invocation end to end:
//! page_fetch → extract → url_model → downloader/convert → storage → report.
//! The page GET is synchronous and completes before any worker starts; the
//! pool is created per invocation and fully joined before the report is
//! returned.

mod pool;
mod task;

pub use task::ImageTask;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::PagepixConfig;
use crate::report::{self, NO_IMAGES_SENTINEL};
use crate::{extract, page_fetch, storage, url_model};

/// Read-only state shared by every worker in one invocation.
///
/// The page base URL travels here rather than in process-global state, so
/// independent invocations are safe to run concurrently.
#[derive(Debug)]
pub struct WorkerContext {
    /// Page URL; relative `src` values resolve against it.
    pub base: Url,
    /// Output folder for `image_{index}.jpg` files.
    pub folder: PathBuf,
    /// User-Agent sent with every image GET.
    pub user_agent: String,
    /// Per-image transfer timeout.
    pub timeout: Duration,
}

/// Fetches `page_url`, downloads every discovered image into `folder`, and
/// returns the newline-joined per-image report.
///
/// Page-level failures (invalid URL, network error, non-2xx) are fatal and
/// surface as the `Err`; per-image failures are report lines only. A page
/// without `img[src]` tags returns [`NO_IMAGES_SENTINEL`] and performs no
/// image fetches.
pub fn download_page_images(
    page_url: &str,
    folder: &Path,
    cfg: &PagepixConfig,
) -> Result<String> {
    storage::ensure_dir(folder)
        .with_context(|| format!("create output folder {}", folder.display()))?;

    let base = Url::parse(page_url).with_context(|| format!("invalid page URL: {page_url}"))?;
    let html = page_fetch::fetch_page(page_url, cfg.user_agent())?;

    let sources = extract::image_sources(&html);
    if sources.is_empty() {
        tracing::info!("no img[src] tags at {}", page_url);
        return Ok(NO_IMAGES_SENTINEL.to_string());
    }
    tracing::info!("found {} image tags at {}", sources.len(), page_url);

    let tasks: Vec<ImageTask> = sources
        .into_iter()
        .enumerate()
        .map(|(index, src)| ImageTask { src, index })
        .collect();

    let ctx = Arc::new(WorkerContext {
        base,
        folder: folder.to_path_buf(),
        user_agent: cfg.user_agent().to_string(),
        timeout: Duration::from_secs(cfg.image_timeout_secs),
    });

    let outcomes = pool::run_pool(tasks, ctx, cfg.max_workers);
    Ok(report::join_report(&outcomes))
}

/// Fetches the page and returns the resolved URL of every discovered image,
/// in document order, without downloading anything.
///
/// Sources that cannot be resolved are returned as written in the markup;
/// empty `src` values are skipped.
pub fn list_page_images(page_url: &str, cfg: &PagepixConfig) -> Result<Vec<String>> {
    let base = Url::parse(page_url).with_context(|| format!("invalid page URL: {page_url}"))?;
    let html = page_fetch::fetch_page(page_url, cfg.user_agent())?;

    Ok(extract::image_sources(&html)
        .iter()
        .map(|raw| url_model::strip_query(raw))
        .filter(|src| !src.is_empty())
        .map(|src| match url_model::resolve_src(&base, src) {
            Ok(url) => url.to_string(),
            Err(_) => src.to_string(),
        })
        .collect())
}
