//! One image task: resolve, fetch, convert or save, report.

use anyhow::{Context, Result};
use url::Url;

use super::WorkerContext;
use crate::report::TaskOutcome;
use crate::{convert, downloader, storage, url_model};

/// One unit of work: download (and possibly convert) a single discovered
/// image reference.
#[derive(Debug, Clone)]
pub struct ImageTask {
    /// Raw `src` attribute as found in the markup (possibly relative,
    /// possibly carrying a query string).
    pub src: String,
    /// Discovery index on the page; names the output file `image_{index}.jpg`.
    pub index: usize,
}

/// Processes one task to completion. Never fails: every error becomes a
/// `TaskOutcome::Failed` naming the offending URL, so sibling tasks are
/// unaffected.
pub(crate) fn process_task(task: &ImageTask, ctx: &WorkerContext) -> TaskOutcome {
    let src = url_model::strip_query(&task.src);
    if src.is_empty() {
        return TaskOutcome::Failed {
            url: task.src.clone(),
            error: "empty src attribute".to_string(),
        };
    }

    let resolved = match url_model::resolve_src(&ctx.base, src) {
        Ok(url) => url,
        Err(e) => {
            return TaskOutcome::Failed {
                url: src.to_string(),
                error: format!("{e:#}"),
            }
        }
    };

    match fetch_and_save(&resolved, task.index, ctx) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("image task {} failed: {:#}", resolved, e);
            TaskOutcome::Failed {
                url: resolved.to_string(),
                error: format!("{e:#}"),
            }
        }
    }
}

fn fetch_and_save(url: &Url, index: usize, ctx: &WorkerContext) -> Result<TaskOutcome> {
    let fetched = downloader::fetch_image(url.as_str(), &ctx.user_agent, ctx.timeout)?;
    let path = storage::image_path(&ctx.folder, index);

    if convert::is_webp(url, fetched.content_type.as_deref()) {
        let jpeg = convert::webp_to_jpeg(&fetched.bytes).context("webp decode")?;
        storage::write_image(&path, &jpeg)
            .with_context(|| format!("write {}", path.display()))?;
        tracing::debug!("converted {} -> {}", url, path.display());
        Ok(TaskOutcome::Converted(path))
    } else {
        storage::write_image(&path, &fetched.bytes)
            .with_context(|| format!("write {}", path.display()))?;
        tracing::debug!("saved {} -> {}", url, path.display());
        Ok(TaskOutcome::Saved(path))
    }
}
