//! `pagepix fetch <url>` – download every image referenced by a page.

use anyhow::Result;
use pagepix_core::config::PagepixConfig;
use pagepix_core::scheduler;
use std::path::PathBuf;

pub fn run_fetch(
    cfg: &PagepixConfig,
    url: &str,
    folder: Option<PathBuf>,
    workers: Option<usize>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(n) = workers {
        cfg.max_workers = n;
    }
    let folder = folder.unwrap_or_else(|| cfg.output_dir.clone());

    let report = scheduler::download_page_images(url, &folder, &cfg)?;
    println!("{report}");
    Ok(())
}
