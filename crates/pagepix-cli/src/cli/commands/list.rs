//! `pagepix list <url>` – print resolved image URLs without downloading.

use anyhow::Result;
use pagepix_core::config::PagepixConfig;
use pagepix_core::scheduler;

pub fn run_list(cfg: &PagepixConfig, url: &str) -> Result<()> {
    let urls = scheduler::list_page_images(url, cfg)?;
    if urls.is_empty() {
        println!("no images found");
        return Ok(());
    }
    for u in urls {
        println!("{u}");
    }
    Ok(())
}
