//! grab-xkcd CLI - fetches the latest xkcd comic and saves its image.

use anyhow::Context;
use grab_xkcd::error::Result;
use grab_xkcd::{ComicId, Console, XkcdClient};

#[tokio::main]
async fn main() -> Result<()> {
    let console = Console::new();

    let client = XkcdClient::new().context("Failed to create xkcd client")?;

    console.info(&format!("Fetching {} comic", ComicId::Latest));
    let report = client
        .fetch_report(ComicId::Latest, true)
        .await
        .context("Failed to fetch the latest comic")?;

    console.section(&console.comic_summary(&report.comic));

    if report.warnings.is_empty() {
        console.success("Image saved to the current directory");
    }
    for warning in &report.warnings {
        console.warning(&format!("Image not saved: {}", warning));
    }

    Ok(())
}
