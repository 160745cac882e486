use crate::console::{Console, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use chrono::NaiveDateTime;
use crawlscope_runtime::ops::list_crawls;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct CrawlView {
    file: PathBuf,
    format: &'static str,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

pub fn handle(ctx: &ExecutionContext, crawl_dir: PathBuf) -> Result<()> {
    let crawls: Vec<CrawlView> = list_crawls(&crawl_dir)?
        .into_iter()
        .map(|c| CrawlView {
            format: c.format.id(),
            start: c.window.start,
            end: c.window.end,
            file: c.path,
        })
        .collect();

    if ctx.is_json() {
        return print_json(&crawls);
    }

    if crawls.is_empty() {
        println!("No crawl files in {}", crawl_dir.display());
        return Ok(());
    }

    let console = Console::stdout();
    println!(
        "{}",
        console.heading(&format!("{:<20} {:<20} {:<13} FILE", "START", "END", "FORMAT"))
    );
    for crawl in &crawls {
        let name = crawl
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "{:<20} {:<20} {:<13} {}",
            crawl.start.format("%Y-%m-%d %H:%M:%S").to_string(),
            crawl.end.format("%Y-%m-%d %H:%M:%S").to_string(),
            crawl.format,
            name
        );
    }
    Ok(())
}
