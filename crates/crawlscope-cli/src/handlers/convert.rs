use crate::console::{Console, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use crawlscope_runtime::ops::convert_crawls;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, crawl_dir: PathBuf) -> Result<()> {
    let written = convert_crawls(&crawl_dir)?;

    if ctx.is_json() {
        return print_json(&written);
    }

    let console = Console::stdout();
    for path in &written {
        println!("{}", console.path(path));
    }
    println!("Converted {} crawl(s)", console.count(written.len()));
    Ok(())
}
