use crate::console::{Console, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use crawlscope_runtime::ops::collect_protocols;
use serde_json::json;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, crawl_dir: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let report = output.unwrap_or_else(|| ctx.config().protocol_report_path());

    let outcome = collect_protocols(&crawl_dir)?;
    let rows = outcome.write_report(&report)?;
    let counts = outcome.census.counts();

    if ctx.is_json() {
        return print_json(&json!({
            "report": report,
            "rows": rows,
            "crawls_read": outcome.crawls_read,
            "peers": outcome.census.peer_count(),
            "protocols": counts,
        }));
    }

    let console = Console::stdout();
    println!("{:<12} PEERS", console.heading("PROTOCOL"));
    for (protocol, peers) in &counts {
        println!("{:<12} {}", protocol, peers);
    }
    println!(
        "{} peers in {} crawls; wrote {} rows to {}",
        console.count(outcome.census.peer_count()),
        outcome.crawls_read,
        rows,
        console.path(&report)
    );
    Ok(())
}
