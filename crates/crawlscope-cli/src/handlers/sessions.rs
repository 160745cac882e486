use crate::console::{Console, format_seconds, print_json};
use crate::context::ExecutionContext;
use anyhow::Result;
use crawlscope_engine::SessionSummary;
use crawlscope_runtime::ops::{SessionService, SessionsRequest};
use serde::Serialize;
use std::path::PathBuf;

pub struct SessionsArgs {
    pub crawl_dir: PathBuf,
    pub output: Option<PathBuf>,
    pub include_unreachable: bool,
    pub intervals: bool,
    pub checkpoint: Option<PathBuf>,
}

#[derive(Serialize)]
struct SessionsView {
    report: PathBuf,
    rows: usize,
    crawls_found: usize,
    crawls_folded: usize,
    snapshots: usize,
    summary: SessionSummary,
}

pub fn handle(ctx: &ExecutionContext, args: SessionsArgs) -> Result<()> {
    let report = args
        .output
        .unwrap_or_else(|| ctx.config().session_report_path());

    let outcome = SessionService::new(SessionsRequest {
        crawl_dir: args.crawl_dir,
        include_unreachable: args.include_unreachable,
        checkpoint: args.checkpoint,
    })
    .run()?;
    let rows = outcome.write_report(&report, args.intervals)?;

    let view = SessionsView {
        report,
        rows,
        crawls_found: outcome.crawls_found,
        crawls_folded: outcome.crawls_folded,
        snapshots: outcome.snapshots,
        summary: outcome.summary(),
    };

    if ctx.is_json() {
        return print_json(&view);
    }

    let console = Console::stdout();
    let summary = &view.summary;
    println!(
        "{} {} sessions of {} peers from {} snapshots ({} crawls read this run)",
        console.heading("Sessions:"),
        console.count(summary.sessions),
        console.count(summary.peers),
        view.snapshots,
        view.crawls_folded,
    );
    if summary.sessions > 0 {
        println!(
            "  mean {} | median {} | max {}",
            format_seconds(summary.mean_seconds.round() as i64),
            format_seconds(summary.median_seconds),
            format_seconds(summary.max_seconds),
        );
    }
    println!("Wrote {} rows to {}", view.rows, console.path(&view.report));
    Ok(())
}
