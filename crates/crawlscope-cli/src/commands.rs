use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use crawlscope_runtime::resolve_config_path;

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        format,
        command,
        ..
    } = cli;
    let context = || ExecutionContext::new(config.as_deref(), format);

    match command {
        Commands::Init { force } => {
            let config_path = resolve_config_path(config.as_deref())?;
            handlers::init::handle(&config_path, force, format)
        }

        Commands::Sessions {
            source,
            output,
            include_unreachable,
            reachable_only,
            intervals,
            checkpoint,
        } => {
            let ctx = context()?;
            let unreachable_flag = match (include_unreachable, reachable_only) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let args = handlers::sessions::SessionsArgs {
                crawl_dir: ctx.crawl_dir(source.crawl_dir),
                output,
                include_unreachable: ctx.include_unreachable(unreachable_flag),
                intervals,
                checkpoint,
            };
            handlers::sessions::handle(&ctx, args)
        }

        Commands::Protocols { source, output } => {
            let ctx = context()?;
            let crawl_dir = ctx.crawl_dir(source.crawl_dir);
            handlers::protocols::handle(&ctx, crawl_dir, output)
        }

        Commands::Convert { source } => {
            let ctx = context()?;
            let crawl_dir = ctx.crawl_dir(source.crawl_dir);
            handlers::convert::handle(&ctx, crawl_dir)
        }

        Commands::Crawls { source } => {
            let ctx = context()?;
            let crawl_dir = ctx.crawl_dir(source.crawl_dir);
            handlers::crawls::handle(&ctx, crawl_dir)
        }
    }
}
