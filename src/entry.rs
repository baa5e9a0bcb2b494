use clap::Parser;
use tracing::debug;

use faster_requests::args::BatchArgs;
use faster_requests::config::Config;
use faster_requests::error::AppResult;
use faster_requests::http::BatchRunner;
use faster_requests::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let args = BatchArgs::parse();

    init_logging();
    let config = Config::from_env();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(BatchRunner::new(config).run(&args.url));
    debug!(
        "{} succeeded, {} timed out, {} failed",
        result.successes(),
        result.timeouts(),
        result.errors()
    );
    Ok(())
}
