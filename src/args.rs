use clap::Parser;

const ENV_HELP: &str = concat!(
    "Environment:\n",
    "  FASTER_REQUESTS_WORKERS  worker pool size (default: min(100, 5 x CPUs))\n",
    "  FASTER_REQUESTS_TIMEOUT  per-request timeout in seconds (default: 5.0)\n",
    "  FASTER_REQUESTS_LOG      tracing filter for stderr logs (default: warn)"
);

#[derive(Debug, Clone, Parser)]
#[command(
    name = "faster-requests",
    version,
    about = "Send a batch of 10 concurrent GET requests to a URL and time them.",
    after_help = ENV_HELP
)]
pub struct BatchArgs {
    /// Target URL. Not validated up front; a malformed URL is reported per request.
    #[arg(value_name = "URL")]
    pub url: String,
}
