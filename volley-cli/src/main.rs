use clap::Parser;
use tracing_subscriber::EnvFilter;
use volley::RunConfig;

/// Fire a burst of concurrent HTTP GET requests at a URL and report latency
/// statistics.
#[derive(Parser, Debug)]
#[command(name = "volley", version)]
struct Cli {
    /// Target URL (absolute, with scheme and host)
    #[arg(short, long)]
    url: String,

    /// Number of concurrent requests
    #[arg(
        short,
        long,
        visible_alias = "threads",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    concurrency: i64,

    /// Per-request timeout in seconds, 0 for no explicit timeout
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    timeout: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RunConfig::new(&cli.url, cli.concurrency, cli.timeout)?;

    let stats = volley::run(&config).await?;
    println!("{stats}");
    Ok(())
}
