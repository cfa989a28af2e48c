use anyhow::Result;
use clap::Parser;
use corpora::{DataPaths, NltkConfig, NltkData, DEFAULT_BASE_URL};
use std::io;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};
use wordcore::{run, CollectOptions, Outcome};

#[derive(Parser, Debug)]
#[command(name = "wordlist")]
#[command(about = "Print the lowercase alphabetic vocabulary of an NLTK corpus, sorted and deduplicated")]
struct Args {
    /// Corpus code: w (words), b (brown), W (webtext), g (gutenberg). Only the first character is read.
    #[arg(allow_hyphen_values = true)]
    mode: String,
    /// NLTK data directory (defaults to $NLTK_DATA, then ~/nltk_data)
    #[arg(long)]
    data_dir: Option<String>,
    /// Package mirror (defaults to $NLTK_DATA_URL, then the nltk_data GitHub pages)
    #[arg(long)]
    base_url: Option<String>,
    /// Never download; fail if the corpus is not cached
    #[arg(long, default_value_t = false, conflicts_with = "refresh")]
    offline: bool,
    /// Download the corpus again even if it is cached
    #[arg(long, default_value_t = false)]
    refresh: bool,
    /// Download timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
    /// User-Agent for package downloads
    #[arg(long, default_value = concat!("wordlist/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,
    /// Leave the empty word out of the output
    #[arg(long, default_value_t = false)]
    drop_empty: bool,
}

impl Args {
    fn nltk_config(&self) -> NltkConfig {
        let paths = match &self.data_dir {
            Some(dir) => DataPaths::new(dir),
            None => DataPaths::from_env(),
        };
        let base_url = self
            .base_url
            .clone()
            .or_else(|| std::env::var("NLTK_DATA_URL").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        NltkConfig {
            paths,
            base_url,
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            offline: self.offline,
            refresh: self.refresh,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();

    let config = args.nltk_config();
    tracing::debug!(root = %config.paths.root.display(), base_url = %config.base_url, offline = config.offline, "corpus source");
    let source = NltkData::new(config)?;

    let opts = CollectOptions { drop_empty: args.drop_empty };
    match run(&args.mode, &source, opts, io::stdout().lock(), io::stderr())? {
        Outcome::Emitted(stats) => tracing::info!(original = stats.original, converted = stats.converted, "done"),
        Outcome::InvalidMode => {}
    }
    Ok(())
}
