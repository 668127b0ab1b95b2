use std::io::Write;

use clap::Parser;
use qparams::Policy;
use qparams::args::{Invocation, collect_keywords};
use tracing_subscriber::EnvFilter;

/// Merge query parameters into a URL and print the result
#[derive(Parser, Debug)]
#[command(name = "qparams", version, about, long_about = None)]
struct Cli {
    /// URL, optionally followed by a JSON object of ordered parameters
    #[arg(value_name = "URL [PARAMS_JSON]")]
    positional: Vec<String>,

    /// Unordered parameter, repeatable (`key=value`, or `key` for a bare key)
    #[arg(short = 'p', long = "param", value_name = "KEY[=VALUE]")]
    params: Vec<String>,

    /// Duplicate handling: append, dedupe or override
    #[arg(long, default_value_t = Policy::Append)]
    policy: Policy,

    /// Query separator, '&' or ';' (inferred from the URL when omitted)
    #[arg(short, long)]
    separator: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let invocation = Invocation {
        positional: cli.positional,
        keywords: collect_keywords(&cli.params),
        policy: cli.policy,
        separator: cli.separator,
    };
    tracing::debug!(?invocation, "parsed command line");

    let url = invocation.call()?;
    writeln!(std::io::stdout().lock(), "{url}")?;
    Ok(())
}
