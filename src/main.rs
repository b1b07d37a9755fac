use std::process::ExitCode;

use clap::Parser as _;
use prune_artifacts::config::DEFAULT_API_URL;
use prune_artifacts::{Inputs, actions};
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(version, about)]
struct Options {
    /// Token used as bearer credential for every API request
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    github_token: Option<String>,
    /// Number of newest artifacts to keep
    #[arg(long, env = "INPUT_MAX-ARTIFACTS")]
    max_artifacts: Option<String>,
    /// Repository to prune, as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Use verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Options {
    fn inputs(&self) -> Inputs {
        Inputs {
            github_token: self.github_token.clone(),
            max_artifacts: self.max_artifacts.clone(),
            repository: self.repository.clone(),
            api_url: Some(self.api_url.clone()),
        }
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(options: &Options) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let options = Options::parse();
    init_logging(&options);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            let e = anyhow::Error::new(e).context("failed to start async runtime");
            tracing::error!("{:#}", e);
            println!("{}", actions::error_command(&format!("{:#}", e)));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(prune_artifacts::run(options.inputs())) {
        Ok(outcome) => {
            tracing::info!("Deleted {} artifacts", outcome.deleted().len());
            for message in outcome.messages() {
                println!("{}", message);
            }
            ExitCode::SUCCESS
        }
        Err(e) => actions::fail(&e),
    }
}
