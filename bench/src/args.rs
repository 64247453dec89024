use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct BenchArgs {
    /// Benchmark configuration file (JSON, or TOML when the extension is .toml)
    pub config: PathBuf,

    /// Also store the reference body in this file once it is fetched
    #[arg(long, short = 'r')]
    pub reference_file: Option<PathBuf>,

    /// Output directory path for storing the JSON report
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Identifier for the benchmark run (defaults to hostname if not provided)
    #[arg(long)]
    pub identifier: Option<String>,
}

impl BenchArgs {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            reference_file: None,
            output_dir: None,
            identifier: None,
        }
    }

    pub fn identifier(&self) -> String {
        match &self.identifier {
            Some(identifier) => identifier.clone(),
            None => hostname::get()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|_| "unknown".to_owned()),
        }
    }
}
