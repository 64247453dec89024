use crate::bench_error::BenchError;
use crate::configs::bench_config::{BenchConfig, RawBenchConfig};
use async_trait::async_trait;
use figment::providers::{Env, Format, Json, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::info;

const ENV_PREFIX: &str = "CONSISTENCY_BENCH_";

#[async_trait]
pub trait ConfigProvider {
    async fn load_config(&self) -> Result<BenchConfig, BenchError>;
}

#[derive(Debug)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn figment(path: &Path) -> Figment {
        let figment = match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Figment::new().merge(Toml::file(path)),
            _ => Figment::new().merge(Json::file(path)),
        };
        figment.merge(Env::prefixed(ENV_PREFIX))
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn load_config(&self) -> Result<BenchConfig, BenchError> {
        if !self.path.is_file() {
            return Err(BenchError::CannotLoadConfiguration(format!(
                "config file '{}' does not exist",
                self.path.display()
            )));
        }

        info!("Loading config from path: '{}'...", self.path.display());
        let raw: RawBenchConfig = Self::figment(&self.path)
            .extract()
            .map_err(|error| BenchError::CannotLoadConfiguration(error.to_string()))?;
        let config = BenchConfig::try_from(raw)?;
        info!(
            "Config loaded from path: '{}', mode: {}",
            self.path.display(),
            config.kind()
        );

        Ok(config)
    }
}
