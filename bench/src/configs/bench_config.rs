use crate::bench_error::BenchError;
use crate::configs::validators::validate_url;
use crate::configs::Validatable;
use bytes::Bytes;
use consistency_bench_report::benchmark_kind::BenchmarkKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

/// Request shape used by every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeName {
    Get,
    GetRange,
    PostPara,
}

/// Configuration as it is stored in the file, keys named the way the
/// legacy scripts named them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawBenchConfig {
    pub url: String,
    pub thread: u32,
    pub time: f64,
    #[serde(default)]
    pub mode: Option<ModeName>,
    #[serde(default)]
    pub step: Option<u64>,
    #[serde(default)]
    pub para: Option<Map<String, Value>>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub timeout: Option<f64>,
    #[serde(default)]
    pub swallow_transport_errors: bool,
}

impl RawBenchConfig {
    /// An explicit `mode` wins, otherwise the mode follows from the
    /// mode-specific keys present in the file.
    pub fn resolve_mode(&self) -> ModeName {
        match self.mode {
            Some(mode) => mode,
            None if self.para.is_some() || self.back.is_some() => ModeName::PostPara,
            None if self.step.is_some() => ModeName::GetRange,
            None => ModeName::Get,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchMode {
    FullBody,
    Ranged {
        chunk_size: u64,
    },
    FormPost {
        form: Vec<(String, String)>,
        expected_body: Bytes,
        swallow_transport_errors: bool,
    },
}

impl FetchMode {
    pub fn kind(&self) -> BenchmarkKind {
        match self {
            FetchMode::FullBody => BenchmarkKind::HttpGet,
            FetchMode::Ranged { .. } => BenchmarkKind::HttpGetRange,
            FetchMode::FormPost { .. } => BenchmarkKind::HttpPostPara,
        }
    }

    /// Whether attempts compare against a body fetched from the target
    /// before the workers start.
    pub fn needs_reference(&self) -> bool {
        !matches!(self, FetchMode::FormPost { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub url: Url,
    pub concurrency: u32,
    pub duration: Duration,
    pub timeout: Option<Duration>,
    pub mode: FetchMode,
}

impl BenchConfig {
    pub fn kind(&self) -> BenchmarkKind {
        self.mode.kind()
    }

    pub fn chunk_size(&self) -> Option<u64> {
        match self.mode {
            FetchMode::Ranged { chunk_size } => Some(chunk_size),
            _ => None,
        }
    }
}

impl TryFrom<RawBenchConfig> for BenchConfig {
    type Error = BenchError;

    fn try_from(raw: RawBenchConfig) -> Result<Self, Self::Error> {
        raw.validate()?;

        let url = validate_url(&raw.url)?;
        let duration = Duration::try_from_secs_f64(raw.time)
            .map_err(|error| BenchError::InvalidConfiguration(format!("time: {error}")))?;
        let timeout = raw
            .timeout
            .map(Duration::try_from_secs_f64)
            .transpose()
            .map_err(|error| BenchError::InvalidConfiguration(format!("timeout: {error}")))?;

        let mode = match raw.resolve_mode() {
            ModeName::Get => FetchMode::FullBody,
            ModeName::GetRange => FetchMode::Ranged {
                chunk_size: raw.step.ok_or_else(|| {
                    BenchError::InvalidConfiguration("ranged mode requires 'step'".to_owned())
                })?,
            },
            ModeName::PostPara => FetchMode::FormPost {
                form: form_pairs(raw.para.as_ref())?,
                expected_body: raw.back.map(Bytes::from).ok_or_else(|| {
                    BenchError::InvalidConfiguration("post mode requires 'back'".to_owned())
                })?,
                swallow_transport_errors: raw.swallow_transport_errors,
            },
        };

        Ok(Self {
            url,
            concurrency: raw.thread,
            duration,
            timeout,
            mode,
        })
    }
}

/// Flattens `para` into urlencoded form pairs. Scalars are sent as text,
/// nested values are rejected.
fn form_pairs(para: Option<&Map<String, Value>>) -> Result<Vec<(String, String)>, BenchError> {
    let Some(para) = para else {
        return Ok(Vec::new());
    };

    para.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                Value::Bool(flag) => flag.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(BenchError::InvalidConfiguration(format!(
                        "para.{key} must be a string, number or boolean"
                    )))
                }
            };
            Ok((key.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawBenchConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn get_config_should_resolve_to_full_body_mode() {
        let config = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/file.bin",
            "thread": 4,
            "time": 10
        })))
        .unwrap();

        assert_eq!(config.mode, FetchMode::FullBody);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.duration, Duration::from_secs(10));
        assert_eq!(config.timeout, None);
        assert_eq!(config.kind(), BenchmarkKind::HttpGet);
    }

    #[test]
    fn step_should_select_ranged_mode() {
        let config = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/file.bin",
            "step": 1024,
            "thread": 2,
            "time": 0.5
        })))
        .unwrap();

        assert_eq!(config.mode, FetchMode::Ranged { chunk_size: 1024 });
        assert_eq!(config.chunk_size(), Some(1024));
        assert_eq!(config.duration, Duration::from_millis(500));
    }

    #[test]
    fn para_and_back_should_select_post_mode() {
        let config = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/form",
            "para": {"key1": "value1", "key2": 2, "key3": true},
            "back": "ok",
            "thread": 1,
            "time": 1
        })))
        .unwrap();

        let FetchMode::FormPost {
            form,
            expected_body,
            swallow_transport_errors,
        } = config.mode
        else {
            panic!("expected post mode");
        };
        assert_eq!(
            form,
            vec![
                ("key1".to_owned(), "value1".to_owned()),
                ("key2".to_owned(), "2".to_owned()),
                ("key3".to_owned(), "true".to_owned()),
            ]
        );
        assert_eq!(expected_body, Bytes::from_static(b"ok"));
        assert!(!swallow_transport_errors);
    }

    #[test]
    fn explicit_mode_should_win_over_inference() {
        let config = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/file.bin",
            "mode": "get",
            "step": 16,
            "thread": 1,
            "time": 1
        })))
        .unwrap();

        assert_eq!(config.mode, FetchMode::FullBody);
    }

    #[test]
    fn post_mode_without_expected_body_should_be_rejected() {
        let result = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/form",
            "mode": "post_para",
            "thread": 1,
            "time": 1
        })));

        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    fn timeout_and_swallow_flag_should_be_carried_over() {
        let config = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/form",
            "para": {"key1": "value1"},
            "back": "ok",
            "thread": 1,
            "time": 1,
            "timeout": 2.5,
            "swallow_transport_errors": true
        })))
        .unwrap();

        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
        assert!(matches!(
            config.mode,
            FetchMode::FormPost {
                swallow_transport_errors: true,
                ..
            }
        ));
    }

    #[test]
    fn unsupported_url_scheme_should_be_rejected() {
        let result = BenchConfig::try_from(raw(json!({
            "url": "ftp://127.0.0.1/file.bin",
            "thread": 1,
            "time": 1
        })));

        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    fn nested_para_values_should_be_rejected() {
        let result = BenchConfig::try_from(raw(json!({
            "url": "http://127.0.0.1:8080/form",
            "para": {"key1": {"nested": 1}},
            "back": "ok",
            "thread": 1,
            "time": 1
        })));

        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }
}
