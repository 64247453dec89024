use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Default,
    PartialOrd,
    Ord,
)]
pub enum BenchmarkKind {
    #[default]
    #[display("HTTP Get")]
    #[serde(rename = "http_get")]
    HttpGet,
    #[display("HTTP Get Range")]
    #[serde(rename = "http_get_range")]
    HttpGetRange,
    #[display("HTTP Post Para")]
    #[serde(rename = "http_post_para")]
    HttpPostPara,
}

impl BenchmarkKind {
    /// Prefix of the per-worker summary line, e.g. `http_get_range` in
    /// `http_get_range_thread 3:  total=...`.
    pub fn line_prefix(&self) -> &'static str {
        match self {
            BenchmarkKind::HttpGet => "http_get",
            BenchmarkKind::HttpGetRange => "http_get_range",
            BenchmarkKind::HttpPostPara => "http_post_para",
        }
    }
}
