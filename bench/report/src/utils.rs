use serde::Serializer;

pub(crate) fn round_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

/// Share of succeeded attempts in percent. No attempts at all is reported as `0`.
pub fn ratio_percent(succeeded: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    succeeded as f64 / total as f64 * 100.0
}
