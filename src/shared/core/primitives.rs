use chrono::Utc;

/// Every timestamp in this crate is epoch milliseconds.
pub type Millis = i64;

pub const MILLIS_PER_DAY: Millis = 24 * 60 * 60 * 1000;

pub fn now_millis() -> Millis {
    Utc::now().timestamp_millis()
}

pub fn request_stream_id(request_id: &str) -> String {
    format!("Request-{request_id}")
}

/// Trim a free-text field; blank input counts as absent.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
