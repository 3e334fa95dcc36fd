/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh resource ID (UUID v4, hyphenated).
///
/// The same value is used as the SurrealDB record key, so it must stay a
/// plain string without a table prefix.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
