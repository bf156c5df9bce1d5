use chrono::{SecondsFormat, Utc};
use env_logger::{Builder, Env};
use serde::Serialize;
use std::io::Write;

/// One log line, shaped for ingestion by a JSON log pipeline.
#[derive(Debug, Serialize)]
struct JsonLine {
    level: String,
    time: String,
    target: String,
    message: String,
    #[serde(flatten)]
    fields: Option<serde_json::Value>,
}

impl JsonLine {
    fn new(
        level: String,
        target: String,
        message: &str,
        fields: Option<serde_json::Value>,
    ) -> JsonLine {
        JsonLine {
            level,
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            target,
            message: message.trim().to_string(),
            fields,
        }
    }
}

/// Emit a structured log record. Called through `jlog!`, not directly.
pub fn emit(
    level: log::Level,
    target: Option<&str>,
    message: &str,
    fields: Option<serde_json::Value>,
) {
    let line = JsonLine::new(
        level.to_string(),
        target.unwrap_or("app").to_string(),
        message,
        fields,
    );
    match serde_json::to_string(&line) {
        Ok(json) => match target {
            Some(target) => log::log!(target: target, level, "{}", json),
            None => log::log!(level, "{}", json),
        },
        Err(err) => log::log!(level, "Could not serialize log metadata for '{}': {}", message, err),
    }
}

/// Structured logging with JSON metadata:
///
/// ```text
/// jlog!(Warn, "listing could not be ended");
/// jlog!(Warn, "listing could not be ended", {"offer_id": offer_id});
/// jlog!(Warn, "ebay::sync", "listing could not be ended", {"offer_id": offer_id});
/// ```
///
/// The metadata braces are `serde_json::json!` syntax; callers of the
/// metadata forms need `json!` in scope.
#[macro_export]
macro_rules! jlog {
    ($level:path, $message:expr) => {
        $crate::emit($level, None, $message, None)
    };
    ($level:path, $message:expr, $fields:tt) => {
        $crate::emit($level, None, $message, Some(json!($fields)))
    };
    ($level:path, $target:expr, $message:expr, $fields:tt) => {
        $crate::emit($level, Some($target), $message, Some(json!($fields)))
    };
}

/// Route everything through env_logger, one JSON object per line. Records
/// produced by `jlog!` already carry JSON and pass through as-is.
pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let message = record.args().to_string();
            if message.starts_with('{') && message.ends_with('}') {
                writeln!(buf, "{}", message)
            } else {
                let line = JsonLine::new(
                    record.level().to_string(),
                    record.target().to_string(),
                    &message,
                    None,
                );
                match serde_json::to_string(&line) {
                    Ok(json) => writeln!(buf, "{}", json),
                    Err(_) => writeln!(buf, "{}", message),
                }
            }
        })
        .init();
}

#[cfg(test)]
mod test {
    use log::Level::{Info, Warn};
    use serde_json::json;

    #[test]
    fn jlog_accepts_all_forms() {
        jlog!(Warn, "listing could not be ended");
        jlog!(Info, "synced inventory item", { "sku": "A1" });
        jlog!(Warn, "etsy::sync", "no listing id stored", {
            "sku": "A1",
            "stage": "delete_listing"
        });
    }
}
