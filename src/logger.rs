use std::fs::{File, OpenOptions};
use std::io::Write;

use chrono::Utc;
use serde_json::{Value, json};
use tracing::warn;

/// How much of each exchange the wire log captures.
pub enum MessageLogMode {
    /// Request paths plus full response bodies.
    Full,
    /// Request paths and response status only.
    Summary,
}

pub(crate) struct MessageLogger {
    mode: MessageLogMode,
    file: File,
}

impl MessageLogger {
    pub fn new(mode: MessageLogMode, path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { mode, file })
    }

    pub fn log_request(&mut self, path: &str) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "req",
            "method": "GET",
            "path": path,
        });
        self.write_line(&entry);
    }

    pub fn log_response(&mut self, status: u16, body: Option<&str>) {
        let entry = match self.mode {
            MessageLogMode::Full => {
                let body_json = body
                    .map(|b| serde_json::from_str(b).unwrap_or(Value::Null))
                    .unwrap_or(Value::Null);
                json!({
                    "ts": Utc::now().to_rfc3339(),
                    "dir": "resp",
                    "status": status,
                    "body": body_json,
                })
            }
            MessageLogMode::Summary => json!({
                "ts": Utc::now().to_rfc3339(),
                "dir": "resp",
                "status": status,
            }),
        };
        self.write_line(&entry);
    }

    fn write_line(&mut self, entry: &Value) {
        if let Ok(line) = serde_json::to_string(entry)
            && let Err(e) = writeln!(self.file, "{line}")
        {
            warn!("failed to write log entry: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::NamedTempFile;

    fn read_lines(path: &str) -> Vec<Value> {
        let mut contents = String::new();
        std::fs::File::open(path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn log_request_writes_ndjson() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Full, path).unwrap();
        logger.log_request("/tstat/model");

        let lines = read_lines(path);
        assert_eq!(lines[0]["dir"], "req");
        assert_eq!(lines[0]["method"], "GET");
        assert_eq!(lines[0]["path"], "/tstat/model");
        assert!(lines[0]["ts"].as_str().is_some());
    }

    #[test]
    fn full_mode_captures_body() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Full, path).unwrap();
        logger.log_response(200, Some(r#"{"temp": 71.5}"#));

        let lines = read_lines(path);
        assert_eq!(lines[0]["dir"], "resp");
        assert_eq!(lines[0]["status"], 200);
        assert_eq!(lines[0]["body"]["temp"], 71.5);
    }

    #[test]
    fn summary_mode_omits_body() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Summary, path).unwrap();
        logger.log_response(200, Some(r#"{"temp": 71.5}"#));

        let lines = read_lines(path);
        assert_eq!(lines[0]["status"], 200);
        assert!(lines[0].get("body").is_none());
    }

    #[test]
    fn unparseable_body_logs_null() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_str().unwrap();
        let mut logger = MessageLogger::new(MessageLogMode::Full, path).unwrap();
        logger.log_response(404, None);

        let lines = read_lines(path);
        assert_eq!(lines[0]["status"], 404);
        assert!(lines[0]["body"].is_null());
    }
}
