//! JSONL file writer for lead events.
//!
//! Each [`LeadEvent`] is serialized as a single JSON line with a
//! `timestamp` field merged in, appended to the file via a buffered writer.

use async_trait::async_trait;
use haul_application::{AnalyticsError, AnalyticsSink};
use haul_domain::LeadEvent;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Analytics sink that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlAnalyticsSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalyticsSink {
    /// Open (or create) the event log at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create analytics log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open analytics log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: &LeadEvent) -> Result<String, AnalyticsError> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = serde_json::to_value(event)
            .map_err(|e| AnalyticsError::WriteFailed(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut record {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }

        serde_json::to_string(&record).map_err(|e| AnalyticsError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl AnalyticsSink for JsonlAnalyticsSink {
    async fn track(&self, event: LeadEvent) -> Result<(), AnalyticsError> {
        let line = Self::record(&event)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| AnalyticsError::Unavailable("writer lock poisoned".to_string()))?;
        writeln!(writer, "{}", line).map_err(|e| AnalyticsError::WriteFailed(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| AnalyticsError::WriteFailed(e.to_string()))?;

        debug!("Recorded {} event to {}", event.event, self.path.display());
        Ok(())
    }
}

impl Drop for JsonlAnalyticsSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn event(species: &str) -> LeadEvent {
        LeadEvent {
            event: "generate_lead".to_string(),
            species: species.to_string(),
            quantity: "30".to_string(),
            pickup_state: "TX".to_string(),
            dropoff_state: "KS".to_string(),
        }
    }

    fn read(path: &Path) -> String {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[tokio::test]
    async fn test_sink_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.jsonl");
        let sink = JsonlAnalyticsSink::new(&path).unwrap();

        sink.track(event("Cattle")).await.unwrap();
        sink.track(event("Horses")).await.unwrap();
        drop(sink);

        let content = read(&path);
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "generate_lead");
        assert_eq!(first["species"], "Cattle");
        assert_eq!(first["pickup_state"], "TX");
        assert!(first.get("timestamp").is_some());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["species"], "Horses");
    }

    #[tokio::test]
    async fn test_sink_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("leads.jsonl");

        for species in ["Sheep", "Goats"] {
            let sink = JsonlAnalyticsSink::new(&path).unwrap();
            sink.track(event(species)).await.unwrap();
        }

        assert_eq!(read(&path).trim().lines().count(), 2);
    }
}
