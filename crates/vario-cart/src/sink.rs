//! # Durable Sink
//!
//! The key-value abstraction the cart persists through, with the same
//! contract the browser's localStorage gives the storefront frontend:
//! string keys, JSON string values, survives a page reload.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       DurableSink Implementations                       │
//! │                                                                         │
//! │  JsonFileSink                          MemorySink                      │
//! │  ────────────                          ──────────                      │
//! │  One JSON object file on disk          HashMap-backed                  │
//! │  Atomic replace (tmp + rename)         For tests and ephemeral         │
//! │  Optional byte quota                   sessions                        │
//! │                                                                         │
//! │  { "cartItems": [ ... ] }              Drops on process exit           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::SinkError;

// =============================================================================
// Durable Sink Trait
// =============================================================================

/// A durable string key-value store.
///
/// Values must be valid JSON documents; the cart always stores the
/// serialized `LineItem` sequence. `get` of an absent key is `None`, not
/// an error. A failed `set` must leave the previously stored value intact.
pub trait DurableSink {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SinkError>;

    /// Stores `value` under `key`, replacing any previous value, as a
    /// single atomic operation.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SinkError>;
}

// =============================================================================
// JSON File Sink
// =============================================================================

/// A durable sink backed by a single JSON object file.
///
/// Keys become object members, values are stored as parsed JSON so the
/// file stays human-readable. Writes replace the whole file atomically:
/// serialize to a sibling temp file, then rename over the original, so a
/// crash mid-write never leaves a torn cart behind.
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    /// Maximum serialized document size, if bounded. Mirrors the quota a
    /// browser puts on localStorage.
    capacity: Option<usize>,
    entries: HashMap<String, Value>,
}

impl JsonFileSink {
    /// Opens the sink at `path`, loading existing entries if the file is
    /// present.
    ///
    /// ## Errors
    /// - [`SinkError::Io`] if the file exists but can't be read
    /// - [`SinkError::Corrupt`] if it exists but isn't a JSON object
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let entries = Self::load_entries(&path)?;

        debug!(path = %path.display(), keys = entries.len(), "Opened sink");

        Ok(JsonFileSink {
            path,
            capacity: None,
            entries,
        })
    }

    /// Opens the sink with a byte quota on the serialized document.
    pub fn with_capacity(path: impl AsRef<Path>, capacity: usize) -> Result<Self, SinkError> {
        let mut sink = Self::open(path)?;
        sink.capacity = Some(capacity);
        Ok(sink)
    }

    fn load_entries(path: &Path) -> Result<HashMap<String, Value>, SinkError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&raw)
            .map_err(|e| SinkError::Corrupt(format!("{}: {}", path.display(), e)))
    }

    /// Serializes all entries and atomically replaces the sink file.
    fn persist(&self) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| SinkError::Corrupt(e.to_string()))?;

        // Write-then-rename keeps the previous file intact on failure
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, doc.as_bytes())?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), bytes = doc.len(), "Persisted sink");
        Ok(())
    }

    fn check_quota(&self, candidate: &HashMap<String, Value>) -> Result<(), SinkError> {
        let Some(limit) = self.capacity else {
            return Ok(());
        };

        // Measure the same representation `persist` writes, so the file on
        // disk can never exceed the configured capacity
        let attempted = serde_json::to_string_pretty(candidate)
            .map_err(|e| SinkError::Corrupt(e.to_string()))?
            .len();
        if attempted > limit {
            return Err(SinkError::QuotaExceeded { limit, attempted });
        }
        Ok(())
    }
}

impl DurableSink for JsonFileSink {
    fn get(&self, key: &str) -> Result<Option<String>, SinkError> {
        Ok(self.entries.get(key).map(|v| v.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SinkError> {
        let parsed: Value = serde_json::from_str(value)
            .map_err(|e| SinkError::Corrupt(format!("value for '{}': {}", key, e)))?;

        let mut candidate = self.entries.clone();
        candidate.insert(key.to_string(), parsed);
        self.check_quota(&candidate)?;

        let previous = std::mem::replace(&mut self.entries, candidate);
        if let Err(e) = self.persist() {
            // Roll the map back so memory matches the file on disk
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// An in-memory sink for tests and ephemeral sessions.
///
/// Same contract as [`JsonFileSink`] minus durability: contents drop with
/// the process.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: HashMap<String, String>,
}

impl MemorySink {
    /// Creates an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableSink for MemorySink {
    fn get(&self, key: &str) -> Result<Option<String>, SinkError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SinkError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_roundtrip() {
        let mut sink = MemorySink::new();
        assert_eq!(sink.get("cartItems").unwrap(), None);

        sink.set("cartItems", "[]").unwrap();
        assert_eq!(sink.get("cartItems").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_sink_roundtrip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut sink = JsonFileSink::open(&path).unwrap();
        sink.set("cartItems", r#"[{"qty":2}]"#).unwrap();

        // A fresh sink over the same path sees the value (page reload)
        let reopened = JsonFileSink::open(&path).unwrap();
        let value = reopened.get("cartItems").unwrap().unwrap();
        let parsed: Value = serde_json::from_str(&value).unwrap();
        assert_eq!(parsed[0]["qty"], 2);
    }

    #[test]
    fn test_file_sink_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::open(dir.path().join("cart.json")).unwrap();
        assert_eq!(sink.get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_file_sink_rejects_non_json_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonFileSink::open(dir.path().join("cart.json")).unwrap();

        let err = sink.set("cartItems", "not json").unwrap_err();
        assert!(matches!(err, SinkError::Corrupt(_)));
        assert_eq!(sink.get("cartItems").unwrap(), None);
    }

    #[test]
    fn test_file_sink_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "{ torn write").unwrap();

        let err = JsonFileSink::open(&path).unwrap_err();
        assert!(matches!(err, SinkError::Corrupt(_)));
    }

    #[test]
    fn test_quota_exceeded_leaves_value_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut sink = JsonFileSink::with_capacity(&path, 64).unwrap();
        sink.set("cartItems", "[1,2,3]").unwrap();

        let big = format!("[{}]", "9,".repeat(100) + "9");
        let err = sink.set("cartItems", &big).unwrap_err();
        assert!(matches!(err, SinkError::QuotaExceeded { .. }));

        // The previous value survived both in memory and on disk
        assert_eq!(sink.get("cartItems").unwrap().as_deref(), Some("[1,2,3]"));
        let reopened = JsonFileSink::open(&path).unwrap();
        assert_eq!(reopened.get("cartItems").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_quota_bounds_the_persisted_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        // "[1,2,3]" is 21 bytes as a compact document but 44 pretty-printed;
        // the quota must reject what would actually land on disk
        let mut sink = JsonFileSink::with_capacity(&path, 30).unwrap();
        let err = sink.set("cartItems", "[1,2,3]").unwrap_err();
        assert!(matches!(err, SinkError::QuotaExceeded { .. }));
        assert!(!path.exists());

        // Within quota, the file on disk never exceeds the capacity
        let mut sink = JsonFileSink::with_capacity(&path, 64).unwrap();
        sink.set("cartItems", "[1,2,3]").unwrap();
        assert!(fs::metadata(&path).unwrap().len() <= 64);
    }
}
