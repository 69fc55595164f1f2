// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! On-device key-value storage.
//!
//! Values are JSON strings keyed by fixed names. The file backend keeps the
//! whole map in one JSON document and rewrites it on every mutation; the
//! memory backend exists for tests and throwaway runs.
//!
//! There is no atomicity across keys: callers that write two related keys
//! do so as two independent operations.

use crate::error::AppError;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Fixed storage keys.
pub mod keys {
    /// CMS bearer token (raw string)
    pub const AUTH_TOKEN: &str = "dunes_auth_token";
    /// CMS user profile (JSON)
    pub const USER: &str = "dunes_user";
    /// Mobile profile (JSON)
    pub const MOBILE_SESSION: &str = "eoex.session";
    /// Mobile OAuth bearer token (secure store, raw string)
    pub const MOBILE_TOKEN: &str = "eoex.token";
    /// Theme preference
    pub const THEME: &str = "eoex.theme";
}

/// Key-value store with JSON helpers.
#[derive(Clone)]
pub struct LocalStore {
    entries: Arc<DashMap<String, String>>,
    file: Option<Arc<FileBackend>>,
}

struct FileBackend {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalStore {
    /// Open (or create on first write) a file-backed store.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let entries = DashMap::new();

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) if !contents.trim().is_empty() => {
                let map: BTreeMap<String, String> = serde_json::from_str(&contents)
                    .map_err(|e| {
                        AppError::Storage(format!("corrupt store {}: {}", path.display(), e))
                    })?;
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }

        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened local store");

        Ok(Self {
            entries: Arc::new(entries),
            file: Some(Arc::new(FileBackend {
                path,
                write_lock: Mutex::new(()),
            })),
        })
    }

    /// Create an in-memory store (nothing survives the process).
    pub fn new_memory() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            file: None,
        }
    }

    // ─── Raw Operations ──────────────────────────────────────────

    /// Read a raw string value.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    /// Write a raw string value.
    pub async fn set_raw(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush().await
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // ─── JSON Operations ─────────────────────────────────────────

    /// Serialize `value` to JSON and store it under `key`.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::Storage(format!("failed to serialize {}: {}", key, e)))?;
        self.set_raw(key, &json).await
    }

    /// Load and parse the value under `key`.
    ///
    /// Absent and unparseable entries both come back as `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unparseable stored value");
                None
            }
        }
    }

    /// Remove `key`. Removing an absent key is not an error.
    pub async fn clear(&self, key: &str) -> Result<(), AppError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush().await
    }

    /// Persist the current map if this store is file-backed.
    async fn flush(&self) -> Result<(), AppError> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let _guard = file.write_lock.lock().await;

        let snapshot: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        if let Some(parent) = file.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::Storage(format!("failed to create dir: {}", e)))?;
            }
        }

        let tmp = file.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| AppError::Storage(format!("failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &file.path)
            .await
            .map_err(|e| AppError::Storage(format!("failed to replace store: {}", e)))?;

        Ok(())
    }
}
