//! Location directory
//!
//! In-process cache of store metadata keyed by location token. Loaded
//! once at startup from a JSON file; lookups are lock-free. Persisting
//! the directory itself is the platform's concern, not the bridge's.

use std::sync::Arc;

use dashmap::DashMap;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Location;

/// Token -> location metadata cache
#[derive(Clone, Default, Debug)]
pub struct LocationDirectory {
    by_token: Arc<DashMap<String, Arc<Location>>>,
}

impl LocationDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the directory from a JSON file containing an array of
    /// locations
    pub fn from_file(path: &str) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_message(
                ErrorCode::LocationDirectoryUnavailable,
                format!("Cannot read location directory {path}: {e}"),
            )
        })?;
        let locations: Vec<Location> = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_message(
                ErrorCode::LocationDirectoryUnavailable,
                format!("Cannot parse location directory {path}: {e}"),
            )
        })?;

        let directory = Self::new();
        for location in locations {
            directory.insert(location);
        }
        Ok(directory)
    }

    /// Insert or replace a location, keyed by its token
    pub fn insert(&self, location: Location) {
        self.by_token
            .insert(location.token.clone(), Arc::new(location));
    }

    /// Look up a location by token
    pub fn resolve(&self, token: &str) -> Option<Arc<Location>> {
        self.by_token.get(token).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Location {
        Location {
            token: "tok-1".to_string(),
            location_id: "214".to_string(),
            name: "Store #214 - Aurora".to_string(),
            timezone: "America/Denver".to_string(),
            state: "CO".to_string(),
        }
    }

    #[test]
    fn test_insert_and_resolve() {
        let directory = LocationDirectory::new();
        directory.insert(sample());

        let location = directory.resolve("tok-1").unwrap();
        assert_eq!(location.location_id, "214");
        assert!(directory.resolve("unknown").is_none());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&vec![sample()]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let directory = LocationDirectory::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(directory.len(), 1);
        assert!(directory.resolve("tok-1").is_some());
    }

    #[test]
    fn test_from_file_missing() {
        let err = LocationDirectory::from_file("/nonexistent/locations.json").unwrap_err();
        assert_eq!(err.code, ErrorCode::LocationDirectoryUnavailable);
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let err = LocationDirectory::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::LocationDirectoryUnavailable);
    }
}
