//! Key-Value store with automatic serialization.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::KvError;

/// Type-safe store of named slots.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Slots are kept as raw JSON values, so
/// one unreadable slot does not poison the others.
///
/// The store is a cheap handle: clones share the same backing data. It is
/// single-threaded; the file-backed variant provides durability, not
/// concurrency control.
#[derive(Clone)]
pub struct KvStore {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    entries: BTreeMap<String, Value>,
    path: Option<PathBuf>,
}

impl KvStore {
    /// Open an empty in-memory store.
    ///
    /// Nothing survives the process; useful for tests and ephemeral demos.
    pub fn in_memory() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries: BTreeMap::new(),
                path: None,
            })),
        }
    }

    /// Open a store backed by a JSON file.
    ///
    /// The file holds a single JSON object mapping slot names to values. A
    /// missing file yields an empty store; a file whose contents cannot be
    /// parsed is discarded with a warning rather than refusing to open.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let kv = KvStore::open("storefront.json")?;
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, KvError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| KvError::Open(e.to_string()))?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding unreadable store file {}: {e}", path.display());
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                entries,
                path: Some(path),
            })),
        })
    }

    /// Get a value from a slot.
    ///
    /// Returns `None` if the slot doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = kv.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        let inner = self.inner.borrow();
        match inner.entries.get(key) {
            Some(value) => {
                let value: T = serde_json::from_value(value.clone())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a slot's value, overwriting any prior value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// kv.set("cart", &cart)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let value = serde_json::to_value(value)?;
        let mut inner = self.inner.borrow_mut();
        inner.entries.insert(key.to_string(), value);
        inner.flush()
    }

    /// Delete a slot.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// kv.delete("cart")?;
    /// ```
    pub fn delete(&self, key: &str) -> Result<(), KvError> {
        let mut inner = self.inner.borrow_mut();
        inner.entries.remove(key);
        inner.flush()
    }

    /// Check if a slot exists.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// if kv.exists("cart")? {
    ///     // Slot exists
    /// }
    /// ```
    pub fn exists(&self, key: &str) -> Result<bool, KvError> {
        Ok(self.inner.borrow().entries.contains_key(key))
    }

    /// Get all slot names in the store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let keys = kv.keys()?;
    /// for key in keys {
    ///     println!("Slot: {}", key);
    /// }
    /// ```
    pub fn keys(&self) -> Result<Vec<String>, KvError> {
        Ok(self.inner.borrow().entries.keys().cloned().collect())
    }
}

impl Inner {
    /// Rewrite the backing file, if there is one.
    fn flush(&self) -> Result<(), KvError> {
        if let Some(ref path) = self.path {
            let raw = serde_json::to_string_pretty(&self.entries)?;
            fs::write(path, raw).map_err(|e| KvError::Store(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        label: String,
        count: u32,
    }

    fn temp_path(name: &str) -> PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let unique = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "bazaar-kv-{name}-{}-{unique}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_get_missing_slot() {
        let kv = KvStore::in_memory();
        let value: Option<Sample> = kv.get("nothing").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_set_then_get() {
        let kv = KvStore::in_memory();
        let sample = Sample {
            label: "widget".to_string(),
            count: 3,
        };

        kv.set("sample", &sample).unwrap();
        let loaded: Option<Sample> = kv.get("sample").unwrap();
        assert_eq!(loaded, Some(sample));
    }

    #[test]
    fn test_set_overwrites() {
        let kv = KvStore::in_memory();
        kv.set("slot", &1u32).unwrap();
        kv.set("slot", &2u32).unwrap();

        assert_eq!(kv.get::<u32>("slot").unwrap(), Some(2));
    }

    #[test]
    fn test_delete() {
        let kv = KvStore::in_memory();
        kv.set("slot", &1u32).unwrap();
        kv.delete("slot").unwrap();

        assert!(!kv.exists("slot").unwrap());
        assert_eq!(kv.get::<u32>("slot").unwrap(), None);
    }

    #[test]
    fn test_keys() {
        let kv = KvStore::in_memory();
        kv.set("b", &1u32).unwrap();
        kv.set("a", &2u32).unwrap();

        assert_eq!(kv.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_clones_share_data() {
        let kv = KvStore::in_memory();
        let other = kv.clone();

        kv.set("slot", &7u32).unwrap();
        assert_eq!(other.get::<u32>("slot").unwrap(), Some(7));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let kv = KvStore::in_memory();
        kv.set("slot", &"just a string").unwrap();

        assert!(kv.get::<Sample>("slot").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_path("round-trip");
        let sample = Sample {
            label: "persisted".to_string(),
            count: 9,
        };

        {
            let kv = KvStore::open(&path).unwrap();
            kv.set("sample", &sample).unwrap();
        }

        let kv = KvStore::open(&path).unwrap();
        assert_eq!(kv.get::<Sample>("sample").unwrap(), Some(sample));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_missing_file() {
        let path = temp_path("missing");
        let kv = KvStore::open(&path).unwrap();

        assert!(kv.keys().unwrap().is_empty());
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let kv = KvStore::open(&path).unwrap();
        assert!(kv.keys().unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_slot_does_not_poison_others() {
        let path = temp_path("bad-slot");
        fs::write(&path, r#"{"bad": "oops", "good": {"label": "ok", "count": 1}}"#).unwrap();

        let kv = KvStore::open(&path).unwrap();
        assert!(kv.get::<Sample>("bad").is_err());
        assert_eq!(
            kv.get::<Sample>("good").unwrap(),
            Some(Sample {
                label: "ok".to_string(),
                count: 1
            })
        );

        let _ = fs::remove_file(&path);
    }
}
