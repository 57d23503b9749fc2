//! Metadata storage trait.

use crate::StoreError;

/// Generic key-value store for bookkeeping values that don't belong in a
/// domain table (counters, configured owner, schema version).
pub trait MetaStore {
    /// Store a metadata value, replacing any previous one.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value.
    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Read a big-endian `u64` stored under `key`.
    fn get_meta_u64(&self, key: &str) -> Result<Option<u64>, StoreError> {
        match self.get_meta(key)? {
            None => Ok(None),
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    StoreError::Corruption(format!("meta {key}: expected 8 bytes, got {}", bytes.len()))
                })?;
                Ok(Some(u64::from_be_bytes(raw)))
            }
        }
    }

    /// Store a `u64` as big-endian bytes under `key`.
    fn put_meta_u64(&self, key: &str, value: u64) -> Result<(), StoreError> {
        self.put_meta(key, &value.to_be_bytes())
    }
}
