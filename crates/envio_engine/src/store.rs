use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::sync::{PoisonError, RwLock};

use envio_utils::hash::HashMap;

use crate::error::StoreError;

// -----------------------------------------------------------------------------
// EnvStore

/// A flat namespace of named byte values.
///
/// [`read`](EnvStore::read) returns `None` for an absent variable. The engine
/// treats absent and empty the same way.
pub trait EnvStore: Send + Sync {
    fn read(&self, name: &str) -> Option<Vec<u8>>;

    fn write(&self, name: &str, value: &[u8]) -> Result<(), StoreError>;
}

fn check_write(name: &str, value: &[u8]) -> Result<(), StoreError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        log::warn!("rejected write to invalid variable name {name:?}");
        return Err(StoreError::InvalidName(name.to_string()));
    }
    if value.contains(&0) {
        log::warn!("rejected write of {name}: value contains a NUL byte");
        return Err(StoreError::NulInValue(name.to_string()));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// ProcessEnv

/// The environment of the current process.
///
/// Writes go through [`std::env::set_var`], which is not synchronized with
/// code reading the environment through libc. Callers sharing the process
/// environment with other threads must serialize access themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn read(&self, name: &str) -> Option<Vec<u8>> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        let value = std::env::var_os(name)?;

        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStringExt;
            Some(value.into_vec())
        }
        #[cfg(not(unix))]
        {
            match value.into_string() {
                Ok(value) => Some(value.into_bytes()),
                Err(_) => {
                    log::warn!("ignored non-UTF-8 value of {name}");
                    None
                }
            }
        }
    }

    #[expect(unsafe_code, reason = "the process environment is global state")]
    fn write(&self, name: &str, value: &[u8]) -> Result<(), StoreError> {
        check_write(name, value)?;

        #[cfg(unix)]
        let value = {
            use std::os::unix::ffi::OsStrExt;
            std::ffi::OsStr::from_bytes(value)
        };
        #[cfg(not(unix))]
        let value = match core::str::from_utf8(value) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("rejected write of {name}: value is not UTF-8");
                return Err(StoreError::NonUtf8Value(name.to_string()));
            }
        };

        // SAFETY: the name and value were checked above, so `set_var` does
        // not panic. Concurrent access to the environment is documented as
        // the caller's responsibility.
        unsafe { std::env::set_var(name, value) };
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// MemoryEnv

/// An in-memory store, mainly for tests and sandboxed callers.
///
/// Values are kept as raw bytes. Writes are checked with the same rules
/// as [`ProcessEnv`].
///
/// # Examples
///
/// ```
/// use envio_engine::{EnvStore, MemoryEnv};
///
/// let env = MemoryEnv::new().with_var("HOST", "localhost");
/// assert_eq!(env.read("HOST").as_deref(), Some(&b"localhost"[..]));
///
/// env.write("PORT", b"8080").unwrap();
/// assert_eq!(env.get("PORT").as_deref(), Some("8080"));
/// assert!(env.write("A=B", b"x").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv(RwLock<HashMap<String, Vec<u8>>>);

impl MemoryEnv {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, replacing any previous value.
    pub fn with_var(self, name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.as_ref().to_vec());
        self
    }

    /// Returns a variable as text, `None` if absent or not UTF-8.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = self.read(name)?;
        String::from_utf8(value).ok()
    }

    /// Removes a variable, returning its value.
    pub fn remove(&self, name: &str) -> Option<Vec<u8>> {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if the store holds no variable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of every variable, sorted by name.
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        let mut vars: Vec<_> = guard
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        vars.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        vars
    }
}

impl EnvStore for MemoryEnv {
    fn read(&self, name: &str) -> Option<Vec<u8>> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn write(&self, name: &str, value: &[u8]) -> Result<(), StoreError> {
        check_write(name, value)?;
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_vec());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{EnvStore, MemoryEnv, ProcessEnv};
    use crate::error::StoreError;

    #[test]
    fn memory_round_trip() {
        let env = MemoryEnv::new();
        assert!(env.is_empty());
        env.write("A", b"1").unwrap();
        env.write("B", &[0xFF, 0x41]).unwrap();
        assert_eq!(env.read("A"), Some(vec![b'1']));
        assert_eq!(env.get("B"), None);
        assert_eq!(env.len(), 2);

        let names: Vec<_> = env.snapshot().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);

        assert_eq!(env.remove("A"), Some(vec![b'1']));
        assert_eq!(env.read("A"), None);
    }

    #[test]
    fn invalid_writes() {
        let env = MemoryEnv::new();
        assert_eq!(
            env.write("", b"x"),
            Err(StoreError::InvalidName(String::new()))
        );
        assert_eq!(
            env.write("A\0", b"x"),
            Err(StoreError::InvalidName("A\0".into()))
        );
        assert_eq!(
            env.write("A", b"x\0y"),
            Err(StoreError::NulInValue("A".into()))
        );
        assert!(env.is_empty());
    }

    #[test]
    fn process_env_rejects_invalid_names() {
        assert_eq!(ProcessEnv.read("A=B"), None);
        assert_eq!(ProcessEnv.read(""), None);
        assert!(ProcessEnv.write("A=B", b"x").is_err());
    }
}
