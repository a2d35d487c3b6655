//! Deterministic hash maps, re-exports *hashbrown* and *foldhash*.

/// A [`hashbrown::HashMap`] hashed with `foldhash` under its fixed seed.
///
/// Hashes only depend on the input, so iteration order is stable from one
/// run to the next.
///
/// # Examples
///
/// ```
/// use envio_utils::hash::HashMap;
///
/// let mut vars: HashMap<&str, &str> = HashMap::default();
/// vars.insert("ENV_A", "1");
/// assert_eq!(vars.get("ENV_A"), Some(&"1"));
/// ```
pub type HashMap<K, V> = hashbrown::HashMap<K, V, foldhash::fast::FixedState>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
