//! Environment port - read access to a string key/value namespace.

/// Read-only view of an environment namespace.
///
/// The resolver in [`crate::infrastructure::credentials`] takes an
/// `EnvSource` instead of reading the process environment directly, so the
/// lookup order can be exercised against an in-memory snapshot.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
