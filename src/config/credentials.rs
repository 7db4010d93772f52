// Snapshot of provider secrets taken once at startup.

use std::collections::BTreeMap;

use super::constants::KNOWN_CREDENTIALS;

/// API keys and related environment values, captured when the process starts.
///
/// Handlers never touch the process environment; they ask this snapshot
/// instead. Empty values are treated as absent.
#[derive(Clone, Default)]
pub struct Credentials {
    values: BTreeMap<String, String>,
}

impl Credentials {
    /// Read every name in `KNOWN_CREDENTIALS` from the process environment.
    pub fn from_env() -> Self {
        Self::from_pairs(
            KNOWN_CREDENTIALS
                .iter()
                .filter_map(|name| std::env::var(name).ok().map(|v| (*name, v))),
        )
    }

    /// Build a snapshot from explicit pairs (tests, embedding).
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Names from `required` that are not configured, in input order.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.is_set(name))
            .collect()
    }

    /// Names of all configured entries (never the values).
    pub fn configured_names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}

// Keys must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("configured", &self.configured_names())
            .finish()
    }
}
