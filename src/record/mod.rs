//! Test case records.
//!
//! A test case arrives as a JSON object:
//!
//! ```text
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2",  "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4",  "value": "213" }
//! }
//! ```
//!
//! `n` is the declared number of shares and `k` the threshold. Share
//! entries are keyed by the decimal form of their index. The map is sparse:
//! indices may be missing, and only indices `1..=n` are taken into account.
//!
//! Extraction is purely structural. Thresholds are checked and values are
//! decoded later, by the recovery processor.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RecoveryError;

/// The raw `{ base, value }` pair of one share.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShareEntry {
    /// Decimal representation of the radix.
    pub base: String,

    /// Digits of the share value in `base`.
    pub value: String,
}

impl ShareEntry {
    pub fn new(base: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }
}

/// A parsed test case.
///
/// Shares are kept ordered by index, so iteration never depends on the key
/// order of the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    n: u64,
    k: u64,
    shares: BTreeMap<u64, ShareEntry>,
}

#[derive(Deserialize)]
struct Keys {
    #[serde(deserialize_with = "count")]
    n: u64,
    #[serde(deserialize_with = "count")]
    k: u64,
}

/// Accepts `4`, `4.0` and `"4"`.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Float(f64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Float(f) if f >= 0.0 && f.fract() == 0.0 && f < 18_446_744_073_709_551_616.0 => {
            Ok(f as u64)
        }
        Count::Float(f) => Err(de::Error::custom(format!(
            "expected a non-negative integer, found {f}"
        ))),
        Count::Text(s) => s.parse().map_err(|_| {
            de::Error::custom(format!("expected a non-negative integer, found {s:?}"))
        }),
    }
}

/// Top-level record object. Unlike `Value`, a repeated key is an error
/// instead of silently keeping the last entry.
struct UniqueKeys(Map<String, Value>);

impl<'de> Deserialize<'de> for UniqueKeys {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueKeysVisitor;

        impl<'de> Visitor<'de> for UniqueKeysVisitor {
            type Value = UniqueKeys;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<UniqueKeys, A::Error> {
                let mut map = Map::new();

                while let Some(key) = access.next_key::<String>()? {
                    if map.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate key {key:?}")));
                    }

                    let value: Value = access.next_value()?;
                    map.insert(key, value);
                }

                Ok(UniqueKeys(map))
            }
        }

        deserializer.deserialize_map(UniqueKeysVisitor)
    }
}

impl TestCase {
    /// Builds a test case directly. Shares outside `1..=n` are dropped.
    pub fn new(n: u64, k: u64, shares: impl IntoIterator<Item = (u64, ShareEntry)>) -> Self {
        Self {
            n,
            k,
            shares: shares
                .into_iter()
                .filter(|(index, _)| (1..=n).contains(index))
                .collect(),
        }
    }

    /// Declared number of shares.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Reconstruction threshold.
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Present shares in ascending index order.
    pub fn shares(&self) -> impl Iterator<Item = (u64, &ShareEntry)> {
        self.shares.iter().map(|(index, entry)| (*index, entry))
    }

    /// The share at `index`, if present.
    pub fn share(&self, index: u64) -> Option<&ShareEntry> {
        self.shares.get(&index)
    }

    /// Extracts a test case from a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RecoveryError::MalformedRecord`] if the document is not an
    /// object, if `keys`, `n` or `k` is missing or not a non-negative
    /// integer, or if a share entry in range lacks a string `base` or
    /// `value`.
    pub fn from_value(value: &Value) -> Result<Self, RecoveryError> {
        let object = value
            .as_object()
            .ok_or_else(|| RecoveryError::malformed("record is not a JSON object"))?;

        let keys = object
            .get("keys")
            .ok_or_else(|| RecoveryError::malformed("missing `keys`"))?;
        let keys = Keys::deserialize(keys)
            .map_err(|e| RecoveryError::malformed(format!("invalid `keys`: {e}")))?;

        let mut shares = BTreeMap::new();
        for (key, entry) in object {
            if key == "keys" {
                continue;
            }

            let Some(index) = share_index(key).filter(|i| (1..=keys.n).contains(i)) else {
                debug!(key = %key, n = keys.n, "ignoring entry outside share range");
                continue;
            };

            let entry = ShareEntry::deserialize(entry)
                .map_err(|e| RecoveryError::malformed(format!("share {index}: {e}")))?;
            shares.insert(index, entry);
        }

        Ok(Self {
            n: keys.n,
            k: keys.k,
            shares,
        })
    }

    /// Reads and extracts a test case from a JSON file.
    ///
    /// The file is read fully into memory and closed before extraction.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecoveryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RecoveryError::MissingSource {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "read record");

        content.parse()
    }
}

impl FromStr for TestCase {
    type Err = RecoveryError;

    /// Rejects documents that repeat a top-level key, such as two entries
    /// for the same share index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let UniqueKeys(object) = serde_json::from_str(s)
            .map_err(|e| RecoveryError::malformed(format!("invalid JSON: {e}")))?;
        Self::from_value(&Value::Object(object))
    }
}

/// Share keys are canonical decimal integers: `"7"` is index 7, `"07"` is
/// not a share.
fn share_index(key: &str) -> Option<u64> {
    key.parse::<u64>()
        .ok()
        .filter(|index| index.to_string() == key)
}
