use std::collections::HashMap;

use thiserror::Error;

use crate::model::record::FeatureId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    #[error("no abundance recorded for feature {id} in scope {scope}")]
    Unknown { scope: String, id: String },
}

/// Population/abundance source supplied by the problem context.
///
/// Implementations must be pure: the same key always yields the same value
/// and a call never mutates shared state, so builders may call it once per
/// record without caching.
pub trait AbundanceLookup {
    fn abundance(&self, scope: &str, id: &FeatureId) -> Result<f64, LookupError>;
}

/// In-memory abundance map keyed by `(scope, rendered id)`.
///
/// Ids are compared by their text so that `5` read from JSON and `"5"` read
/// from a TSV table resolve to the same entry.
#[derive(Debug, Clone, Default)]
pub struct AbundanceTable {
    values: HashMap<(String, String), f64>,
}

impl AbundanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the key was already present; the first value is kept.
    pub fn insert(&mut self, scope: &str, id: &FeatureId, abundance: f64) -> bool {
        let key = (scope.to_string(), id.to_string());
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, abundance);
        true
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AbundanceLookup for AbundanceTable {
    fn abundance(&self, scope: &str, id: &FeatureId) -> Result<f64, LookupError> {
        let key = (scope.to_string(), id.to_string());
        self.values
            .get(&key)
            .copied()
            .ok_or_else(|| LookupError::Unknown {
                scope: scope.to_string(),
                id: key.1,
            })
    }
}
