use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a selected feature group. Upstream selectors emit either
/// numeric ids or names, and both must render back exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum FeatureId {
    Int(i64),
    /// Only holds values above `i64::MAX`.
    UInt(u64),
    Name(String),
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Int(v) => write!(f, "{v}"),
            FeatureId::UInt(v) => write!(f, "{v}"),
            FeatureId::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::Name(value.to_string())
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        FeatureId::Int(value)
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => FeatureId::Int(v),
            Err(_) => FeatureId::UInt(value),
        }
    }
}

struct FeatureIdVisitor;

impl Visitor<'_> for FeatureIdVisitor {
    type Value = FeatureId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a feature id (string or integer within 64 bits)")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FeatureId, E> {
        Ok(FeatureId::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FeatureId, E> {
        Ok(FeatureId::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FeatureId, E> {
        Ok(FeatureId::Name(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FeatureId, E> {
        Ok(FeatureId::Name(v))
    }
}

impl<'de> Deserialize<'de> for FeatureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FeatureIdVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    scope: String,
    id: FeatureId,
}

impl FeatureRecord {
    pub fn new(scope: impl Into<String>, id: impl Into<FeatureId>) -> Self {
        Self {
            scope: scope.into(),
            id: id.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn id(&self) -> &FeatureId {
        &self.id
    }
}
