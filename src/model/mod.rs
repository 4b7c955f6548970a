pub mod abundance;
pub mod outcome;
pub mod record;

pub use abundance::{AbundanceLookup, AbundanceTable, LookupError};
pub use outcome::{Outcome, ScoredOutcome};
pub use record::{FeatureId, FeatureRecord};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
