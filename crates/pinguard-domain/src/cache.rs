//! Result-caching contract for hosts that memoize rule outcomes.
//!
//! A key is computable, but the check is never cacheable: hosts must re-run it.

use crate::policy::PolicyConfiguration;

pub trait CacheContract {
    /// Identifier that changes whenever the outcome could change.
    fn cache_id(&self) -> String;

    fn is_cacheable(&self) -> bool;

    /// Whether a previously stored result may be reused.
    fn is_result_valid(&self, cached: &Self) -> bool;
}

impl CacheContract for PolicyConfiguration {
    fn cache_id(&self) -> String {
        self.strict.to_string()
    }

    fn is_cacheable(&self) -> bool {
        false
    }

    fn is_result_valid(&self, _cached: &Self) -> bool {
        false
    }
}
