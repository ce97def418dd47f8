use crate::ensemble::Filter;
use crate::error::Result;

/// Pass-through filter. Useful as a placeholder stage or as the sole member
/// of an ensemble that should expose the raw responses under its own key.
pub struct IdentityFilter;

impl Filter for IdentityFilter {
    fn name(&self) -> &'static str {
        "IdentityFilter"
    }

    fn apply(&self, resps: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
        Ok(resps)
    }
}
