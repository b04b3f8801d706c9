//! District name → district identifier lookup.

use crate::error::ResolveError;
use crate::types::District;

/// The districts listed for one state at the time of fetching.
///
/// Not cached between poll cycles: each district search fetches a fresh
/// directory so renamed or newly added districts are picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictDirectory {
    pub state_code: u32,
    pub districts: Vec<District>,
}

impl DistrictDirectory {
    /// Returns the identifier of the first district named exactly `name`.
    ///
    /// Matching is case-sensitive and does not trim.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] listing every district name in the
    /// directory when none matches.
    pub fn resolve(&self, name: &str) -> Result<String, ResolveError> {
        let mut candidates = Vec::with_capacity(self.districts.len());
        for district in &self.districts {
            if district.name == name {
                return Ok(district.id.clone());
            }
            candidates.push(district.name.clone());
        }
        Err(ResolveError::NotFound {
            district: name.to_owned(),
            candidates,
        })
    }
}
