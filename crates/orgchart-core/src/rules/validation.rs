use crate::errors::{OrgChartError, Result};
use crate::model::Member;

use super::invariants;

/// Validate an externally supplied root before it becomes a chart
///
/// Owned subordinate lists already rule out cycles and shared members, so the
/// one invariant left to check is identifier uniqueness.
///
/// # Errors
///
/// Returns `DuplicateMemberId` naming the smallest duplicated id.
pub fn validate_root(root: &Member) -> Result<()> {
    if let Some(member_id) = invariants::find_duplicate_ids(root).first().copied() {
        return Err(OrgChartError::DuplicateMemberId { member_id });
    }
    Ok(())
}
