//! Shape digest for charts
//!
//! The digest is a SHA-256 over the canonical JSON of the root member, so it
//! covers ids, names and subordinate order. Two charts have the same digest
//! exactly when they serialize identically. Tests use it to check that an
//! undo/redo sequence returns the tree to a known shape.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::ops::Chart;

/// Hex-encoded SHA-256 digest of the chart's shape (64 characters)
///
/// # Errors
///
/// Returns `Serialization` if the chart cannot be encoded as JSON.
///
/// # Example
///
/// ```
/// use orgchart_core::{model::Member, ops::Chart, snapshot::compute_shape_digest};
///
/// let chart = Chart::new(Member::new(1, "root")).unwrap();
/// let digest = compute_shape_digest(&chart).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_shape_digest(chart: &Chart) -> Result<String> {
    let canonical = serde_json::to_string(chart.root())?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;

    fn chart(order: &[u64]) -> Chart {
        let mut root = Member::new(1, "root");
        for id in order {
            root = root.with_subordinate(Member::new(*id, id.to_string()));
        }
        Chart::new(root).unwrap()
    }

    #[test]
    fn test_digest_is_deterministic() {
        let a = compute_shape_digest(&chart(&[2, 3])).unwrap();
        let b = compute_shape_digest(&chart(&[2, 3])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_is_order_sensitive() {
        let a = compute_shape_digest(&chart(&[2, 3])).unwrap();
        let b = compute_shape_digest(&chart(&[3, 2])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = compute_shape_digest(&chart(&[])).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
