use crate::errors::{OrgChartError, Result};
use crate::model::MemberId;
use crate::ops::{lookup, Chart};

/// Chain of command from the root down to a member
///
/// Returns the ids along the reporting line in root-to-member order. The
/// root's own chain is just the root.
///
/// # Errors
/// * `MemberNotFound` - If the member is not in the chart
pub fn chain_of_command(chart: &Chart, member_id: MemberId) -> Result<Vec<MemberId>> {
    let path = lookup::find_path(chart.root(), member_id)
        .ok_or(OrgChartError::MemberNotFound { member_id })?;

    let mut chain = Vec::with_capacity(path.len() + 1);
    let mut node = chart.root();
    chain.push(node.id);

    for index in path {
        node = node
            .subordinates
            .get(index)
            .ok_or_else(|| OrgChartError::Internal {
                message: format!("path to member {} is stale", member_id),
            })?;
        chain.push(node.id);
    }

    Ok(chain)
}
