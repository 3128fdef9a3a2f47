use orgchart_core::traversal::PreOrder;
use orgchart_core::Chart;

/// Indented outline, one member per line, two spaces per level
///
/// ```text
/// Shadab Ali (1)
///   Member 2 (2)
///     Member 5 (5)
/// ```
pub fn render_outline(chart: &Chart) -> String {
    let mut out = String::new();
    for (depth, member) in PreOrder::new(chart.root()) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{} ({})\n", member.name, member.id));
    }
    out
}
