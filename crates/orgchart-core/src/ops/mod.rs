pub mod chart;
pub mod lookup;
pub mod reparent;

pub use chart::Chart;
pub use reparent::{reparent, Placement, ReparentOutcome};
