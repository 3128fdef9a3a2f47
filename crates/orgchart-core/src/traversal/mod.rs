pub mod chain;
pub mod preorder;

pub use chain::chain_of_command;
pub use preorder::PreOrder;
