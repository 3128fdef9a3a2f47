pub mod member;
pub mod move_record;

pub use member::{Member, MemberId};
pub use move_record::MoveRecord;
