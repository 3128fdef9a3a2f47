//! Demo command
//!
//! Usage: orgchart demo
//!
//! Builds the reference chart (1 "Shadab Ali" with 2 -> 5, 3 and 4), moves
//! member 5 under member 3, then undoes and redoes the move, printing the
//! outline after each step.

use clap::Args;
use orgchart_core::errors::ExError;
use orgchart_core::{HierarchyManager, Member, MemberId};

use crate::render;

#[derive(Debug, Args)]
pub struct DemoArgs {}

fn demo_root() -> Member {
    Member::new(1, "Shadab Ali")
        .with_subordinate(Member::new(2, "Member 2").with_subordinate(Member::new(5, "Member 5")))
        .with_subordinate(Member::new(3, "Member 3"))
        .with_subordinate(Member::new(4, "Member 4"))
}

/// Execute demo command
pub fn execute(_args: DemoArgs) -> Result<(), ExError> {
    let mut manager = HierarchyManager::from_root(demo_root())?;
    print_step("initial", &manager);

    manager.move_member(MemberId(5), Some(MemberId(3)))?;
    print_step("after move 5 -> 3", &manager);

    manager.undo()?;
    print_step("after undo", &manager);

    manager.redo()?;
    print_step("after redo", &manager);

    Ok(())
}

fn print_step(label: &str, manager: &HierarchyManager) {
    println!("== {} ==", label);
    print!("{}", render::render_outline(manager.chart()));
}
