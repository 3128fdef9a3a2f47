pub mod apply;
pub mod demo;
pub mod show;
