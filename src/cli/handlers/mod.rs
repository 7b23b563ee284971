//! Reusable command handler patterns

mod list;
mod outcome;

pub use list::run_list_command;
pub use outcome::{print_deletion, print_generation};
