pub mod allocation_state;
pub mod schedule;

pub use allocation_state::*;
pub use schedule::*;
