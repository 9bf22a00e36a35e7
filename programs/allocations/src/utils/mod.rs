pub mod fixed_point;
pub mod release;
pub mod time;
