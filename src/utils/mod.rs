pub mod clock;
pub mod signal;
