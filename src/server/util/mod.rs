//! Small helpers shared across layers.

pub mod password;
pub mod payload;
pub mod random;
pub mod text;
