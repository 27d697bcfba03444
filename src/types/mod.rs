//! Core types for roastline.

pub mod actor;
pub mod generation;
pub mod verse;

pub use actor::*;
pub use generation::*;
pub use verse::*;
