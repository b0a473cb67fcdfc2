//! Repository modules implementing every lingo operation.
//!
//! Each module adds methods to `LingoService` via `impl LingoService` blocks.

pub mod dashboard;
pub mod group;
pub mod reset;
pub mod seed;
pub mod study;
pub mod word;
