//! Arithmetic shared by the sharing engine.

pub mod rational;
pub mod wipe;
