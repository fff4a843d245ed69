//! Step definitions for scrum board behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
