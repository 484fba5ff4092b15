//! Collaborator input boundary
//!
//! The scan core never talks to a camera directly; it polls a `VisionSource`
//! once per tick and otherwise stays pure.

pub mod vision;

pub use vision::{ScriptedVision, VisionSource};
