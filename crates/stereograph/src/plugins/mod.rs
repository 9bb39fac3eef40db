//! Plugin implementations for input decoding and diagram output
//!
//! Each plugin implements one of the core traits: `json` is a [`Parser`],
//! `yuml` and `dot` are [`Renderer`]s. The orchestrator wires them together.
//!
//! [`Parser`]: crate::core::Parser
//! [`Renderer`]: crate::core::Renderer

pub mod dot;
pub mod json;
pub mod orchestrator;
pub mod yuml;

pub use dot::*;
pub use json::*;
pub use orchestrator::*;
pub use yuml::*;
