//! Core abstractions for stereotype classification
//!
//! This module holds the data model, the registry, the classifier and
//! relationship builder, and the traits the input and output plugins
//! implement.

mod classifier;
mod error;
mod ingest;
pub mod logging;
mod model;
mod parser;
mod registry;
mod relationships;
mod renderer;
mod type_map;
mod types;

pub use classifier::*;
pub use error::*;
pub use ingest::*;
pub use logging::*;
pub use model::*;
pub use parser::*;
pub use registry::*;
pub use relationships::*;
pub use renderer::*;
pub use type_map::*;
pub use types::*;
