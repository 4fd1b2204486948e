//! Core ETL (Extract, Transform, Load) abstractions
//!
//! The devEUI export is one pass through these traits: a reader extracts
//! device records, a transformer turns each record into an output line, and
//! a writer loads the lines into the destination file.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::Pipeline;
pub use transform::Transformer;
