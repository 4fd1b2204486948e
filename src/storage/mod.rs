//! File system storage operations
//!
//! - Device map (JSON object) reading
//! - One-value-per-line text writing

mod device_map;
mod line_writer;

pub use device_map::{DeviceMapReader, DeviceRecord};
pub use line_writer::LineWriter;
