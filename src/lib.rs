//! devEUI extractor
//!
//! Reads a JSON device map (`{"<id>": {"info": {"devEUI": ...}}, ...}`) and
//! writes one devEUI per line to a text file, in document order.

pub mod cli;
pub mod error;
pub mod etl;
pub mod storage;
pub mod transform;

// Re-exports for convenience
pub use cli::run;
pub use error::{Error, ErrorKind};
pub use etl::{Extractor, Loader, Pipeline, Transformer};
pub use storage::{DeviceMapReader, DeviceRecord, LineWriter};
pub use transform::DevEuiPicker;
