//! CLI helper functions

use crate::{
    etl::Pipeline,
    storage::{DeviceMapReader, LineWriter},
    transform::DevEuiPicker,
};
use eyre::Result;
use std::path::{Path, PathBuf};

/// Input path used when neither `--input` nor `DEVEUI_INPUT` is given
pub const DEFAULT_INPUT: &str = "components/devices-2000.json";

/// Output path used when neither `--output` nor `DEVEUI_OUTPUT` is given
pub const DEFAULT_OUTPUT: &str = "device_euis.txt";

/// Resolved input and output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolve paths from CLI flags, then environment variables, then defaults
///
/// Environment variables:
/// - DEVEUI_INPUT: device map JSON file
/// - DEVEUI_OUTPUT: text file to write devEUI values to
pub fn resolve_paths(input: Option<PathBuf>, output: Option<PathBuf>) -> Paths {
    let from_env = |name: &str| {
        std::env::var_os(name)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };

    Paths {
        input: input
            .or_else(|| from_env("DEVEUI_INPUT"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
        output: output
            .or_else(|| from_env("DEVEUI_OUTPUT"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    }
}

/// Extract every record's `info.devEUI` from `input` into `output`, one per line
///
/// Pipeline: DeviceMapReader → DevEuiPicker → LineWriter
///
/// Returns the number of lines written. Failures carry a
/// [`crate::Error`] reachable through `downcast_ref`.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    log::info!(
        "Extracting devEUI values from {} to {}",
        input.display(),
        output.display()
    );

    let pipeline = Pipeline::new(
        DeviceMapReader::new(input),
        DevEuiPicker::default(),
        LineWriter::new(output),
    );

    pipeline.run()
}
