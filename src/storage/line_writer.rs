//! Plain-text, one-value-per-line file writing

use crate::error::Error;
use crate::etl::Loader;

use eyre::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write strings to a file, each terminated by `\n`
///
/// The file is created if missing and truncated if present.
pub struct LineWriter {
    path: PathBuf,
}

impl LineWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write all lines, replacing any previous content
    pub fn write(&self, lines: &[String]) -> Result<usize, Error> {
        let io_err = |source| Error::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writeln!(writer, "{}", line).map_err(io_err)?;
        }

        // Flush explicitly, BufWriter swallows errors on drop
        writer.flush().map_err(io_err)?;

        log::debug!("Wrote {} lines to {}", lines.len(), self.path.display());
        Ok(lines.len())
    }
}

impl Loader for LineWriter {
    type Item = String;

    fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        Ok(self.write(&items)?)
    }
}
