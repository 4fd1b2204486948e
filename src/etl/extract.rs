//! Extractor trait for data extraction from various sources

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// # Example
/// ```no_run
/// use deveui_extractor::etl::Extractor;
/// use eyre::Result;
/// use std::path::PathBuf;
///
/// struct FileExtractor {
///     path: PathBuf,
/// }
///
/// impl Extractor for FileExtractor {
///     type Item = String;
///
///     fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(std::fs::read_to_string(&self.path)?
///             .lines()
///             .map(str::to_string)
///             .collect())
///     }
/// }
/// ```
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Extract all items from the source, in source order
    ///
    /// # Errors
    /// Returns an error if extraction fails (I/O, parsing, shape checks)
    fn extract(&self) -> Result<Vec<Self::Item>>;
}
