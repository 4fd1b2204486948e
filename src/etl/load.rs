//! Loader trait for loading data to destinations

use eyre::Result;

/// Loader trait for loading data to a destination
///
/// # Example
/// ```no_run
/// use deveui_extractor::etl::Loader;
/// use eyre::Result;
///
/// struct StdoutLoader;
///
/// impl Loader for StdoutLoader {
///     type Item = String;
///
///     fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
///         for item in &items {
///             println!("{item}");
///         }
///         Ok(items.len())
///     }
/// }
/// ```
pub trait Loader {
    /// The type of items to load
    type Item;

    /// Load items to the destination
    ///
    /// Returns the number of items written
    ///
    /// # Errors
    /// Returns an error if the destination cannot be opened or written
    fn load(&self, items: Vec<Self::Item>) -> Result<usize>;
}
