//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use eyre::Result;

/// ETL Pipeline that orchestrates Extract, Transform, and Load operations
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform from E::Item)
/// - `L`: Loader type (must load T::Output)
///
/// Every item is transformed before the loader runs, so a failing
/// extract or transform stage never touches the destination.
///
/// # Example
/// ```no_run
/// use deveui_extractor::etl::Pipeline;
/// use deveui_extractor::storage::{DeviceMapReader, LineWriter};
/// use deveui_extractor::transform::DevEuiPicker;
///
/// # fn example() -> eyre::Result<()> {
/// let pipeline = Pipeline::new(
///     DeviceMapReader::new("devices.json"),
///     DevEuiPicker::default(),
///     LineWriter::new("device_euis.txt"),
/// );
///
/// let count = pipeline.run()?;
/// println!("Processed {} items", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
    L: Loader<Item = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    /// Run the complete ETL pipeline
    ///
    /// Returns the number of items loaded. An empty extraction is still
    /// passed to the loader so the destination ends up empty rather than stale.
    ///
    /// # Errors
    /// Returns an error if any stage fails
    pub fn run(&self) -> Result<usize> {
        log::debug!("Extracting from source...");
        let items = self.extractor.extract()?;
        log::info!("Extracted {} items", items.len());

        if items.is_empty() {
            log::warn!("No items extracted, destination will be empty");
        }

        log::debug!("Transforming items...");
        let transformed = self.transformer.transform_many(items)?;
        log::debug!("Transformed {} items", transformed.len());

        log::debug!("Loading to destination...");
        let count = self.loader.load(transformed)?;
        log::info!("Loaded {} items", count);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockExtractor(Vec<i32>);

    impl Extractor for MockExtractor {
        type Item = i32;
        fn extract(&self) -> Result<Vec<Self::Item>> {
            Ok(self.0.clone())
        }
    }

    struct DoubleTransformer;

    impl Transformer for DoubleTransformer {
        type Input = i32;
        type Output = i32;
        fn transform(&self, input: Self::Input) -> Result<Self::Output> {
            if input < 0 {
                eyre::bail!("negative input");
            }
            Ok(input * 2)
        }
    }

    #[derive(Default)]
    struct RecordingLoader {
        calls: RefCell<Vec<Vec<i32>>>,
    }

    impl Loader for &RecordingLoader {
        type Item = i32;
        fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
            let len = items.len();
            self.calls.borrow_mut().push(items);
            Ok(len)
        }
    }

    #[test]
    fn test_pipeline() {
        let loader = RecordingLoader::default();
        let pipeline = Pipeline::new(MockExtractor(vec![1, 2, 3]), DoubleTransformer, &loader);

        let count = pipeline.run().unwrap();
        assert_eq!(count, 3);
        assert_eq!(*loader.calls.borrow(), vec![vec![2, 4, 6]]);
    }

    #[test]
    fn test_empty_pipeline_still_loads() {
        let loader = RecordingLoader::default();
        let pipeline = Pipeline::new(MockExtractor(vec![]), DoubleTransformer, &loader);

        let count = pipeline.run().unwrap();
        assert_eq!(count, 0);
        assert_eq!(loader.calls.borrow().len(), 1);
    }

    #[test]
    fn test_transform_failure_skips_loader() {
        let loader = RecordingLoader::default();
        let pipeline = Pipeline::new(MockExtractor(vec![1, -1]), DoubleTransformer, &loader);

        assert!(pipeline.run().is_err());
        assert!(loader.calls.borrow().is_empty());
    }
}
