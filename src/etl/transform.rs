//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for transforming data items
///
/// # Example
/// ```
/// use deveui_extractor::etl::Transformer;
/// use eyre::Result;
///
/// struct Upper;
///
/// impl Transformer for Upper {
///     type Input = String;
///     type Output = String;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.to_uppercase())
///     }
/// }
///
/// let out = Upper.transform_many(vec!["aa11".into()]).unwrap();
/// assert_eq!(out, vec!["AA11".to_string()]);
/// ```
pub trait Transformer {
    /// Input item type
    type Input;

    /// Output item type after transformation
    type Output;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if the item has an unusable shape
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, stopping at the first failure
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}
