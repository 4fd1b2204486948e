//! devEUI picker transformer
//!
//! Turns one device record into the text line written for it.

use crate::error::{Error, json_type_name};
use crate::etl::Transformer;
use crate::storage::DeviceRecord;
use eyre::Result;
use serde_json::Value;

/// Text written for records with no usable `info.devEUI`.
pub const MISSING_DEV_EUI: &str = "";

/// Transformer that picks `info.devEUI` out of a device record
///
/// - a string value is written verbatim, unless it contains `\n` or `\r`;
///   then it is written as a quoted JSON string so the record keeps one line
/// - an absent or `null` value, or an absent or non-object `info`, becomes the sentinel
/// - any other JSON value is written in its compact JSON form
///
/// A record that is not a JSON object at all is rejected.
///
/// # Example
/// ```
/// use deveui_extractor::etl::Transformer;
/// use deveui_extractor::storage::DeviceRecord;
/// use deveui_extractor::transform::DevEuiPicker;
/// use serde_json::json;
///
/// let picker = DevEuiPicker::default();
/// let record = DeviceRecord::new("d1", json!({"info": {"devEUI": "ABCD1234"}}));
/// assert_eq!(picker.transform(record).unwrap(), "ABCD1234");
///
/// let record = DeviceRecord::new("d2", json!({"info": {}}));
/// assert_eq!(picker.transform(record).unwrap(), "");
/// ```
pub struct DevEuiPicker {
    sentinel: String,
}

impl DevEuiPicker {
    /// Create a picker that writes `sentinel` for records without a devEUI
    pub fn new(sentinel: impl Into<String>) -> Self {
        Self {
            sentinel: sentinel.into(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    fn pick(&self, record: &DeviceRecord) -> Result<String, Error> {
        let Value::Object(fields) = &record.value else {
            return Err(Error::RecordType {
                key: record.key.clone(),
                found: json_type_name(&record.value),
            });
        };

        let dev_eui = fields
            .get("info")
            .and_then(Value::as_object)
            .and_then(|info| info.get("devEUI"));

        Ok(match dev_eui {
            Some(value @ Value::String(s)) if s.contains(['\n', '\r']) => {
                log::debug!("Device '{}' has a line break in its devEUI", record.key);
                value.to_string()
            }
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                log::debug!("Device '{}' has no devEUI", record.key);
                self.sentinel.clone()
            }
            Some(other) => other.to_string(),
        })
    }
}

impl Default for DevEuiPicker {
    fn default() -> Self {
        Self::new(MISSING_DEV_EUI)
    }
}

impl Transformer for DevEuiPicker {
    type Input = DeviceRecord;
    type Output = String;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(self.pick(&input)?)
    }
}
