//! Transform implementations for device records

mod dev_eui;

pub use dev_eui::{DevEuiPicker, MISSING_DEV_EUI};
