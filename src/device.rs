//! Shared contract of the simulated device parts.

use crate::errors::{ErrorKind, ErrorSet};

/// Common operations of every device part. The primary action of each device
/// stays an inherent method since its signature differs per device.
pub trait Device {
    /// Resets the device's operational state to factory defaults.
    fn cleanup(&mut self);

    /// Errors accumulated on the device since its last reset.
    fn device_errors(&self) -> ErrorSet;

    /// Records an error kind as present on the device.
    fn add_error(&mut self, kind: ErrorKind);
}
