//! Pressure pump. Compresses the hot water before it is pushed through the
//! ground coffee.

use crate::constants::{IDLE_PRESSURE, MAX_PRESSURE};
use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};

pub struct PressurePump {
    current_pressure: u64,
    errors: ErrorSet,
}

impl PressurePump {
    pub fn new() -> PressurePump {
        PressurePump {
            current_pressure: IDLE_PRESSURE,
            errors: ErrorSet::new(),
        }
    }

    /// Compresses the water with a deterministic ramp up to the maximum
    /// pressure and reports whether it was reached.
    pub fn run_process(&mut self) -> bool {
        for bar in 0..=MAX_PRESSURE {
            self.current_pressure = bar;
        }
        self.check_current_pressure()
    }

    fn check_current_pressure(&self) -> bool {
        self.current_pressure == MAX_PRESSURE
    }

    pub fn current_pressure(&self) -> u64 {
        self.current_pressure
    }
}

impl Device for PressurePump {
    /// Opens the valve and releases the pressurized water.
    fn cleanup(&mut self) {
        self.current_pressure = IDLE_PRESSURE;
    }

    fn device_errors(&self) -> ErrorSet {
        self.errors
    }

    fn add_error(&mut self, kind: ErrorKind) {
        self.errors.insert(kind);
    }
}
