//! Milk heater. Lathers milk for lattes with hot water from the water heater.

use log::debug;

use crate::constants::{MILK_FOR_LATHER, MILK_TANK_CAPACITY, WATER_FOR_LATHER};
use crate::container::Container;
use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};
use crate::water_heater::WaterHeater;

pub struct MilkHeater {
    milk_tank: Container,
    errors: ErrorSet,
}

impl MilkHeater {
    pub fn new() -> MilkHeater {
        MilkHeater {
            milk_tank: Container::full(MILK_TANK_CAPACITY),
            errors: ErrorSet::new(),
        }
    }

    /// Lathers one portion of milk. Needs the water heater to boil the
    /// lathering water and to prepare hot water for the pump; only when both
    /// worked is milk taken from the tank. The heater is borrowed from the
    /// mechanism for the duration of the process.
    pub fn run_process(&mut self, water_heater: &mut WaterHeater) -> bool {
        let boiled = water_heater.prepare_to_boiling(WATER_FOR_LATHER);
        let pump_ready = water_heater.prepare_water_for_pump();
        if boiled && pump_ready {
            if self.milk_tank.withdraw(MILK_FOR_LATHER) {
                debug!("[MILK HEATER] Lathered {} ml of milk", MILK_FOR_LATHER);
                return true;
            }
            self.add_error(ErrorKind::EmptyMilkTank);
            return false;
        }
        if !boiled {
            self.add_error(ErrorKind::NotEnoughWaterToBoil);
        }
        if !pump_ready {
            self.add_error(ErrorKind::PumpError);
        }
        false
    }

    /// Forgets the water-related errors after the water tank was refilled.
    pub fn clear_water_errors(&mut self) {
        self.errors.remove(ErrorKind::NotEnoughWaterToBoil);
        self.errors.remove(ErrorKind::PumpError);
    }

    /// Refills the milk tank to capacity and clears the empty-tank error.
    pub fn fill_milk(&mut self) {
        self.milk_tank.refill();
        self.errors.remove(ErrorKind::EmptyMilkTank);
    }

    pub fn milk_tank(&self) -> &Container {
        &self.milk_tank
    }
}

impl Device for MilkHeater {
    fn cleanup(&mut self) {}

    fn device_errors(&self) -> ErrorSet {
        self.errors
    }

    fn add_error(&mut self, kind: ErrorKind) {
        self.errors.insert(kind);
    }
}
