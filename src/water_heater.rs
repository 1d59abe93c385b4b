//! Water heater. Boils water for the brewer, the pressure pump and the milk
//! heater.

use log::debug;

use crate::constants::{
    BOILING_POINT, IDLE_WATER_TEMP, WATER_HEATER_CAPACITY, WATER_HEATER_MIN_CAPACITY,
    WATER_TANK_CAPACITY,
};
use crate::container::Container;
use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};

pub struct WaterHeater {
    water_tank: Container,
    water_temp: u64,
    current_capacity: u64,
    errors: ErrorSet,
}

impl WaterHeater {
    pub fn new() -> WaterHeater {
        WaterHeater {
            water_tank: Container::full(WATER_TANK_CAPACITY),
            water_temp: IDLE_WATER_TEMP,
            current_capacity: WATER_HEATER_MIN_CAPACITY,
            errors: ErrorSet::new(),
        }
    }

    /// Boils `water_to_boil` ml and sends it to the brewer. Records an error
    /// kind on any failure. The operational state is reset afterwards whether
    /// the boil worked or not.
    pub fn run_process(&mut self, water_to_boil: u64) -> bool {
        let boiled = self.prepare_to_boiling(water_to_boil);
        let result = boiled && self.is_water_boiling();
        self.cleanup();
        result
    }

    /// Withdraws `amount` from the tank and ramps the temperature up to the
    /// boiling point. Records `NotEnoughWaterToBoil` when the amount is out of
    /// the heater's range and `EmptyWaterTank` when the tank cannot supply it.
    pub fn prepare_to_boiling(&mut self, amount: u64) -> bool {
        self.current_capacity = amount;
        if !self.check_is_enough_water_capacity() {
            return false;
        }
        if !self.water_tank.withdraw(amount) {
            self.add_error(ErrorKind::EmptyWaterTank);
            return false;
        }
        debug!("[HEATER] Boiling {} ml of water", amount);
        for temp in self.water_temp..=BOILING_POINT {
            self.water_temp = temp;
        }
        true
    }

    /// Boils a full heater load so the pressure pump has hot water to work
    /// with, then checks the temperature.
    pub fn prepare_water_for_pump(&mut self) -> bool {
        self.prepare_to_boiling(WATER_HEATER_CAPACITY);
        self.is_water_boiling()
    }

    /// Checks that the water reached the boiling point, recording `BadTemp`
    /// otherwise.
    pub fn is_water_boiling(&mut self) -> bool {
        if self.water_temp != BOILING_POINT {
            self.add_error(ErrorKind::BadTemp);
            return false;
        }
        true
    }

    fn check_is_enough_water_capacity(&mut self) -> bool {
        let in_range = WATER_HEATER_MIN_CAPACITY <= self.current_capacity
            && self.current_capacity <= WATER_HEATER_CAPACITY;
        if !in_range {
            self.add_error(ErrorKind::NotEnoughWaterToBoil);
        }
        in_range
    }

    /// Refills the water tank to capacity and clears the heater's errors.
    pub fn refill_water_tank(&mut self) {
        self.water_tank.refill();
        self.errors = ErrorSet::new();
    }

    pub fn water_tank(&self) -> &Container {
        &self.water_tank
    }

    pub fn water_temp(&self) -> u64 {
        self.water_temp
    }
}

impl Device for WaterHeater {
    fn cleanup(&mut self) {
        self.current_capacity = WATER_HEATER_MIN_CAPACITY;
        self.water_temp = IDLE_WATER_TEMP;
    }

    fn device_errors(&self) -> ErrorSet {
        self.errors
    }

    fn add_error(&mut self, kind: ErrorKind) {
        self.errors.insert(kind);
    }
}
