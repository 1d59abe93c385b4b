//! The brew mechanism. Owns every device part, runs the preparation pipeline
//! and dispatches to the recipe of the ordered coffee.

use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};
use crate::grinder::Grinder;
use crate::milk_heater::MilkHeater;
use crate::order::Order;
use crate::pressure_pump::PressurePump;
use crate::recipe::{Beverage, Recipe};
use crate::trash_bin::TrashBin;
use crate::water_heater::WaterHeater;

/// Handle to the one mechanism of the process, shared between all request
/// handlers. Callers serialize brews by locking around `make_coffee`.
pub type SharedMechanism = Arc<Mutex<CoffeeBrewMechanism>>;

/// Signal that a preparation step contributed an error and the rest of the
/// pipeline must not run. Never escapes `make_basic_coffee`.
struct StepAborted;

pub struct CoffeeBrewMechanism {
    water_heater: WaterHeater,
    milk_heater: MilkHeater,
    grinder: Grinder,
    pressure_pump: PressurePump,
    trash_bin: TrashBin,
    errors: ErrorSet,
    drinks_brewed: u64,
}

impl CoffeeBrewMechanism {
    pub fn new() -> CoffeeBrewMechanism {
        CoffeeBrewMechanism {
            water_heater: WaterHeater::new(),
            milk_heater: MilkHeater::new(),
            grinder: Grinder::new(),
            pressure_pump: PressurePump::new(),
            trash_bin: TrashBin::new(),
            errors: ErrorSet::new(),
            drinks_brewed: 0,
        }
    }

    /// Creates the mechanism behind a shared, lockable handle.
    pub fn new_shared() -> SharedMechanism {
        Arc::new(Mutex::new(CoffeeBrewMechanism::new()))
    }

    /// Brews the ordered coffee. The aggregated problem set is rebuilt for
    /// every attempt; device state carries over from previous brews until a
    /// maintenance operation resets it.
    pub fn make_coffee(&mut self, order: &Order) -> Result<Beverage, ErrorSet> {
        self.errors = ErrorSet::new();
        let recipe = Recipe::from(order.coffee_type);
        let result = recipe.brew(self, order);
        match &result {
            Ok(beverage) => {
                self.drinks_brewed += 1;
                info!(
                    "[MECHANISM] Brewed a {:?} of {} ml",
                    beverage.coffee_type, beverage.size
                );
            }
            Err(problems) => {
                debug!("[MECHANISM] Brew failed: {:?}", problems);
            }
        }
        result
    }

    /// The fixed preparation pipeline plus the final brew. Returns the size
    /// of the delivered drink, or the problems aggregated up to the step that
    /// failed.
    pub fn make_basic_coffee(&mut self, order: &Order) -> Result<u64, ErrorSet> {
        if self.run_preparation_steps(order).is_err() {
            return Err(self.errors);
        }
        Ok(self.run_brew_process(order))
    }

    fn run_preparation_steps(&mut self, order: &Order) -> Result<(), StepAborted> {
        self.step_check_trash()?;
        self.step_grind_beans(order.beans_quantity)?;
        self.step_boil_water(order.size)?;
        self.step_pressurize()?;
        Ok(())
    }

    fn step_check_trash(&mut self) -> Result<(), StepAborted> {
        self.trash_bin.check_capacity();
        let problems = self.trash_bin.device_errors();
        self.pull_device_errors(problems)
    }

    fn step_grind_beans(&mut self, beans_quantity: u64) -> Result<(), StepAborted> {
        self.grinder.grind_beans(beans_quantity);
        let problems = self.grinder.device_errors();
        self.pull_device_errors(problems)
    }

    fn step_boil_water(&mut self, size: u64) -> Result<(), StepAborted> {
        self.water_heater.run_process(size);
        let problems = self.water_heater.device_errors();
        self.pull_device_errors(problems)
    }

    fn step_pressurize(&mut self) -> Result<(), StepAborted> {
        self.pressure_pump.run_process();
        let problems = self.pressure_pump.device_errors();
        self.pull_device_errors(problems)
    }

    fn pull_device_errors(&mut self, problems: ErrorSet) -> Result<(), StepAborted> {
        self.errors.merge(problems);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(StepAborted)
        }
    }

    /// Pushes the hot water through the ground coffee into the cup. Releases
    /// the pump, resets the heater and drops the used grounds into the bin.
    fn run_brew_process(&mut self, order: &Order) -> u64 {
        self.pressure_pump.cleanup();
        self.water_heater.cleanup();
        self.trash_bin.add_trash();
        order.size
    }

    /// Boils one extra portion of water, for the americano finishing step.
    pub fn boiling_water(&mut self, quantity: u64) -> Result<(), ErrorSet> {
        self.water_heater.run_process(quantity);
        let problems = self.water_heater.device_errors();
        if problems.is_empty() {
            return Ok(());
        }
        self.errors.merge(problems);
        Err(self.errors)
    }

    /// Lathers milk, for the latte finishing step.
    pub fn lather_milk(&mut self) -> Result<(), ErrorSet> {
        self.milk_heater.run_process(&mut self.water_heater);
        let problems = self.milk_heater.device_errors();
        if problems.is_empty() {
            return Ok(());
        }
        self.errors.merge(problems);
        Err(self.errors)
    }

    /// Refills the water tank and forgets the empty-tank problem, on the
    /// heater and the milk heater alike.
    pub fn refill_water_tank(&mut self) {
        info!("[MECHANISM] Refilling the water tank");
        self.water_heater.refill_water_tank();
        self.milk_heater.clear_water_errors();
        self.errors.remove(ErrorKind::EmptyWaterTank);
    }

    /// Refills the beans tank and forgets the grinding problem.
    pub fn refill_beans_tank(&mut self) {
        info!("[MECHANISM] Refilling the beans tank");
        self.grinder.cleanup();
        self.errors.remove(ErrorKind::NotEnoughBeansToGrind);
    }

    /// Throws the trash away and forgets the full-bin problem.
    pub fn empty_trash_bin(&mut self) {
        info!("[MECHANISM] Emptying the trash bin");
        self.trash_bin.cleanup();
        self.errors.remove(ErrorKind::FullTrash);
    }

    /// Refills the milk tank and forgets the empty-tank problem.
    pub fn refill_milk_tank(&mut self) {
        info!("[MECHANISM] Refilling the milk tank");
        self.milk_heater.fill_milk();
        self.errors.remove(ErrorKind::EmptyMilkTank);
    }

    /// Problems left over from the last brew attempt and not yet serviced.
    pub fn errors(&self) -> ErrorSet {
        self.errors
    }

    pub fn drinks_brewed(&self) -> u64 {
        self.drinks_brewed
    }

    pub fn water_heater(&self) -> &WaterHeater {
        &self.water_heater
    }

    pub fn milk_heater(&self) -> &MilkHeater {
        &self.milk_heater
    }

    pub fn grinder(&self) -> &Grinder {
        &self.grinder
    }

    pub fn pressure_pump(&self) -> &PressurePump {
        &self.pressure_pump
    }

    pub fn trash_bin(&self) -> &TrashBin {
        &self.trash_bin
    }
}

impl Default for CoffeeBrewMechanism {
    fn default() -> CoffeeBrewMechanism {
        CoffeeBrewMechanism::new()
    }
}
