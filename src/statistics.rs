//! Snapshot report of the machine for operators and the presentation layer.

use std::fmt;

use serde::Serialize;

use crate::container::Container;
use crate::errors::ErrorKind;
use crate::mechanism::CoffeeBrewMechanism;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TankReport {
    pub remaining: u64,
    pub consumed: u64,
}

impl TankReport {
    fn capture(tank: &Container) -> TankReport {
        TankReport {
            remaining: tank.level(),
            consumed: tank.consumed(),
        }
    }
}

/// State of the machine at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MachineReport {
    pub drinks_brewed: u64,
    pub water: TankReport,
    pub milk: TankReport,
    pub beans: TankReport,
    pub trash_level: u64,
    pub problems: Vec<ErrorKind>,
}

impl MachineReport {
    pub fn capture(mechanism: &CoffeeBrewMechanism) -> MachineReport {
        MachineReport {
            drinks_brewed: mechanism.drinks_brewed(),
            water: TankReport::capture(mechanism.water_heater().water_tank()),
            milk: TankReport::capture(mechanism.milk_heater().milk_tank()),
            beans: TankReport::capture(mechanism.grinder().beans_tank()),
            trash_level: mechanism.trash_bin().current_level(),
            problems: mechanism.errors().iter().collect(),
        }
    }
}

impl fmt::Display for MachineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[STATISTICS] Drinks brewed={} | Tank=(remaining,consumed) | Water=({},{}) Milk=({},{}) Beans=({},{}) | Trash={}",
            self.drinks_brewed,
            self.water.remaining,
            self.water.consumed,
            self.milk.remaining,
            self.milk.consumed,
            self.beans.remaining,
            self.beans.consumed,
            self.trash_level,
        )?;
        if self.problems.is_empty() {
            return Ok(());
        }
        write!(f, " | Problems=")?;
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BEANS_TANK_CAPACITY, MILK_TANK_CAPACITY, WATER_TANK_CAPACITY};
    use crate::order::{CoffeeType, Order};

    #[test]
    fn should_capture_a_fresh_mechanism() {
        let mechanism = CoffeeBrewMechanism::new();
        let report = MachineReport::capture(&mechanism);
        assert_eq!(0, report.drinks_brewed);
        assert_eq!(WATER_TANK_CAPACITY, report.water.remaining);
        assert_eq!(MILK_TANK_CAPACITY, report.milk.remaining);
        assert_eq!(BEANS_TANK_CAPACITY, report.beans.remaining);
        assert_eq!(0, report.trash_level);
        assert_eq!(true, report.problems.is_empty());
    }

    #[test]
    fn should_capture_the_consumption_of_a_brew() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let order = Order::new(CoffeeType::Espresso, 50, 120, None, false);
        mechanism.make_coffee(&order).ok();
        let report = MachineReport::capture(&mechanism);
        assert_eq!(1, report.drinks_brewed);
        assert_eq!(WATER_TANK_CAPACITY - 120, report.water.remaining);
        assert_eq!(120, report.water.consumed);
        assert_eq!(BEANS_TANK_CAPACITY - 50, report.beans.remaining);
        assert_eq!(1, report.trash_level);
    }

    #[test]
    fn should_list_the_outstanding_problems() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let order = Order::new(CoffeeType::Espresso, 50, 10, None, false);
        mechanism.make_coffee(&order).ok();
        let report = MachineReport::capture(&mechanism);
        assert_eq!(vec![ErrorKind::NotEnoughWaterToBoil], report.problems);
        let line = report.to_string();
        assert_eq!(
            true,
            line.contains("Problems=Not enough water in heater to boil")
        );
    }
}
