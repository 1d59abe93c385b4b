//! Coffee grinder. Takes beans from its tank and grinds them for the brew.

use log::debug;

use crate::constants::{BEANS_TANK_CAPACITY, GRINDER_CAPACITY};
use crate::container::Container;
use crate::device::Device;
use crate::errors::{ErrorKind, ErrorSet};

pub struct Grinder {
    beans_tank: Container,
    errors: ErrorSet,
}

impl Grinder {
    pub fn new() -> Grinder {
        Grinder {
            beans_tank: Container::full(BEANS_TANK_CAPACITY),
            errors: ErrorSet::new(),
        }
    }

    /// Grinds `amount` of beans. Amounts outside `1..=GRINDER_CAPACITY` are
    /// rejected without recording an error kind; a tank that cannot supply
    /// the amount records `NotEnoughBeansToGrind`.
    pub fn grind_beans(&mut self, amount: u64) -> bool {
        if amount == 0 || amount > GRINDER_CAPACITY {
            return false;
        }
        if self.beans_tank.withdraw(amount) {
            debug!("[GRINDER] Ground {} of beans", amount);
            return true;
        }
        self.add_error(ErrorKind::NotEnoughBeansToGrind);
        false
    }

    pub fn beans_tank(&self) -> &Container {
        &self.beans_tank
    }
}

impl Device for Grinder {
    /// Refills the beans tank and clears the grinder's errors. This is the
    /// "refill beans" maintenance operation.
    fn cleanup(&mut self) {
        self.beans_tank.refill();
        self.errors = ErrorSet::new();
    }

    fn device_errors(&self) -> ErrorSet {
        self.errors
    }

    fn add_error(&mut self, kind: ErrorKind) {
        self.errors.insert(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_grind_half_of_the_grinder_capacity() {
        let mut grinder = Grinder::new();
        assert_eq!(true, grinder.grind_beans(GRINDER_CAPACITY / 2));
        assert_eq!(true, grinder.device_errors().is_empty());
        assert_eq!(
            BEANS_TANK_CAPACITY - GRINDER_CAPACITY / 2,
            grinder.beans_tank().level()
        );
    }

    #[test]
    fn should_reject_grinding_0_beans() {
        let mut grinder = Grinder::new();
        assert_eq!(false, grinder.grind_beans(0));
        assert_eq!(BEANS_TANK_CAPACITY, grinder.beans_tank().level());
    }

    #[test]
    fn should_reject_grinding_over_the_grinder_capacity() {
        let mut grinder = Grinder::new();
        assert_eq!(false, grinder.grind_beans(GRINDER_CAPACITY + 1));
        assert_eq!(BEANS_TANK_CAPACITY, grinder.beans_tank().level());
    }

    #[test]
    fn should_run_out_of_beans_after_grinding_the_whole_tank() {
        let mut grinder = Grinder::new();
        for _ in 0..(BEANS_TANK_CAPACITY / GRINDER_CAPACITY) {
            assert_eq!(true, grinder.grind_beans(GRINDER_CAPACITY));
        }
        assert_eq!(false, grinder.grind_beans(GRINDER_CAPACITY));
        assert_eq!(
            true,
            grinder.device_errors().contains(ErrorKind::NotEnoughBeansToGrind)
        );
    }

    #[test]
    fn should_grind_again_after_a_refill() {
        let mut grinder = Grinder::new();
        for _ in 0..(BEANS_TANK_CAPACITY / GRINDER_CAPACITY) {
            grinder.grind_beans(GRINDER_CAPACITY);
        }
        grinder.grind_beans(GRINDER_CAPACITY);
        grinder.cleanup();
        assert_eq!(true, grinder.device_errors().is_empty());
        assert_eq!(true, grinder.grind_beans(GRINDER_CAPACITY));
    }
}
