//! Services the machine after a failed brew: refills drained tanks and
//! empties a full trash bin. Plays the role of the person the machine would
//! otherwise wait for.

use log::info;

use crate::errors::ErrorKind;
use crate::mechanism::CoffeeBrewMechanism;

/// Performs the maintenance operation matching every recoverable problem in
/// the mechanism's aggregated error set. Precondition problems (a request out
/// of range) are left alone, retrying those needs a changed order. Returns
/// the kinds that were serviced.
pub fn service_machine(mechanism: &mut CoffeeBrewMechanism) -> Vec<ErrorKind> {
    let recoverable: Vec<ErrorKind> = mechanism
        .errors()
        .iter()
        .filter(|kind| kind.is_recoverable())
        .collect();
    for kind in &recoverable {
        match kind {
            ErrorKind::EmptyWaterTank => mechanism.refill_water_tank(),
            ErrorKind::EmptyMilkTank => mechanism.refill_milk_tank(),
            ErrorKind::NotEnoughBeansToGrind => mechanism.refill_beans_tank(),
            ErrorKind::FullTrash => mechanism.empty_trash_bin(),
            _ => continue,
        }
        info!("[REPLENISHER] Serviced {:?}", kind);
    }
    recoverable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CoffeeType, Order};

    #[test]
    fn should_service_a_drained_water_tank_and_let_the_brew_succeed() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let order = Order::new(CoffeeType::Espresso, 40, 300, None, false);
        while mechanism.make_coffee(&order).is_ok() {}
        let serviced = service_machine(&mut mechanism);
        assert_eq!(vec![ErrorKind::EmptyWaterTank], serviced);
        assert_eq!(true, mechanism.make_coffee(&order).is_ok());
    }

    #[test]
    fn should_service_a_full_trash_bin() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let order = Order::new(CoffeeType::Espresso, 20, 60, None, false);
        // fills the bin with one drink per portion of waste
        for _ in 0..4 {
            assert_eq!(true, mechanism.make_coffee(&order).is_ok());
        }
        assert_eq!(true, mechanism.make_coffee(&order).is_err());
        let serviced = service_machine(&mut mechanism);
        assert_eq!(vec![ErrorKind::FullTrash], serviced);
        assert_eq!(true, mechanism.make_coffee(&order).is_ok());
    }

    #[test]
    fn should_not_service_a_request_out_of_range() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let order = Order::new(CoffeeType::Espresso, 40, 10, None, false);
        assert_eq!(true, mechanism.make_coffee(&order).is_err());
        let serviced = service_machine(&mut mechanism);
        assert_eq!(true, serviced.is_empty());
    }

    #[test]
    fn should_do_nothing_on_a_healthy_machine() {
        let mut mechanism = CoffeeBrewMechanism::new();
        let serviced = service_machine(&mut mechanism);
        assert_eq!(true, serviced.is_empty());
    }
}
