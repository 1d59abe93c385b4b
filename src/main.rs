use std::env;

use log::{error, info};
use simple_logger::SimpleLogger;

use coffemachine::errors::{CoffeeMachineError, ErrorSet};
use coffemachine::mechanism::CoffeeBrewMechanism;
use coffemachine::orders_reader::read_orders_from_file;
use coffemachine::replenisher::service_machine;
use coffemachine::statistics::MachineReport;

fn main() {
    if SimpleLogger::new().env().init().is_err() {
        eprintln!("Could not initialize the logger");
    }
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("orders.json"));
    if let Err(err) = brew_orders(&path) {
        error!("[MACHINE] {}", err);
        std::process::exit(1);
    }
}

fn brew_orders(path: &str) -> Result<(), CoffeeMachineError> {
    let orders = read_orders_from_file(path)?;
    let mechanism = CoffeeBrewMechanism::new_shared();
    for (id, order) in orders.iter().enumerate() {
        let mut machine = mechanism.lock()?;
        match machine.make_coffee(order) {
            Ok(beverage) => {
                info!(
                    "[MACHINE] Order {} ready: {:?} of {} ml",
                    id, beverage.coffee_type, beverage.size
                );
            }
            Err(problems) => {
                info!(
                    "[MACHINE] Order {} failed: {}",
                    id,
                    format_problems(&problems)
                );
                if service_machine(&mut machine).is_empty() {
                    continue;
                }
                match machine.make_coffee(order) {
                    Ok(beverage) => info!(
                        "[MACHINE] Order {} ready after service: {:?} of {} ml",
                        id, beverage.coffee_type, beverage.size
                    ),
                    Err(problems) => info!(
                        "[MACHINE] Order {} failed again: {}",
                        id,
                        format_problems(&problems)
                    ),
                }
            }
        }
    }
    let machine = mechanism.lock()?;
    info!("{}", MachineReport::capture(&machine));
    Ok(())
}

fn format_problems(problems: &ErrorSet) -> String {
    problems
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
