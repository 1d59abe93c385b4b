//! Simulation core of a coffee machine.
//!
//! A [`mechanism::CoffeeBrewMechanism`] owns the simulated device parts
//! (water heater, milk heater, grinder, pressure pump, trash bin), runs the
//! fixed preparation pipeline and dispatches to the recipe of the ordered
//! coffee. Brews either deliver a [`recipe::Beverage`] or an
//! [`errors::ErrorSet`] of problems a presentation layer can show to the
//! user and service through the maintenance operations.

pub mod constants;
pub mod container;
pub mod device;
pub mod errors;
pub mod grinder;
pub mod mechanism;
pub mod milk_heater;
pub mod order;
pub mod orders_reader;
pub mod pressure_pump;
pub mod recipe;
pub mod replenisher;
pub mod statistics;
pub mod trash_bin;
pub mod water_heater;
