//! Per-beverage brew recipes. Every recipe starts from the basic coffee
//! pipeline and adds its own finishing step.

use serde::Serialize;

use crate::constants::MILK_FOR_LATHER;
use crate::errors::ErrorSet;
use crate::mechanism::CoffeeBrewMechanism;
use crate::order::{CoffeeType, Order};

/// The finished drink, the success token of a brew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Beverage {
    pub coffee_type: CoffeeType,
    pub size: u64,
}

impl Beverage {
    pub fn new(coffee_type: CoffeeType, size: u64) -> Beverage {
        Beverage { coffee_type, size }
    }

    /// Identifier of the picture the presentation layer shows for the drink.
    pub fn image(&self) -> &'static str {
        match self.coffee_type {
            CoffeeType::Espresso | CoffeeType::Americano => "/static/images/espresso.png",
            CoffeeType::Latte => "/static/images/latte.png",
        }
    }
}

/// Brewing strategy for one coffee type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Espresso,
    Americano,
    Latte,
}

impl From<CoffeeType> for Recipe {
    fn from(coffee_type: CoffeeType) -> Recipe {
        match coffee_type {
            CoffeeType::Espresso => Recipe::Espresso,
            CoffeeType::Americano => Recipe::Americano,
            CoffeeType::Latte => Recipe::Latte,
        }
    }
}

impl Recipe {
    /// Runs the recipe against the mechanism. A failed basic coffee
    /// short-circuits the recipe: the finishing step never runs and the
    /// aggregated problems propagate unchanged.
    pub fn brew(
        &self,
        mechanism: &mut CoffeeBrewMechanism,
        order: &Order,
    ) -> Result<Beverage, ErrorSet> {
        match self {
            Recipe::Espresso => {
                let size = mechanism.make_basic_coffee(order)?;
                Ok(Beverage::new(CoffeeType::Espresso, size))
            }
            Recipe::Americano => {
                let size = mechanism.make_basic_coffee(order)?;
                let extra_water = order.extra_quantity.unwrap_or_default();
                mechanism.boiling_water(extra_water)?;
                Ok(Beverage::new(CoffeeType::Americano, size + extra_water))
            }
            Recipe::Latte => {
                let size = mechanism.make_basic_coffee(order)?;
                mechanism.lather_milk()?;
                Ok(Beverage::new(CoffeeType::Latte, size + MILK_FOR_LATHER))
            }
        }
    }
}
