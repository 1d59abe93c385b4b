//! Order descriptor handed to the machine by the presentation layer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoffeeMachineError;

/// The beverages the machine knows how to brew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoffeeType {
    Espresso,
    Americano,
    Latte,
}

impl FromStr for CoffeeType {
    type Err = CoffeeMachineError;

    fn from_str(name: &str) -> Result<CoffeeType, CoffeeMachineError> {
        match name {
            "espresso" => Ok(CoffeeType::Espresso),
            "americano" => Ok(CoffeeType::Americano),
            "latte" => Ok(CoffeeType::Latte),
            other => Err(CoffeeMachineError::UnknownRecipe(other.to_string())),
        }
    }
}

/// One coffee request. `extra_quantity` is the extra water of an americano or
/// the milk accounting of a latte; `contains_milk` is carried for the
/// presentation layer, the mechanism does not branch on it.
#[derive(Debug, Clone, Copy)]
pub struct Order {
    pub coffee_type: CoffeeType,
    pub beans_quantity: u64,
    pub size: u64,
    pub extra_quantity: Option<u64>,
    pub contains_milk: bool,
}

impl Order {
    pub fn new(
        coffee_type: CoffeeType,
        beans_quantity: u64,
        size: u64,
        extra_quantity: Option<u64>,
        contains_milk: bool,
    ) -> Order {
        Order {
            coffee_type,
            beans_quantity,
            size,
            extra_quantity,
            contains_milk,
        }
    }
}
