//! Reads the list of coffee orders for the machine from a JSON document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::errors::CoffeeMachineError;
use crate::order::Order;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    coffee_type: String,
    beans_quantity: u64,
    size: u64,
    #[serde(default)]
    extra_quantity: Option<u64>,
    #[serde(default)]
    contains_milk: bool,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

/// Parses an order document. Unknown coffee types fail the whole document
/// with `UnknownRecipe`.
pub fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>, CoffeeMachineError> {
    let orders_config: OrdersConfiguration =
        serde_json::from_reader(reader).map_err(|_| CoffeeMachineError::FileReaderError)?;
    let orders = orders_config
        .orders
        .into_iter()
        .map(order_from_json)
        .collect::<Result<Vec<Order>, CoffeeMachineError>>()?;
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}

fn order_from_json(json_order: JsonOrder) -> Result<Order, CoffeeMachineError> {
    let coffee_type = json_order.coffee_type.parse()?;
    debug!("[READER] Added order {:?}", json_order);
    Ok(Order::new(
        coffee_type,
        json_order.beans_quantity,
        json_order.size,
        json_order.extra_quantity,
        json_order.contains_milk,
    ))
}

pub fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, CoffeeMachineError> {
    let file = File::open(path).map_err(|_| CoffeeMachineError::FileReaderError)?;
    parse_orders(BufReader::new(file))
}
