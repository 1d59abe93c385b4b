//! Capacity and simulation parameters of the coffee machine

/// Capacity of the main water tank, in ml
pub const WATER_TANK_CAPACITY: u64 = 1000;

/// Capacity of the milk tank, in ml
pub const MILK_TANK_CAPACITY: u64 = 300;

/// Water the milk heater boils to lather one portion of milk, in ml
pub const WATER_FOR_LATHER: u64 = 150;

/// Capacity of the coffee beans tank, in dg
pub const BEANS_TANK_CAPACITY: u64 = 500;

/// Maximum amount of water the heater can boil at once, in ml
pub const WATER_HEATER_CAPACITY: u64 = 350;

/// Minimum amount of water required to start boiling, in ml
pub const WATER_HEATER_MIN_CAPACITY: u64 = 50;

/// Temperature of boiling water, in C
pub const BOILING_POINT: u64 = 100;

/// Temperature of the heater at rest, in C
pub const IDLE_WATER_TEMP: u64 = 20;

/// Milk withdrawn from the tank for one lathering, in ml
pub const MILK_FOR_LATHER: u64 = 150;

/// Maximum amount of beans the grinder accepts at once, in dg
pub const GRINDER_CAPACITY: u64 = 200;

/// Pressure the pump must reach before brewing, in bar
pub const MAX_PRESSURE: u64 = 10;

/// Pressure of the pump at rest, in bar
pub const IDLE_PRESSURE: u64 = 1;

/// How many portions of waste fit in the trash bin
pub const TRASH_BIN_CAPACITY: u64 = 4;
