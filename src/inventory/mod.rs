// Inventory building: name normalization, aggregation and YAML output
pub mod aggregate;
pub mod collector;
pub mod emit;
pub mod normalize;

pub use collector::collect_full_inventory;
