use menus_inventory::InventoryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Unable to fit {0} slots into an inventory")]
    TooManySlots(usize),
    #[error("Row {row}, column {column} is not a slot, both start at 1")]
    InvalidPosition { row: usize, column: usize },
    #[error("Tristate value must be between 1-3, got {0}")]
    InvalidTristate(u8),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
