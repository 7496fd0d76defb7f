use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid slot {0}")]
    InvalidSlot(usize),
    #[error("Invalid click mode {0}")]
    InvalidMode(u8),
    #[error("Invalid button {button} for click mode {mode}")]
    InvalidButton { mode: u8, button: i8 },
    #[error("Player '{0}' tried to interact with a closed container")]
    ClosedContainerInteract(String),
    #[error("Invalid inventory packet")]
    InvalidPacket,
}
