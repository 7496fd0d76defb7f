use menus_core::TextComponent;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

pub mod container_click;
mod error;
pub mod item;

pub use error::InventoryError;
pub use item::ItemStack;

/// https://wiki.vg/Inventory
///
/// Only the generic chest-like grids, menus never use the specialised windows.
#[derive(Debug, ToPrimitive, FromPrimitive, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Generic9x1,
    Generic9x2,
    // General-purpose 3-row inventory. Used by Chest, minecart with chest, ender chest, and barrel
    Generic9x3,
    Generic9x4,
    Generic9x5,
    // Used by large chests
    Generic9x6,
}

impl WindowType {
    pub const COLUMNS: usize = 9;

    /// The generic window with `rows` rows of 9 slots
    pub fn from_rows(rows: usize) -> Option<Self> {
        rows.checked_sub(1).and_then(Self::from_usize)
    }

    pub const fn rows(&self) -> usize {
        *self as usize + 1
    }

    pub const fn slots(&self) -> usize {
        self.rows() * Self::COLUMNS
    }
}

pub trait Container {
    fn window_type(&self) -> WindowType;

    fn window_name(&self) -> &TextComponent;

    fn size(&self) -> usize {
        self.window_type().slots()
    }

    fn get_slot(&self, slot: usize) -> Option<&Option<ItemStack>>;

    fn get_slot_mut(&mut self, slot: usize) -> Option<&mut Option<ItemStack>>;

    fn set_slot(&mut self, slot: usize, item: Option<ItemStack>) -> Result<(), InventoryError> {
        let Some(item_slot) = self.get_slot_mut(slot) else {
            return Err(InventoryError::InvalidSlot(slot));
        };
        *item_slot = item;
        Ok(())
    }

    fn iter_slots<'s>(&'s self) -> Box<dyn Iterator<Item = &'s Option<ItemStack>> + 's>;
}
