use std::{
    fmt,
    sync::{Arc, Weak},
};

use menus_core::TextComponent;
use menus_inventory::{Container, ItemStack, WindowType};
use parking_lot::Mutex;

use crate::menu::{ItemMenu, MenuId};

pub type SharedView = Arc<Mutex<InventoryView>>;

/// Tags a view with the menu that rendered it.
#[derive(Clone)]
pub struct MenuHolder {
    id: MenuId,
    menu: Weak<ItemMenu>,
}

impl MenuHolder {
    pub(crate) fn new(id: MenuId, menu: Weak<ItemMenu>) -> Self {
        Self { id, menu }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    /// The menu, unless it has been dropped since the view was opened
    pub fn menu(&self) -> Option<Arc<ItemMenu>> {
        self.menu.upgrade()
    }

    pub fn holds(&self, menu: &ItemMenu) -> bool {
        self.id == menu.id()
    }
}

impl fmt::Debug for MenuHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuHolder").field("id", &self.id).finish()
    }
}

/// A grid window as the client sees it.
#[derive(Debug)]
pub struct InventoryView {
    window_type: WindowType,
    title: TextComponent,
    slots: Vec<Option<ItemStack>>,
    holder: Option<MenuHolder>,
}

impl InventoryView {
    pub fn new(window_type: WindowType, title: TextComponent) -> Self {
        Self {
            window_type,
            title,
            slots: vec![None; window_type.slots()],
            holder: None,
        }
    }

    pub fn with_holder(mut self, holder: MenuHolder) -> Self {
        self.holder = Some(holder);
        self
    }

    pub fn holder(&self) -> Option<&MenuHolder> {
        self.holder.as_ref()
    }

    pub fn title(&self) -> &TextComponent {
        &self.title
    }

    pub(crate) fn replace_contents(&mut self, contents: Vec<Option<ItemStack>>) {
        for (slot, item) in self.slots.iter_mut().zip(contents) {
            *slot = item;
        }
    }

    pub fn shared(self) -> SharedView {
        Arc::new(Mutex::new(self))
    }
}

impl Container for InventoryView {
    fn window_type(&self) -> WindowType {
        self.window_type
    }

    fn window_name(&self) -> &TextComponent {
        &self.title
    }

    fn size(&self) -> usize {
        self.slots.len()
    }

    fn get_slot(&self, slot: usize) -> Option<&Option<ItemStack>> {
        self.slots.get(slot)
    }

    fn get_slot_mut(&mut self, slot: usize) -> Option<&mut Option<ItemStack>> {
        self.slots.get_mut(slot)
    }

    fn iter_slots<'s>(&'s self) -> Box<dyn Iterator<Item = &'s Option<ItemStack>> + 's> {
        Box::new(self.slots.iter())
    }
}

#[cfg(test)]
mod tests {
    use menus_inventory::{Container, InventoryError, ItemStack, WindowType};

    use super::InventoryView;

    #[test]
    fn set_slot_in_bounds() {
        let mut view = InventoryView::new(WindowType::Generic9x2, "Test".into());
        assert_eq!(view.size(), 18);
        view.set_slot(17, Some(ItemStack::new("minecraft:stone")))
            .unwrap();
        assert_eq!(
            view.get_slot(17),
            Some(&Some(ItemStack::new("minecraft:stone")))
        );
        assert_eq!(
            view.set_slot(18, None),
            Err(InventoryError::InvalidSlot(18))
        );
        assert!(view.holder().is_none());
    }
}
