use menus_core::text::{color::NamedColor, TextComponent};

use super::{display_accessors, ItemDisplay, MenuItem};
use crate::{event::ItemClickEvent, materials::Materials};

/// Sends the viewer back to the parent menu, or just closes the menu when there is none.
pub struct BackMenuItem {
    display: ItemDisplay,
}

impl BackMenuItem {
    pub fn new(materials: &Materials) -> Self {
        Self {
            display: ItemDisplay::new(
                TextComponent::text("Back").color_named(NamedColor::Red),
                materials.back_item.clone(),
            ),
        }
    }
}

impl MenuItem for BackMenuItem {
    display_accessors!(display);

    fn on_item_click(&self, event: &mut ItemClickEvent) {
        event.set_will_go_back(true);
    }
}
