use menus_core::text::{color::NamedColor, TextComponent};

use super::{display_accessors, ItemDisplay, MenuItem};
use crate::{event::ItemClickEvent, materials::Materials};

pub struct CloseMenuItem {
    display: ItemDisplay,
}

impl CloseMenuItem {
    pub fn new(materials: &Materials) -> Self {
        Self {
            display: ItemDisplay::new(
                TextComponent::text("Close").color_named(NamedColor::Red),
                materials.close_item.clone(),
            ),
        }
    }
}

impl MenuItem for CloseMenuItem {
    display_accessors!(display);

    fn on_item_click(&self, event: &mut ItemClickEvent) {
        event.set_will_close(true);
    }
}
