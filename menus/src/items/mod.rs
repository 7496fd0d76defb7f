//! Everything that can sit in a menu slot.
//!
//! Items are shared between menus and viewers as `Arc<dyn MenuItem>`, so they
//! only get `&self`; items with per-viewer state compute it from the viewer.

use menus_core::TextComponent;
use menus_inventory::ItemStack;

use crate::{event::ItemClickEvent, host::Viewer};

mod back;
mod boolean;
mod close;
mod skull;
mod tristate;

pub use back::BackMenuItem;
pub use boolean::{BooleanItem, ToggleableMenuItem};
pub use close::CloseMenuItem;
pub use skull::{SkullMenuItem, SkullTarget};
pub use tristate::{Tristate, TristateItem};

pub type ClickHandler = Box<dyn Fn(&mut ItemClickEvent) + Send + Sync>;

pub trait MenuItem: Send + Sync {
    fn display_name(&self) -> &TextComponent;

    fn icon(&self) -> &ItemStack;

    /// Empty when the item has no lore
    fn lore(&self) -> &[TextComponent];

    /// The icon `viewer` sees in the slot.
    fn final_icon(&self, _viewer: &dyn Viewer) -> ItemStack {
        self.icon()
            .clone()
            .set_name_and_lore(self.display_name().clone(), self.lore())
    }

    /// Called for every click, before the button specific handlers.
    fn on_item_click(&self, _event: &mut ItemClickEvent) {}

    fn on_item_left_click(&self, _event: &mut ItemClickEvent) {}

    fn on_item_right_click(&self, _event: &mut ItemClickEvent) {}

    fn on_item_middle_click(&self, _event: &mut ItemClickEvent) {}
}

/// Name, icon and lore of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDisplay {
    pub display_name: TextComponent,
    pub icon: ItemStack,
    pub lore: Vec<TextComponent>,
}

impl ItemDisplay {
    pub fn new(display_name: impl Into<TextComponent>, icon: ItemStack) -> Self {
        Self {
            display_name: display_name.into(),
            icon,
            lore: vec![],
        }
    }

    pub fn with_lore<I, L>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<TextComponent>,
    {
        self.lore = lore.into_iter().map(Into::into).collect();
        self
    }
}

macro_rules! display_accessors {
    ($field:ident) => {
        fn display_name(&self) -> &::menus_core::TextComponent {
            &self.$field.display_name
        }

        fn icon(&self) -> &::menus_inventory::ItemStack {
            &self.$field.icon
        }

        fn lore(&self) -> &[::menus_core::TextComponent] {
            &self.$field.lore
        }
    };
}
pub(crate) use display_accessors;

/// An item that always looks the same.
pub struct StaticMenuItem {
    display: ItemDisplay,
    on_click: Option<ClickHandler>,
    on_left_click: Option<ClickHandler>,
    on_right_click: Option<ClickHandler>,
    on_middle_click: Option<ClickHandler>,
}

impl StaticMenuItem {
    pub fn new(display_name: impl Into<TextComponent>, icon: ItemStack) -> Self {
        Self::from_display(ItemDisplay::new(display_name, icon))
    }

    pub fn from_display(display: ItemDisplay) -> Self {
        Self {
            display,
            on_click: None,
            on_left_click: None,
            on_right_click: None,
            on_middle_click: None,
        }
    }

    pub fn with_lore<I, L>(mut self, lore: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<TextComponent>,
    {
        self.display = self.display.with_lore(lore);
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ItemClickEvent) + Send + Sync + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn on_left_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ItemClickEvent) + Send + Sync + 'static,
    {
        self.on_left_click = Some(Box::new(handler));
        self
    }

    pub fn on_right_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ItemClickEvent) + Send + Sync + 'static,
    {
        self.on_right_click = Some(Box::new(handler));
        self
    }

    pub fn on_middle_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut ItemClickEvent) + Send + Sync + 'static,
    {
        self.on_middle_click = Some(Box::new(handler));
        self
    }
}

fn run(handler: &Option<ClickHandler>, event: &mut ItemClickEvent) {
    if let Some(handler) = handler {
        handler(event);
    }
}

impl MenuItem for StaticMenuItem {
    display_accessors!(display);

    fn on_item_click(&self, event: &mut ItemClickEvent) {
        run(&self.on_click, event);
    }

    fn on_item_left_click(&self, event: &mut ItemClickEvent) {
        run(&self.on_left_click, event);
    }

    fn on_item_right_click(&self, event: &mut ItemClickEvent) {
        run(&self.on_right_click, event);
    }

    fn on_item_middle_click(&self, event: &mut ItemClickEvent) {
        run(&self.on_middle_click, event);
    }
}

#[cfg(test)]
mod tests {
    use menus_core::TextComponent;
    use menus_inventory::ItemStack;

    use super::{MenuItem, StaticMenuItem};
    use crate::headless::HeadlessHost;

    #[test]
    fn final_icon_carries_name_and_lore() {
        let host = HeadlessHost::new();
        let viewer = host.join("Alex");
        let item = StaticMenuItem::new("Diamonds", ItemStack::new("minecraft:diamond").with_count(3))
            .with_lore(["Shiny", "Rare"]);

        let icon = item.final_icon(viewer.as_ref());
        assert_eq!(icon.item, "minecraft:diamond");
        assert_eq!(icon.item_count, 3);
        assert_eq!(icon.display_name, Some(TextComponent::text("Diamonds")));
        assert_eq!(icon.lore, vec![TextComponent::text("Shiny"), TextComponent::text("Rare")]);
        // the stored icon itself is left alone
        assert_eq!(item.icon().display_name, None);
    }

    #[test]
    fn no_lore_is_empty() {
        let item = StaticMenuItem::new(" ", ItemStack::new("minecraft:black_stained_glass_pane"));
        assert!(item.lore().is_empty());
    }
}
