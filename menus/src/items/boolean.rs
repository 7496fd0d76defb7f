use menus_core::TextComponent;
use menus_inventory::ItemStack;

use super::{display_accessors, ItemDisplay, MenuItem};
use crate::{event::ItemClickEvent, host::Viewer, materials::Materials};

type ValueFn = Box<dyn Fn(&dyn Viewer) -> bool + Send + Sync>;

/// Shows one of two icons depending on a per-viewer value.
pub struct BooleanItem {
    display: ItemDisplay,
    true_icon: ItemStack,
    false_icon: ItemStack,
    value: ValueFn,
    display_names: Option<(TextComponent, TextComponent)>,
    value_lore: Option<(Vec<TextComponent>, Vec<TextComponent>)>,
}

impl BooleanItem {
    /// Green wool when `value` is true, red wool otherwise.
    pub fn new<F>(display_name: impl Into<TextComponent>, materials: &Materials, value: F) -> Self
    where
        F: Fn(&dyn Viewer) -> bool + Send + Sync + 'static,
    {
        Self::with_icons(
            display_name,
            materials,
            materials.green_wool.clone(),
            materials.red_wool.clone(),
            value,
        )
    }

    pub fn with_icons<F>(
        display_name: impl Into<TextComponent>,
        materials: &Materials,
        true_icon: ItemStack,
        false_icon: ItemStack,
        value: F,
    ) -> Self
    where
        F: Fn(&dyn Viewer) -> bool + Send + Sync + 'static,
    {
        Self {
            display: ItemDisplay::new(display_name, materials.unknown_item.clone()),
            true_icon,
            false_icon,
            value: Box::new(value),
            display_names: None,
            value_lore: None,
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

    /// Uses a different name depending on the value.
    pub fn with_display_names(
        mut self,
        when_true: impl Into<TextComponent>,
        when_false: impl Into<TextComponent>,
    ) -> Self {
        self.display_names = Some((when_true.into(), when_false.into()));
        self
    }

    /// Uses different lore depending on the value.
    pub fn with_value_lore(
        mut self,
        when_true: Vec<TextComponent>,
        when_false: Vec<TextComponent>,
    ) -> Self {
        self.value_lore = Some((when_true, when_false));
        self
    }

    pub fn value(&self, viewer: &dyn Viewer) -> bool {
        (self.value)(viewer)
    }

    pub fn display_name_for(&self, value: bool) -> &TextComponent {
        match &self.display_names {
            Some((when_true, _)) if value => when_true,
            Some((_, when_false)) => when_false,
            None => &self.display.display_name,
        }
    }

    pub fn lore_for(&self, value: bool) -> &[TextComponent] {
        match &self.value_lore {
            Some((when_true, _)) if value => when_true,
            Some((_, when_false)) => when_false,
            None => &self.display.lore,
        }
    }

    pub fn true_icon(&self) -> &ItemStack {
        &self.true_icon
    }

    pub fn false_icon(&self) -> &ItemStack {
        &self.false_icon
    }
}

impl MenuItem for BooleanItem {
    display_accessors!(display);

    fn final_icon(&self, viewer: &dyn Viewer) -> ItemStack {
        let value = self.value(viewer);
        let icon = if value {
            &self.true_icon
        } else {
            &self.false_icon
        };
        icon.clone()
            .set_name_and_lore(self.display_name_for(value).clone(), self.lore_for(value))
    }
}

type ToggleFn = Box<dyn Fn(&dyn Viewer) + Send + Sync>;

/// A [`BooleanItem`] that flips its value when clicked and re-renders the menu.
pub struct ToggleableMenuItem {
    item: BooleanItem,
    toggle: ToggleFn,
}

impl ToggleableMenuItem {
    pub fn new<F>(item: BooleanItem, toggle: F) -> Self
    where
        F: Fn(&dyn Viewer) + Send + Sync + 'static,
    {
        Self {
            item,
            toggle: Box::new(toggle),
        }
    }

    pub fn item(&self) -> &BooleanItem {
        &self.item
    }
}

impl MenuItem for ToggleableMenuItem {
    fn display_name(&self) -> &TextComponent {
        self.item.display_name()
    }

    fn icon(&self) -> &ItemStack {
        self.item.icon()
    }

    fn lore(&self) -> &[TextComponent] {
        self.item.lore()
    }

    fn final_icon(&self, viewer: &dyn Viewer) -> ItemStack {
        self.item.final_icon(viewer)
    }

    fn on_item_click(&self, event: &mut ItemClickEvent) {
        (self.toggle)(event.viewer().as_ref());
        event.set_will_update(true);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };

    use menus_core::TextComponent;
    use menus_inventory::container_click::{ClickType, MouseClick};

    use super::{BooleanItem, ToggleableMenuItem};
    use crate::{event::ItemClickEvent, headless::HeadlessHost, host::Viewer, items::MenuItem};

    #[test]
    fn picks_icon_by_value() {
        let host = HeadlessHost::new();
        let materials = host.materials();
        let alex = host.join("Alex");
        let steve = host.join("Steve");

        let item = BooleanItem::new("PvP", &materials, |viewer: &dyn Viewer| viewer.name() == "Alex")
            .with_display_names("PvP: on", "PvP: off");

        let icon = item.final_icon(alex.as_ref());
        assert_eq!(icon.item, "minecraft:green_wool");
        assert_eq!(icon.display_name, Some(TextComponent::text("PvP: on")));

        let icon = item.final_icon(steve.as_ref());
        assert_eq!(icon.item, "minecraft:red_wool");
        assert_eq!(icon.display_name, Some(TextComponent::text("PvP: off")));

        assert_eq!(item.icon().item, "minecraft:barrier");
    }

    #[test]
    fn lore_defaults_to_item_lore() {
        let materials = HeadlessHost::new().materials();
        let item = BooleanItem::new("Fly", &materials, |_: &dyn Viewer| true).with_lore(["Toggle flight"]);
        assert_eq!(item.lore_for(true), &[TextComponent::text("Toggle flight")]);
        assert_eq!(item.lore_for(false), &[TextComponent::text("Toggle flight")]);
        assert_eq!(item.display_name_for(false), &TextComponent::text("Fly"));
    }

    #[test]
    fn toggle_flips_and_requests_update() {
        let host = HeadlessHost::new();
        let materials = host.materials();
        let viewer = host.join("Alex");

        let state = Arc::new(AtomicBool::new(false));
        let read = state.clone();
        let write = state.clone();
        let item = ToggleableMenuItem::new(
            BooleanItem::new("Fly", &materials, move |_: &dyn Viewer| read.load(Ordering::Relaxed)),
            move |_: &dyn Viewer| {
                write.fetch_xor(true, Ordering::Relaxed);
            },
        );

        assert_eq!(item.final_icon(viewer.as_ref()).item, "minecraft:red_wool");

        let mut event = ItemClickEvent::new(viewer.clone(), ClickType::MouseClick(MouseClick::Left));
        event.set_will_close(true);
        item.on_item_click(&mut event);
        assert!(event.will_update());
        assert!(!event.will_close());
        assert!(state.load(Ordering::Relaxed));
        assert_eq!(item.final_icon(viewer.as_ref()).item, "minecraft:green_wool");
    }
}
