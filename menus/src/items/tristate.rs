use menus_core::TextComponent;
use menus_inventory::ItemStack;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::{display_accessors, ItemDisplay, MenuItem};
use crate::{error::MenuError, host::Viewer, materials::Materials};

/// A three-valued setting. The aliases only exist to make call sites read better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Tristate {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Tristate {
    pub const LOW: Self = Self::One;
    pub const MEDIUM: Self = Self::Two;
    pub const HIGH: Self = Self::Three;

    pub const RED: Self = Self::One;
    pub const YELLOW: Self = Self::Two;
    pub const GREEN: Self = Self::Three;

    pub const OFF: Self = Self::One;
    pub const SLOW: Self = Self::Two;
    pub const FAST: Self = Self::Three;

    pub const NO: Self = Self::One;
    pub const MAYBE: Self = Self::Two;
    pub const YES: Self = Self::Three;

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Result<Self, MenuError> {
        Self::from_u8(value).ok_or(MenuError::InvalidTristate(value))
    }
}

type StateFn = Box<dyn Fn(&dyn Viewer) -> Tristate + Send + Sync>;

/// Shows one of three icons depending on a per-viewer [`Tristate`].
pub struct TristateItem {
    display: ItemDisplay,
    icons: [ItemStack; 3],
    state: StateFn,
}

impl TristateItem {
    /// Red, yellow and green wool for one, two and three.
    pub fn new<F>(display_name: impl Into<TextComponent>, materials: &Materials, state: F) -> Self
    where
        F: Fn(&dyn Viewer) -> Tristate + Send + Sync + 'static,
    {
        Self::with_icons(
            display_name,
            materials,
            [
                materials.red_wool.clone(),
                materials.yellow_wool.clone(),
                materials.green_wool.clone(),
            ],
            state,
        )
    }

    pub fn with_icons<F>(
        display_name: impl Into<TextComponent>,
        materials: &Materials,
        icons: [ItemStack; 3],
        state: F,
    ) -> Self
    where
        F: Fn(&dyn Viewer) -> Tristate + Send + Sync + 'static,
    {
        Self {
            display: ItemDisplay::new(display_name, materials.unknown_item.clone()),
            icons,
            state: Box::new(state),
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

    pub fn state(&self, viewer: &dyn Viewer) -> Tristate {
        (self.state)(viewer)
    }

    pub fn icon_for(&self, state: Tristate) -> &ItemStack {
        match state {
            Tristate::One => &self.icons[0],
            Tristate::Two => &self.icons[1],
            Tristate::Three => &self.icons[2],
        }
    }
}

impl MenuItem for TristateItem {
    display_accessors!(display);

    fn final_icon(&self, viewer: &dyn Viewer) -> ItemStack {
        self.icon_for(self.state(viewer))
            .clone()
            .set_name_and_lore(self.display.display_name.clone(), &self.display.lore)
    }
}

#[cfg(test)]
mod tests {
    use menus_core::TextComponent;

    use super::{Tristate, TristateItem};
    use crate::{error::MenuError, headless::HeadlessHost, host::Viewer, items::MenuItem};

    #[test]
    fn aliases_share_values() {
        assert_eq!(Tristate::LOW, Tristate::RED);
        assert_eq!(Tristate::MAYBE, Tristate::Two);
        assert_eq!(Tristate::FAST.value(), 3);
        assert_eq!(Tristate::NO.value(), 1);
    }

    #[test]
    fn from_value_range() {
        assert_eq!(Tristate::from_value(1).unwrap(), Tristate::One);
        assert_eq!(Tristate::from_value(3).unwrap(), Tristate::YES);
        assert!(matches!(
            Tristate::from_value(0),
            Err(MenuError::InvalidTristate(0))
        ));
        assert!(matches!(
            Tristate::from_value(4),
            Err(MenuError::InvalidTristate(4))
        ));
    }

    #[test]
    fn icon_follows_state() {
        let host = HeadlessHost::new();
        let materials = host.materials();
        let alex = host.join("Alex");
        let steve = host.join("Steve");

        let item = TristateItem::new("Speed", &materials, |viewer: &dyn Viewer| {
            if viewer.name() == "Alex" {
                Tristate::FAST
            } else {
                Tristate::OFF
            }
        })
        .with_lore(["How fast you go"]);

        let icon = item.final_icon(alex.as_ref());
        assert_eq!(icon.item, "minecraft:green_wool");
        assert_eq!(icon.display_name, Some(TextComponent::text("Speed")));
        assert_eq!(icon.lore, vec![TextComponent::text("How fast you go")]);

        assert_eq!(item.final_icon(steve.as_ref()).item, "minecraft:red_wool");
        assert_eq!(item.icon_for(Tristate::MEDIUM).item, "minecraft:yellow_wool");
    }
}
