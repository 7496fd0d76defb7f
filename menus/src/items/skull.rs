use menus_core::TextComponent;
use menus_inventory::{item::SkullProfile, ItemStack};
use uuid::Uuid;

use super::{display_accessors, ItemDisplay, MenuItem};
use crate::{host::Viewer, materials::Materials};

/// Whose head a [`SkullMenuItem`] shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkullTarget {
    /// The player looking at the menu
    Viewer,
    Owner(Uuid),
    /// A base64 skin texture
    Texture(String),
}

pub struct SkullMenuItem {
    display: ItemDisplay,
    target: SkullTarget,
}

impl SkullMenuItem {
    pub fn new(display_name: impl Into<TextComponent>, materials: &Materials, target: SkullTarget) -> Self {
        Self {
            display: ItemDisplay::new(display_name, materials.skull_item.clone()),
            target,
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

    pub fn target(&self) -> &SkullTarget {
        &self.target
    }

    pub fn set_target(&mut self, target: SkullTarget) {
        self.target = target;
    }

    fn profile_for(&self, viewer: &dyn Viewer) -> SkullProfile {
        match &self.target {
            SkullTarget::Viewer => SkullProfile::Owner(viewer.uuid()),
            SkullTarget::Owner(uuid) => SkullProfile::Owner(*uuid),
            SkullTarget::Texture(texture) => SkullProfile::Texture(texture.clone()),
        }
    }
}

impl MenuItem for SkullMenuItem {
    display_accessors!(display);

    fn final_icon(&self, viewer: &dyn Viewer) -> ItemStack {
        self.display
            .icon
            .clone()
            .with_profile(self.profile_for(viewer))
            .set_name_and_lore(self.display.display_name.clone(), &self.display.lore)
    }
}
