use std::sync::{Arc, Once, Weak};

use menus_config::MenuConfiguration;
use menus_core::TextComponent;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::{
    event::ClickSound,
    host::MenuHost,
    items::{MenuItem, StaticMenuItem},
    listener::MenuListener,
    materials::Materials,
    menu::ItemMenu,
};

/// The handle a plugin creates its menus with.
///
/// Holds the host, the configuration and the icons resolved against the
/// host, and makes sure the plugin's [`MenuListener`] is registered once.
pub struct MenuPlugin {
    this: Weak<MenuPlugin>,
    name: String,
    host: Arc<dyn MenuHost>,
    config: MenuConfiguration,
    materials: Materials,
    empty_slot_item: Arc<dyn MenuItem>,
    listener: Once,
    paginated: Mutex<Vec<Weak<ItemMenu>>>,
}

impl MenuPlugin {
    pub fn new(name: impl Into<String>, host: Arc<dyn MenuHost>, config: MenuConfiguration) -> Arc<Self> {
        let materials = Materials::resolve(|item| host.lookup_material(item), &config.icons);
        let empty_slot_item: Arc<dyn MenuItem> = Arc::new(StaticMenuItem::new(
            TextComponent::text(" "),
            materials.empty_item.clone(),
        ));
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            name: name.into(),
            host,
            config,
            materials,
            empty_slot_item,
            listener: Once::new(),
            paginated: Mutex::new(Vec::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &Arc<dyn MenuHost> {
        &self.host
    }

    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// The filler used for empty slots and for page slots past the end of the list.
    pub fn empty_slot_item(&self) -> Arc<dyn MenuItem> {
        self.empty_slot_item.clone()
    }

    pub fn click_sound(&self) -> ClickSound {
        ClickSound {
            sound: self.config.click_sound.clone(),
            volume: self.config.click_volume,
            pitch: self.config.click_pitch,
        }
    }

    /// Registers this plugin's listener with the host. Only the first call does anything.
    pub fn register_listener(&self) {
        self.listener.call_once(|| {
            log::debug!("Registering menu listener for {}", self.name);
            self.host
                .register_listener(MenuListener::new(self.this.clone()));
        });
    }

    pub fn is_listener_registered(&self) -> bool {
        self.listener.is_completed()
    }

    pub(crate) fn track_paginated(&self, menu: &Arc<ItemMenu>) {
        let mut paginated = self.paginated.lock();
        paginated.retain(|menu| menu.strong_count() > 0);
        paginated.push(Arc::downgrade(menu));
    }

    /// Drops the page state every paginated menu of this plugin keeps for `uuid`.
    pub fn forget_viewer(&self, uuid: Uuid) {
        let menus = {
            let mut paginated = self.paginated.lock();
            paginated.retain(|menu| menu.strong_count() > 0);
            paginated.iter().filter_map(Weak::upgrade).collect::<Vec<_>>()
        };
        for menu in menus {
            menu.forget_viewer(uuid);
        }
    }
}

#[cfg(test)]
mod tests {
    use menus_config::MenuConfiguration;

    use super::MenuPlugin;
    use crate::{headless::HeadlessHost, items::MenuItem};

    #[test]
    fn listener_registers_once() {
        let host = HeadlessHost::new();
        let plugin = MenuPlugin::new("test", host.clone(), MenuConfiguration::default());
        assert!(!plugin.is_listener_registered());
        plugin.register_listener();
        plugin.register_listener();
        assert!(plugin.is_listener_registered());
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn resolves_icons_against_host() {
        let host = HeadlessHost::new();
        let plugin = MenuPlugin::new("test", host, MenuConfiguration::default());
        assert_eq!(plugin.materials().back_item.item, "minecraft:oak_fence_gate");
        assert_eq!(
            plugin.empty_slot_item().icon().item,
            "minecraft:black_stained_glass_pane"
        );
        assert_eq!(plugin.click_sound().sound, "minecraft:ui.button.click");
    }
}
