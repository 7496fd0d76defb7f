use std::sync::{Arc, Weak};

use uuid::Uuid;

use crate::{
    event::InventoryClickEvent, host::Viewer, menu::ItemMenu, plugin::MenuPlugin,
    view::SharedView,
};

/// Routes inventory events of views opened by a plugin's menus back to those menus.
///
/// Each [`MenuPlugin`] registers exactly one listener with its host. Events for
/// views that belong to other plugins, or to no menu at all, are left alone.
pub struct MenuListener {
    plugin: Weak<MenuPlugin>,
}

impl MenuListener {
    pub(crate) fn new(plugin: Weak<MenuPlugin>) -> Self {
        Self { plugin }
    }

    /// The menu of this plugin that `view` shows, if any.
    fn owning_menu(&self, view: &SharedView) -> Option<Arc<ItemMenu>> {
        let plugin = self.plugin.upgrade()?;
        let holder = view.lock().holder().cloned()?;
        let menu = holder.menu()?;
        menu.is_owned_by(&plugin).then_some(menu)
    }

    /// Cancels clicks in menu views, so items can't be taken out, and hands them to the menu.
    pub fn on_inventory_click(&self, event: &mut InventoryClickEvent) {
        let Some(menu) = self.owning_menu(event.view()) else {
            return;
        };
        event.set_cancelled(true);
        log::debug!(
            "{} clicked slot {} of menu {}",
            event.viewer().name(),
            event.raw_slot(),
            menu.id()
        );
        menu.on_inventory_click(event);
    }

    pub fn on_inventory_close(&self, viewer: &dyn Viewer, view: &SharedView) {
        if let Some(menu) = self.owning_menu(view) {
            menu.on_inventory_close(viewer);
        }
    }

    /// Forgets the pages the viewer had open in paginated menus.
    pub fn on_viewer_quit(&self, uuid: Uuid) {
        if let Some(plugin) = self.plugin.upgrade() {
            plugin.forget_viewer(uuid);
        }
    }
}
