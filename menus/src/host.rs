use std::sync::Arc;

use menus_inventory::ItemStack;
use uuid::Uuid;

use crate::{listener::MenuListener, view::SharedView};

/// A unit of work deferred to a later tick of the server's main loop.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Someone who can look at a menu, usually a player.
pub trait Viewer: Send + Sync {
    /// Stable identity, used to key page state and to find the viewer again
    /// when a deferred task runs.
    fn uuid(&self) -> Uuid;

    fn name(&self) -> String;

    /// Shows `view` to the viewer, replacing whatever they had open.
    fn open_inventory(&self, view: SharedView);

    /// The view the viewer currently has open, if any.
    fn open_view(&self) -> Option<SharedView>;

    /// Resends the contents of the open view.
    fn update_inventory(&self);

    fn close_inventory(&self);

    fn play_sound(&self, sound: &str, volume: f32, pitch: f32);
}

/// What the server has to provide for menus to work.
pub trait MenuHost: Send + Sync {
    /// Starts routing inventory events to `listener`. Called once per plugin.
    fn register_listener(&self, listener: MenuListener);

    /// Finds an online viewer, `None` once they have disconnected.
    fn find_viewer(&self, uuid: Uuid) -> Option<Arc<dyn Viewer>>;

    /// Runs `task` on the main loop after `delay_ticks` ticks.
    fn run_later(&self, delay_ticks: u32, task: Task);

    /// Resolves an item identifier, `None` when this server version doesn't know it.
    fn lookup_material(&self, name: &str) -> Option<ItemStack>;
}
