//! An in-memory host, for tests and for trying menus out without a server.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Weak,
    },
};

use menus_config::IconConfig;
use menus_core::TextComponent;
use menus_inventory::{Container, InventoryError, ItemStack};
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    event::InventoryClickEvent,
    host::{MenuHost, Task, Viewer},
    listener::MenuListener,
    materials::Materials,
    menu::MenuId,
    scheduler::TickScheduler,
    view::SharedView,
};

/// Every item name of the default icon table that exists on modern servers.
const MODERN_MATERIALS: &[&str] = &[
    "minecraft:oak_fence_gate",
    "minecraft:black_stained_glass_pane",
    "minecraft:barrier",
    "minecraft:red_wool",
    "minecraft:yellow_wool",
    "minecraft:green_wool",
    "minecraft:music_disc_cat",
    "minecraft:paper",
    "minecraft:player_head",
    "minecraft:diamond",
    "minecraft:stone",
];

pub struct HeadlessHost {
    this: Weak<HeadlessHost>,
    scheduler: TickScheduler,
    viewers: RwLock<HashMap<Uuid, Arc<HeadlessViewer>>>,
    listeners: RwLock<Vec<Arc<MenuListener>>>,
    materials: HashSet<String>,
}

impl HeadlessHost {
    pub fn new() -> Arc<Self> {
        Self::with_materials(MODERN_MATERIALS.iter().copied())
    }

    /// A host that only knows the given item names.
    pub fn with_materials<I, S>(materials: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let materials = materials.into_iter().map(Into::into).collect();
        Arc::new_cyclic(|this| Self {
            this: this.clone(),
            scheduler: TickScheduler::new(),
            viewers: RwLock::new(HashMap::new()),
            listeners: RwLock::new(Vec::new()),
            materials,
        })
    }

    /// The default icons as this host resolves them.
    pub fn materials(&self) -> Materials {
        Materials::resolve(|item| self.lookup_material(item), &IconConfig::default())
    }

    pub fn join(&self, name: &str) -> Arc<HeadlessViewer> {
        let viewer = Arc::new(HeadlessViewer::new(name, self.this.clone()));
        self.viewers.write().insert(viewer.uuid, viewer.clone());
        log::debug!("{name} joined ({})", viewer.uuid);
        viewer
    }

    pub fn quit(&self, uuid: Uuid) {
        let Some(viewer) = self.viewers.write().remove(&uuid) else {
            return;
        };
        viewer.close_inventory();
        for listener in self.listeners() {
            listener.on_viewer_quit(uuid);
        }
    }

    pub fn tick(&self) {
        self.scheduler.tick();
    }

    pub fn tick_n(&self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    fn listeners(&self) -> Vec<Arc<MenuListener>> {
        self.listeners.read().clone()
    }

    /// Feeds a raw click into the viewer's open view.
    ///
    /// Returns whether a listener cancelled the click.
    pub fn click(
        &self,
        viewer: &Arc<HeadlessViewer>,
        mode: u8,
        button: i8,
        slot: i16,
    ) -> Result<bool, InventoryError> {
        let view = viewer
            .open_view()
            .ok_or_else(|| InventoryError::ClosedContainerInteract(viewer.name.clone()))?;
        let mut event = InventoryClickEvent::from_raw(viewer.clone(), view, mode, button, slot)?;
        for listener in self.listeners() {
            listener.on_inventory_click(&mut event);
        }
        Ok(event.is_cancelled())
    }

    pub fn left_click(&self, viewer: &Arc<HeadlessViewer>, slot: i16) -> Result<bool, InventoryError> {
        self.click(viewer, 0, 0, slot)
    }

    pub fn right_click(&self, viewer: &Arc<HeadlessViewer>, slot: i16) -> Result<bool, InventoryError> {
        self.click(viewer, 0, 1, slot)
    }

    fn fire_close(&self, viewer: &dyn Viewer, view: &SharedView) {
        for listener in self.listeners() {
            listener.on_inventory_close(viewer, view);
        }
    }
}

impl MenuHost for HeadlessHost {
    fn register_listener(&self, listener: MenuListener) {
        self.listeners.write().push(Arc::new(listener));
    }

    fn find_viewer(&self, uuid: Uuid) -> Option<Arc<dyn Viewer>> {
        self.viewers
            .read()
            .get(&uuid)
            .map(|viewer| viewer.clone() as Arc<dyn Viewer>)
    }

    fn run_later(&self, delay_ticks: u32, task: Task) {
        self.scheduler.schedule(delay_ticks, task);
    }

    fn lookup_material(&self, name: &str) -> Option<ItemStack> {
        self.materials.contains(name).then(|| ItemStack::new(name))
    }
}

/// A player that only exists in memory and records what happened to it.
pub struct HeadlessViewer {
    uuid: Uuid,
    name: String,
    host: Weak<HeadlessHost>,
    open: Mutex<Option<SharedView>>,
    opened: AtomicUsize,
    closed: AtomicUsize,
    resyncs: AtomicUsize,
    sounds: Mutex<Vec<String>>,
}

impl HeadlessViewer {
    fn new(name: &str, host: Weak<HeadlessHost>) -> Self {
        Self {
            uuid: Uuid::new_v3(&Uuid::NAMESPACE_DNS, format!("OfflinePlayer:{name}").as_bytes()),
            name: name.to_string(),
            host,
            open: Mutex::new(None),
            opened: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            resyncs: AtomicUsize::new(0),
            sounds: Mutex::new(Vec::new()),
        }
    }

    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::Relaxed)
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::Relaxed)
    }

    pub fn resync_count(&self) -> usize {
        self.resyncs.load(Ordering::Relaxed)
    }

    pub fn sounds(&self) -> Vec<String> {
        self.sounds.lock().clone()
    }

    pub fn has_open_view(&self) -> bool {
        self.open.lock().is_some()
    }

    /// The contents of `slot` in the open view.
    pub fn slot(&self, slot: usize) -> Option<ItemStack> {
        let view = self.open_view()?;
        let view = view.lock();
        view.get_slot(slot).cloned().flatten()
    }

    pub fn title(&self) -> Option<TextComponent> {
        let view = self.open_view()?;
        let title = view.lock().title().clone();
        Some(title)
    }

    /// The menu the open view was rendered by.
    pub fn open_menu(&self) -> Option<MenuId> {
        let view = self.open_view()?;
        let id = view.lock().holder().map(|holder| holder.id());
        id
    }

    fn take_view(&self) -> Option<SharedView> {
        let previous = self.open.lock().take()?;
        self.closed.fetch_add(1, Ordering::Relaxed);
        if let Some(host) = self.host.upgrade() {
            host.fire_close(self, &previous);
        }
        Some(previous)
    }
}

impl Viewer for HeadlessViewer {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn open_inventory(&self, view: SharedView) {
        self.take_view();
        *self.open.lock() = Some(view);
        self.opened.fetch_add(1, Ordering::Relaxed);
    }

    fn open_view(&self) -> Option<SharedView> {
        self.open.lock().clone()
    }

    fn update_inventory(&self) {
        self.resyncs.fetch_add(1, Ordering::Relaxed);
    }

    fn close_inventory(&self) {
        self.take_view();
    }

    fn play_sound(&self, sound: &str, _volume: f32, _pitch: f32) {
        self.sounds.lock().push(sound.to_string());
    }
}
