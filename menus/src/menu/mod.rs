use std::sync::{Arc, Weak};

use derive_more::Display;
use menus_core::TextComponent;
use menus_inventory::{InventoryError, ItemStack, WindowType};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    error::MenuError,
    event::{InventoryClickEvent, ItemClickEvent},
    host::Viewer,
    items::MenuItem,
    plugin::MenuPlugin,
    view::{InventoryView, MenuHolder},
};

mod paginated;

pub use paginated::{
    clamp_page, content_index, page_count, PageNavigation, PageSource, PaginatedItemMenu,
    PAGE_SIZE,
};
use paginated::{PageFrame, Pagination};

/// Identifies one menu instance, views opened by it carry the same id.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(Uuid);

impl MenuId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
pub enum MenuSize {
    OneLine = 1,
    TwoLine = 2,
    ThreeLine = 3,
    FourLine = 4,
    FiveLine = 5,
    SixLine = 6,
}

impl MenuSize {
    pub const fn rows(self) -> usize {
        self as usize
    }

    pub const fn slots(self) -> usize {
        self.rows() * WindowType::COLUMNS
    }

    /// The smallest size with room for `slots` slots.
    pub fn fit(slots: usize) -> Result<Self, MenuError> {
        let rows = slots.div_ceil(WindowType::COLUMNS).max(1);
        Self::from_usize(rows).ok_or(MenuError::TooManySlots(slots))
    }

    pub const fn window_type(self) -> WindowType {
        match self {
            Self::OneLine => WindowType::Generic9x1,
            Self::TwoLine => WindowType::Generic9x2,
            Self::ThreeLine => WindowType::Generic9x3,
            Self::FourLine => WindowType::Generic9x4,
            Self::FiveLine => WindowType::Generic9x5,
            Self::SixLine => WindowType::Generic9x6,
        }
    }
}

/// What a slot of a menu holds.
#[derive(Clone)]
pub enum MenuSlot {
    Item(Arc<dyn MenuItem>),
    /// The n-th content slot of the viewer's current page
    PageContent(usize),
    /// Turns the page by the given amount
    PageTurn(i64),
}

struct MenuState {
    plugin: Arc<MenuPlugin>,
    name: TextComponent,
    slots: Vec<Option<MenuSlot>>,
    parent: Option<Weak<ItemMenu>>,
}

type TitleFn = Box<dyn Fn(&dyn Viewer) -> TextComponent + Send + Sync>;
type ViewerPredicate = Box<dyn Fn(&dyn Viewer) -> bool + Send + Sync>;
type ViewerHook = Box<dyn Fn(&dyn Viewer) + Send + Sync>;

/// A chest menu.
///
/// Menus are created once and opened for any number of viewers. They live
/// behind an `Arc`, views and child menus only keep weak references to them.
/// After [`ItemMenu::destroy`] every call is a no-op.
pub struct ItemMenu {
    this: Weak<ItemMenu>,
    id: MenuId,
    size: MenuSize,
    state: RwLock<Option<MenuState>>,
    pagination: Option<Pagination>,
    title: Option<TitleFn>,
    close_guard: Option<ViewerPredicate>,
    on_close: Option<ViewerHook>,
}

pub struct ItemMenuBuilder {
    name: TextComponent,
    size: MenuSize,
    parent: Option<Weak<ItemMenu>>,
    title: Option<TitleFn>,
    close_guard: Option<ViewerPredicate>,
    on_close: Option<ViewerHook>,
}

impl ItemMenuBuilder {
    pub fn parent(mut self, parent: &Arc<ItemMenu>) -> Self {
        self.parent = Some(Arc::downgrade(parent));
        self
    }

    /// Computes the window title per viewer instead of using the menu name.
    pub fn title<F>(mut self, title: F) -> Self
    where
        F: Fn(&dyn Viewer) -> TextComponent + Send + Sync + 'static,
    {
        self.title = Some(Box::new(title));
        self
    }

    /// Answers [`ItemMenu::is_allowed_to_close`].
    pub fn close_guard<F>(mut self, close_guard: F) -> Self
    where
        F: Fn(&dyn Viewer) -> bool + Send + Sync + 'static,
    {
        self.close_guard = Some(Box::new(close_guard));
        self
    }

    pub fn on_close<F>(mut self, on_close: F) -> Self
    where
        F: Fn(&dyn Viewer) + Send + Sync + 'static,
    {
        self.on_close = Some(Box::new(on_close));
        self
    }

    pub fn build(self, plugin: &Arc<MenuPlugin>) -> Arc<ItemMenu> {
        self.build_with(plugin, None)
    }

    fn build_with(self, plugin: &Arc<MenuPlugin>, pagination: Option<Pagination>) -> Arc<ItemMenu> {
        let size = self.size;
        Arc::new_cyclic(|this| ItemMenu {
            this: this.clone(),
            id: MenuId::new(),
            size,
            state: RwLock::new(Some(MenuState {
                plugin: plugin.clone(),
                name: self.name,
                slots: vec![None; size.slots()],
                parent: self.parent,
            })),
            pagination,
            title: self.title,
            close_guard: self.close_guard,
            on_close: self.on_close,
        })
    }
}

impl ItemMenu {
    pub fn builder(name: impl Into<TextComponent>, size: MenuSize) -> ItemMenuBuilder {
        ItemMenuBuilder {
            name: name.into(),
            size,
            parent: None,
            title: None,
            close_guard: None,
            on_close: None,
        }
    }

    pub fn new(plugin: &Arc<MenuPlugin>, name: impl Into<TextComponent>, size: MenuSize) -> Arc<Self> {
        Self::builder(name, size).build(plugin)
    }

    pub fn with_parent(
        plugin: &Arc<MenuPlugin>,
        name: impl Into<TextComponent>,
        size: MenuSize,
        parent: &Arc<ItemMenu>,
    ) -> Arc<Self> {
        Self::builder(name, size).parent(parent).build(plugin)
    }

    fn with_state<R>(&self, operation: &str, f: impl FnOnce(&MenuState) -> R) -> Option<R> {
        let state = self.state.read();
        match state.as_ref() {
            Some(state) => Some(f(state)),
            None => {
                log::debug!("Ignoring {operation} on destroyed menu {}", self.id);
                None
            }
        }
    }

    fn with_state_mut<R>(&self, operation: &str, f: impl FnOnce(&mut MenuState) -> R) -> Option<R> {
        let mut state = self.state.write();
        match state.as_mut() {
            Some(state) => Some(f(state)),
            None => {
                log::debug!("Ignoring {operation} on destroyed menu {}", self.id);
                None
            }
        }
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn size(&self) -> MenuSize {
        self.size
    }

    /// `None` once the menu is destroyed.
    pub fn name(&self) -> Option<TextComponent> {
        self.with_state("name", |state| state.name.clone())
    }

    /// The window title `viewer` sees.
    pub fn name_for(&self, viewer: &dyn Viewer) -> TextComponent {
        match &self.title {
            Some(title) => title(viewer),
            None => self.name().unwrap_or_default(),
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.read().is_none()
    }

    pub fn is_owned_by(&self, plugin: &MenuPlugin) -> bool {
        self.state
            .read()
            .as_ref()
            .is_some_and(|state| std::ptr::eq(Arc::as_ptr(&state.plugin), plugin))
    }

    pub fn plugin(&self) -> Option<Arc<MenuPlugin>> {
        self.with_state("plugin", |state| state.plugin.clone())
    }

    /// The parent menu, unless none was set or it has been dropped.
    pub fn parent(&self) -> Option<Arc<ItemMenu>> {
        self.with_state("parent", |state| {
            state.parent.as_ref().and_then(Weak::upgrade)
        })
        .flatten()
    }

    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    pub fn set_parent(&self, parent: Option<&Arc<ItemMenu>>) {
        self.with_state_mut("set_parent", |state| {
            state.parent = parent.map(Arc::downgrade);
        });
    }

    /// Puts `item` into `slot`, replacing whatever was there.
    pub fn set_item(&self, slot: usize, item: Arc<dyn MenuItem>) -> Result<(), InventoryError> {
        self.with_state_mut("set_item", |state| {
            let Some(target) = state.slots.get_mut(slot) else {
                return Err(InventoryError::InvalidSlot(slot));
            };
            *target = Some(MenuSlot::Item(item));
            Ok(())
        })
        .unwrap_or(Ok(()))
    }

    /// Like [`ItemMenu::set_item`] with a 1-based row and column.
    ///
    /// Only the resulting slot is checked, so a column past 9 wraps into the next row.
    pub fn set_item_at(&self, row: usize, column: usize, item: Arc<dyn MenuItem>) -> Result<(), MenuError> {
        let slot = row
            .checked_mul(WindowType::COLUMNS)
            .and_then(|start| start.checked_add(column))
            .and_then(|slot| slot.checked_sub(WindowType::COLUMNS + 1))
            .ok_or(MenuError::InvalidPosition { row, column })?;
        Ok(self.set_item(slot, item)?)
    }

    /// Places a slot entry without bounds errors, used for fixed layouts.
    pub(crate) fn place(&self, slot: usize, entry: MenuSlot) {
        self.with_state_mut("place", |state| {
            if let Some(target) = state.slots.get_mut(slot) {
                *target = Some(entry);
            }
        });
    }

    pub fn slot(&self, slot: usize) -> Option<MenuSlot> {
        self.with_state("slot", |state| state.slots.get(slot).cloned().flatten())
            .flatten()
    }

    /// The item placed in `slot`. Page slots of a paginated menu have no fixed item.
    pub fn item(&self, slot: usize) -> Option<Arc<dyn MenuItem>> {
        match self.slot(slot)? {
            MenuSlot::Item(item) => Some(item),
            MenuSlot::PageContent(_) | MenuSlot::PageTurn(_) => None,
        }
    }

    /// Fills every empty slot with the plugin's empty slot item.
    pub fn fill_empty_slots(&self) {
        if let Some(plugin) = self.plugin() {
            self.fill_empty_slots_with(plugin.empty_slot_item());
        }
    }

    pub fn fill_empty_slots_with(&self, item: Arc<dyn MenuItem>) {
        self.with_state_mut("fill_empty_slots", |state| {
            for slot in state.slots.iter_mut().filter(|slot| slot.is_none()) {
                *slot = Some(MenuSlot::Item(item.clone()));
            }
        });
    }

    /// Opens a fresh view of this menu for `viewer`.
    pub fn open(&self, viewer: &dyn Viewer) {
        let Some(plugin) = self.plugin() else {
            return;
        };
        plugin.register_listener();

        let mut view = InventoryView::new(self.size.window_type(), self.name_for(viewer))
            .with_holder(MenuHolder::new(self.id, self.this.clone()));
        view.replace_contents(self.render(viewer));
        log::debug!("Opening menu {} for {}", self.id, viewer.name());
        viewer.open_inventory(view.shared());
    }

    /// Re-renders the view `viewer` has open, if it belongs to this menu.
    pub fn update(&self, viewer: &dyn Viewer) {
        if self.is_destroyed() {
            log::debug!("Ignoring update on destroyed menu {}", self.id);
            return;
        }
        let Some(view) = viewer.open_view() else {
            return;
        };
        if !view.lock().holder().is_some_and(|holder| holder.holds(self)) {
            return;
        }
        let contents = self.render(viewer);
        view.lock().replace_contents(contents);
        viewer.update_inventory();
    }

    /// The icons of every slot as `viewer` sees them.
    pub fn render(&self, viewer: &dyn Viewer) -> Vec<Option<ItemStack>> {
        let Some((plugin, slots)) =
            self.with_state("render", |state| (state.plugin.clone(), state.slots.clone()))
        else {
            return vec![None; self.size.slots()];
        };
        let frame = self.page_frame(viewer);

        slots
            .iter()
            .map(|slot| {
                slot.as_ref()
                    .map(|slot| Self::render_slot(slot, frame.as_ref(), &plugin, viewer))
            })
            .collect()
    }

    fn render_slot(
        slot: &MenuSlot,
        frame: Option<&PageFrame>,
        plugin: &MenuPlugin,
        viewer: &dyn Viewer,
    ) -> ItemStack {
        match (slot, frame) {
            (MenuSlot::Item(item), _) => item.final_icon(viewer),
            (MenuSlot::PageContent(local), Some(frame)) => match frame.content(*local) {
                Some(item) => item.final_icon(viewer),
                None => plugin.empty_slot_item().final_icon(viewer),
            },
            (MenuSlot::PageTurn(modifier), Some(frame)) => {
                let navigation = frame.navigation(*modifier);
                if navigation.is_visible() {
                    // the page number is shown as the stack size
                    plugin
                        .materials()
                        .page_item
                        .clone()
                        .with_count(u8::try_from(navigation.target).unwrap_or(u8::MAX))
                } else {
                    plugin.materials().empty_item.clone()
                }
            }
            (MenuSlot::PageContent(_) | MenuSlot::PageTurn(_), None) => {
                plugin.empty_slot_item().final_icon(viewer)
            }
        }
    }

    fn page_frame(&self, viewer: &dyn Viewer) -> Option<PageFrame> {
        self.pagination
            .as_ref()
            .map(|pagination| pagination.frame(viewer))
    }

    pub(crate) fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub(crate) fn forget_viewer(&self, uuid: Uuid) {
        if let Some(pagination) = &self.pagination {
            pagination.forget(uuid);
        }
    }

    /// Dispatches a click in a view of this menu to the clicked item.
    ///
    /// Clicks outside the menu's slots and on empty slots are ignored.
    pub fn on_inventory_click(&self, event: &InventoryClickEvent) {
        let Ok(slot) = usize::try_from(event.raw_slot()) else {
            return;
        };
        if slot >= self.size.slots() {
            return;
        }
        let Some(plugin) = self.plugin() else {
            return;
        };
        let Some(entry) = self.slot(slot) else {
            return;
        };

        let viewer = event.viewer();
        let mut click = ItemClickEvent::new(viewer.clone(), event.click_type())
            .with_click_sound(plugin.click_sound());

        match entry {
            MenuSlot::Item(item) => dispatch(item.as_ref(), &mut click),
            MenuSlot::PageContent(local) => {
                let item = self
                    .page_frame(viewer.as_ref())
                    .and_then(|frame| frame.content(local).cloned())
                    .unwrap_or_else(|| plugin.empty_slot_item());
                dispatch(item.as_ref(), &mut click);
            }
            MenuSlot::PageTurn(modifier) => {
                if let (Some(pagination), Some(frame)) =
                    (&self.pagination, self.page_frame(viewer.as_ref()))
                {
                    let navigation = frame.navigation(modifier);
                    pagination.store(viewer.uuid(), navigation.clamped);
                    click.set_will_update(true);
                }
            }
        }

        self.reconcile(&plugin, viewer.as_ref(), &click);
    }

    fn reconcile(&self, plugin: &MenuPlugin, viewer: &dyn Viewer, click: &ItemClickEvent) {
        if click.will_update() {
            self.update(viewer);
            return;
        }
        viewer.update_inventory();

        let uuid = viewer.uuid();
        if click.will_close() || click.will_go_back() {
            let host = Arc::downgrade(plugin.host());
            plugin.host().run_later(
                plugin.config().close_delay,
                Box::new(move || match host.upgrade().and_then(|host| host.find_viewer(uuid)) {
                    Some(viewer) => viewer.close_inventory(),
                    None => log::debug!("Viewer {uuid} left before their menu could be closed"),
                }),
            );
        }
        if click.will_go_back() {
            let Some(parent) = self.parent() else {
                return;
            };
            let parent = Arc::downgrade(&parent);
            let host = Arc::downgrade(plugin.host());
            plugin.host().run_later(
                plugin.config().parent_open_delay,
                Box::new(move || {
                    let viewer = host.upgrade().and_then(|host| host.find_viewer(uuid));
                    match (viewer, parent.upgrade()) {
                        (Some(viewer), Some(parent)) => parent.open(viewer.as_ref()),
                        _ => log::debug!("Not reopening parent menu for {uuid}, viewer or menu is gone"),
                    }
                }),
            );
        }
    }

    /// Called when `viewer` closes a view of this menu.
    pub fn on_inventory_close(&self, viewer: &dyn Viewer) {
        if let Some(on_close) = &self.on_close {
            on_close(viewer);
        }
    }

    /// Whether `viewer` may close this menu. Menus never enforce this themselves.
    pub fn is_allowed_to_close(&self, viewer: &dyn Viewer) -> bool {
        self.close_guard
            .as_ref()
            .map_or(true, |close_guard| close_guard(viewer))
    }

    /// Releases the items, the parent and any page state.
    pub fn destroy(&self) {
        if self.state.write().take().is_none() {
            log::debug!("Menu {} was already destroyed", self.id);
        }
        if let Some(pagination) = &self.pagination {
            pagination.clear();
        }
    }
}

fn dispatch(item: &dyn MenuItem, event: &mut ItemClickEvent) {
    item.on_item_click(event);
    let click_type = event.click_type();
    if click_type.is_left_click() {
        item.on_item_left_click(event);
    } else if click_type.is_right_click() {
        item.on_item_right_click(event);
    } else if click_type.is_middle_click() {
        item.on_item_middle_click(event);
    }
}
