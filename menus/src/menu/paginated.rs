use std::{collections::HashMap, sync::Arc};

use derive_more::Deref;
use menus_core::TextComponent;
use parking_lot::Mutex;
use uuid::Uuid;

use super::{ItemMenu, ItemMenuBuilder, MenuSize, MenuSlot};
use crate::{
    host::Viewer,
    items::{BackMenuItem, MenuItem},
    plugin::MenuPlugin,
};

/// Content slots per page, the top five rows.
pub const PAGE_SIZE: usize = 45;

const PREVIOUS_PAGE_SLOT: usize = 45;
const BACK_SLOT: usize = 49;
const NEXT_PAGE_SLOT: usize = 53;

/// Number of pages for `len` items.
///
/// This is one more than needed when `len` is a multiple of [`PAGE_SIZE`],
/// a list of exactly 45 items has an empty second page.
pub const fn page_count(len: usize) -> usize {
    len / PAGE_SIZE + 1
}

/// `page` limited to `0..page_count`.
pub fn clamp_page(page: i64, page_count: usize) -> usize {
    let last = i64::try_from(page_count).unwrap_or(i64::MAX) - 1;
    // `last` may be negative for a page count of 0, the lower bound wins
    usize::try_from(page.min(last).max(0)).unwrap_or(0)
}

/// Index into the item list of content slot `local` on `page`, `None` past `usize::MAX`.
pub fn content_index(page: usize, local: usize) -> Option<usize> {
    page.checked_mul(PAGE_SIZE)?.checked_add(local)
}

/// Where a page turn button leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNavigation {
    /// Current page plus the button's modifier, may be out of range
    pub target: i64,
    /// `target` limited to the existing pages
    pub clamped: usize,
}

impl PageNavigation {
    pub fn new(page: usize, modifier: i64, page_count: usize) -> Self {
        let target = i64::try_from(page).unwrap_or(i64::MAX).saturating_add(modifier);
        Self {
            target,
            clamped: clamp_page(target, page_count),
        }
    }

    /// The button is only shown when it leads to an existing page other than the first.
    pub fn is_visible(&self) -> bool {
        self.target != 0 && i64::try_from(self.clamped).is_ok_and(|clamped| clamped == self.target)
    }
}

/// Supplies the items a paginated menu pages through, per viewer.
///
/// Called on every render and click, results are never cached.
pub trait PageSource: Send + Sync {
    fn items(&self, viewer: &dyn Viewer) -> Vec<Arc<dyn MenuItem>>;
}

impl<F> PageSource for F
where
    F: Fn(&dyn Viewer) -> Vec<Arc<dyn MenuItem>> + Send + Sync,
{
    fn items(&self, viewer: &dyn Viewer) -> Vec<Arc<dyn MenuItem>> {
        self(viewer)
    }
}

pub(crate) struct Pagination {
    source: Box<dyn PageSource>,
    pages: Mutex<HashMap<Uuid, usize>>,
}

impl Pagination {
    fn new(source: Box<dyn PageSource>) -> Self {
        Self {
            source,
            pages: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn page(&self, uuid: Uuid) -> usize {
        *self.pages.lock().entry(uuid).or_insert(0)
    }

    pub(crate) fn store(&self, uuid: Uuid, page: usize) {
        self.pages.lock().insert(uuid, page);
    }

    pub(crate) fn forget(&self, uuid: Uuid) {
        self.pages.lock().remove(&uuid);
    }

    pub(crate) fn clear(&self) {
        self.pages.lock().clear();
    }

    pub(crate) fn tracked_viewers(&self) -> usize {
        self.pages.lock().len()
    }

    pub(crate) fn items(&self, viewer: &dyn Viewer) -> Vec<Arc<dyn MenuItem>> {
        self.source.items(viewer)
    }

    /// Snapshot of the viewer's page and items, taken once per render or click.
    pub(crate) fn frame(&self, viewer: &dyn Viewer) -> PageFrame {
        PageFrame {
            page: self.page(viewer.uuid()),
            items: self.items(viewer),
        }
    }
}

pub(crate) struct PageFrame {
    page: usize,
    items: Vec<Arc<dyn MenuItem>>,
}

impl PageFrame {
    pub(crate) fn content(&self, local: usize) -> Option<&Arc<dyn MenuItem>> {
        self.items.get(content_index(self.page, local)?)
    }

    pub(crate) fn navigation(&self, modifier: i64) -> PageNavigation {
        PageNavigation::new(self.page, modifier, page_count(self.items.len()))
    }
}

/// A six row menu paging through a list of items.
///
/// The top five rows show the current page. The bottom row has the previous
/// page button in its first slot, the next page button in its last slot and,
/// when the menu has a parent, a back button in the middle. Each viewer has
/// their own current page.
#[derive(Clone, Deref)]
pub struct PaginatedItemMenu(Arc<ItemMenu>);

impl PaginatedItemMenu {
    pub fn new<S>(plugin: &Arc<MenuPlugin>, name: impl Into<TextComponent>, source: S) -> Self
    where
        S: PageSource + 'static,
    {
        Self::build(ItemMenu::builder(name, MenuSize::SixLine), plugin, source)
    }

    pub fn with_parent<S>(
        plugin: &Arc<MenuPlugin>,
        name: impl Into<TextComponent>,
        source: S,
        parent: &Arc<ItemMenu>,
    ) -> Self
    where
        S: PageSource + 'static,
    {
        Self::build(
            ItemMenu::builder(name, MenuSize::SixLine).parent(parent),
            plugin,
            source,
        )
    }

    /// Builds from an [`ItemMenuBuilder`], the builder's size is ignored.
    pub fn build<S>(builder: ItemMenuBuilder, plugin: &Arc<MenuPlugin>, source: S) -> Self
    where
        S: PageSource + 'static,
    {
        let has_parent = builder.parent.is_some();
        let builder = ItemMenuBuilder {
            size: MenuSize::SixLine,
            ..builder
        };
        let menu = builder.build_with(plugin, Some(Pagination::new(Box::new(source))));

        for local in 0..PAGE_SIZE {
            menu.place(local, MenuSlot::PageContent(local));
        }
        menu.place(PREVIOUS_PAGE_SLOT, MenuSlot::PageTurn(-1));
        if has_parent {
            menu.place(
                BACK_SLOT,
                MenuSlot::Item(Arc::new(BackMenuItem::new(plugin.materials()))),
            );
        }
        menu.place(NEXT_PAGE_SLOT, MenuSlot::PageTurn(1));
        menu.fill_empty_slots();

        plugin.track_paginated(&menu);
        Self(menu)
    }

    pub fn menu(&self) -> &Arc<ItemMenu> {
        &self.0
    }

    /// The viewer's current page, 0 until they turn it.
    pub fn page(&self, viewer: &dyn Viewer) -> usize {
        self.pagination()
            .map_or(0, |pagination| pagination.page(viewer.uuid()))
    }

    /// Moves the viewer to `page` and re-renders their view.
    pub fn set_page(&self, viewer: &dyn Viewer, page: usize) {
        if let Some(pagination) = self.pagination() {
            pagination.store(viewer.uuid(), page);
        }
        self.update(viewer);
    }

    /// The full item list for `viewer`.
    pub fn items(&self, viewer: &dyn Viewer) -> Vec<Arc<dyn MenuItem>> {
        self.pagination()
            .map_or_else(Vec::new, |pagination| pagination.items(viewer))
    }

    pub fn page_count(&self, viewer: &dyn Viewer) -> usize {
        page_count(self.items(viewer).len())
    }

    /// Drops the page kept for `uuid`, they start on the first page next time.
    pub fn forget_viewer(&self, uuid: Uuid) {
        self.0.forget_viewer(uuid);
    }

    /// Number of viewers with a stored page.
    pub fn tracked_viewers(&self) -> usize {
        self.pagination()
            .map_or(0, Pagination::tracked_viewers)
    }
}

#[cfg(test)]
mod tests {
    use super::{clamp_page, content_index, page_count, PageNavigation, PAGE_SIZE};

    #[test]
    fn full_page_gets_an_extra_page() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(44), 1);
        assert_eq!(page_count(45), 2);
        assert_eq!(page_count(46), 2);
        assert_eq!(page_count(90), 3);
    }

    #[test]
    fn clamping() {
        for count in 1..5 {
            for page in -3..8 {
                let clamped = clamp_page(page, count);
                assert!(clamped < count);
                if (0..count as i64).contains(&page) {
                    assert_eq!(clamped as i64, page);
                }
            }
        }
        assert_eq!(clamp_page(-1, 3), 0);
        assert_eq!(clamp_page(7, 3), 2);
        assert_eq!(clamp_page(5, 0), 0);
    }

    #[test]
    fn content_indices() {
        assert_eq!(content_index(0, 0), Some(0));
        assert_eq!(content_index(1, 0), Some(PAGE_SIZE));
        assert_eq!(content_index(2, 44), Some(134));
        assert_eq!(content_index(usize::MAX / PAGE_SIZE + 1, 0), None);
        assert_eq!(content_index(usize::MAX / PAGE_SIZE, usize::MAX), None);
    }

    #[test]
    fn navigation_visibility() {
        // two pages, on the first
        let previous = PageNavigation::new(0, -1, 2);
        assert_eq!(previous.target, -1);
        assert_eq!(previous.clamped, 0);
        assert!(!previous.is_visible());

        let next = PageNavigation::new(0, 1, 2);
        assert_eq!(next.clamped, 1);
        assert!(next.is_visible());

        // on the second page, previous leads to page 0 and is never shown
        let previous = PageNavigation::new(1, -1, 2);
        assert_eq!(previous.target, 0);
        assert_eq!(previous.clamped, 0);
        assert!(!previous.is_visible());

        let next = PageNavigation::new(1, 1, 2);
        assert_eq!(next.clamped, 1);
        assert!(!next.is_visible());

        // three pages, middle page
        assert!(PageNavigation::new(1, 1, 3).is_visible());
        assert!(PageNavigation::new(2, -1, 3).is_visible());
    }
}
