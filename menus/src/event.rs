use std::sync::Arc;

use menus_inventory::{
    container_click::{Click, ClickType},
    InventoryError,
};

use crate::{host::Viewer, view::SharedView};

/// A raw click in a view, as reported by the server.
pub struct InventoryClickEvent {
    viewer: Arc<dyn Viewer>,
    view: SharedView,
    raw_slot: i16,
    click_type: ClickType,
    cancelled: bool,
}

impl InventoryClickEvent {
    pub fn new(viewer: Arc<dyn Viewer>, view: SharedView, raw_slot: i16, click_type: ClickType) -> Self {
        Self {
            viewer,
            view,
            raw_slot,
            click_type,
            cancelled: false,
        }
    }

    /// Decodes the `(mode, button, slot)` triple of a click container packet.
    pub fn from_raw(
        viewer: Arc<dyn Viewer>,
        view: SharedView,
        mode: u8,
        button: i8,
        slot: i16,
    ) -> Result<Self, InventoryError> {
        let click = Click::new(mode, button, slot)?;
        Ok(Self::new(viewer, view, slot, click.click_type))
    }

    pub fn viewer(&self) -> &Arc<dyn Viewer> {
        &self.viewer
    }

    pub fn view(&self) -> &SharedView {
        &self.view
    }

    /// The slot index across the top view and the viewer's own inventory below it.
    /// Negative when the click was outside the window.
    pub fn raw_slot(&self) -> i16 {
        self.raw_slot
    }

    pub fn click_type(&self) -> ClickType {
        self.click_type
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClickSound {
    pub sound: String,
    pub volume: f32,
    pub pitch: f32,
}

/// Passed to item click handlers. Handlers pick what happens to the menu
/// afterwards: go back to the parent, close, or re-render in place.
///
/// At most one of the three is ever requested, requesting one drops the others.
pub struct ItemClickEvent {
    viewer: Arc<dyn Viewer>,
    click_type: ClickType,
    click_sound: Option<ClickSound>,
    go_back: bool,
    close: bool,
    update: bool,
}

impl ItemClickEvent {
    pub fn new(viewer: Arc<dyn Viewer>, click_type: ClickType) -> Self {
        Self {
            viewer,
            click_type,
            click_sound: None,
            go_back: false,
            close: false,
            update: false,
        }
    }

    pub fn with_click_sound(mut self, click_sound: ClickSound) -> Self {
        self.click_sound = Some(click_sound);
        self
    }

    pub fn viewer(&self) -> &Arc<dyn Viewer> {
        &self.viewer
    }

    pub fn click_type(&self) -> ClickType {
        self.click_type
    }

    pub fn will_go_back(&self) -> bool {
        self.go_back
    }

    pub fn set_will_go_back(&mut self, go_back: bool) {
        self.go_back = go_back;
        if go_back {
            self.close = false;
            self.update = false;
        }
    }

    pub fn will_close(&self) -> bool {
        self.close
    }

    pub fn set_will_close(&mut self, close: bool) {
        self.close = close;
        if close {
            self.go_back = false;
            self.update = false;
        }
    }

    pub fn will_update(&self) -> bool {
        self.update
    }

    pub fn set_will_update(&mut self, update: bool) {
        self.update = update;
        if update {
            self.go_back = false;
            self.close = false;
        }
    }

    /// Plays the configured button click sound to the viewer.
    pub fn play_click_feedback(&self) {
        if let Some(click_sound) = &self.click_sound {
            self.viewer
                .play_sound(&click_sound.sound, click_sound.volume, click_sound.pitch);
        }
    }
}

#[cfg(test)]
mod tests {
    use menus_inventory::container_click::{ClickType, MouseClick};

    use super::{ClickSound, ItemClickEvent};
    use crate::headless::HeadlessHost;

    fn event() -> ItemClickEvent {
        let host = HeadlessHost::new();
        let viewer = host.join("Alex");
        ItemClickEvent::new(viewer, ClickType::MouseClick(MouseClick::Left))
    }

    #[test]
    fn flags_start_cleared() {
        let event = event();
        assert!(!event.will_go_back());
        assert!(!event.will_close());
        assert!(!event.will_update());
    }

    #[test]
    fn setting_one_flag_clears_the_others() {
        let mut event = event();
        event.set_will_close(true);
        event.set_will_update(true);
        assert!(!event.will_close());
        assert!(event.will_update());
        assert!(!event.will_go_back());

        event.set_will_go_back(true);
        assert!(event.will_go_back());
        assert!(!event.will_update());
        assert!(!event.will_close());

        event.set_will_close(true);
        assert!(event.will_close());
        assert!(!event.will_go_back());
        assert!(!event.will_update());
    }

    #[test]
    fn clearing_a_flag_does_not_cascade() {
        let mut event = event();
        event.set_will_update(true);
        event.set_will_close(false);
        assert!(event.will_update());
        event.set_will_update(false);
        assert!(!event.will_update());
        assert!(!event.will_close());
        assert!(!event.will_go_back());
    }

    #[test]
    fn click_feedback_plays_configured_sound() {
        let host = HeadlessHost::new();
        let viewer = host.join("Steve");
        let event = ItemClickEvent::new(viewer.clone(), ClickType::MouseClick(MouseClick::Left))
            .with_click_sound(ClickSound {
                sound: "minecraft:ui.button.click".to_string(),
                volume: 1.0,
                pitch: 1.0,
            });
        event.play_click_feedback();
        assert_eq!(viewer.sounds(), vec!["minecraft:ui.button.click".to_string()]);

        // without a configured sound nothing is played
        ItemClickEvent::new(viewer.clone(), ClickType::MiddleClick).play_click_feedback();
        assert_eq!(viewer.sounds().len(), 1);
    }
}
