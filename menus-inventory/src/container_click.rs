use crate::InventoryError;

/// A decoded click from the raw `(mode, button, slot)` triple the client sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub slot: Slot,
    pub click_type: ClickType,
}

impl Click {
    pub fn new(mode: u8, button: i8, slot: i16) -> Result<Self, InventoryError> {
        match mode {
            0 => Self::new_normal_click(button, slot),
            1 => Self::new_shift_click(button, slot),
            2 => Self::new_key_click(button, slot),
            3 => Ok(Self {
                click_type: ClickType::MiddleClick,
                slot: Self::normal_slot(slot)?,
            }),
            4 => Self::new_drop_item(button, slot),
            5 => Self::new_drag_item(button, slot),
            6 => Ok(Self {
                click_type: ClickType::DoubleClick,
                slot: Self::normal_slot(slot)?,
            }),
            _ => Err(InventoryError::InvalidMode(mode)),
        }
    }

    fn normal_slot(slot: i16) -> Result<Slot, InventoryError> {
        match slot {
            -999 => Ok(Slot::OutsideInventory),
            _ => slot
                .try_into()
                .map(Slot::Normal)
                .map_err(|_| InventoryError::InvalidPacket),
        }
    }

    fn mouse_button(mode: u8, button: i8) -> Result<MouseClick, InventoryError> {
        match button {
            0 => Ok(MouseClick::Left),
            1 => Ok(MouseClick::Right),
            _ => Err(InventoryError::InvalidButton { mode, button }),
        }
    }

    fn new_normal_click(button: i8, slot: i16) -> Result<Self, InventoryError> {
        // Clicking outside the window reports -999, anything else negative is the border
        let slot = match slot {
            -999 => Slot::OutsideInventory,
            _ => slot
                .try_into()
                .map(Slot::Normal)
                .unwrap_or(Slot::OutsideInventory),
        };
        Ok(Self {
            click_type: ClickType::MouseClick(Self::mouse_button(0, button)?),
            slot,
        })
    }

    fn new_shift_click(button: i8, slot: i16) -> Result<Self, InventoryError> {
        Ok(Self {
            click_type: ClickType::ShiftClick(Self::mouse_button(1, button)?),
            slot: Self::normal_slot(slot)?,
        })
    }

    fn new_key_click(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let key = match button {
            0..9 => KeyClick::Slot(button as u8),
            40 => KeyClick::Offhand,
            _ => return Err(InventoryError::InvalidButton { mode: 2, button }),
        };

        Ok(Self {
            click_type: ClickType::KeyClick(key),
            slot: Self::normal_slot(slot)?,
        })
    }

    fn new_drop_item(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let drop_type = match button {
            0 => DropType::SingleItem,
            1 => DropType::FullStack,
            _ => return Err(InventoryError::InvalidButton { mode: 4, button }),
        };
        Ok(Self {
            click_type: ClickType::DropType(drop_type),
            slot: Self::normal_slot(slot)?,
        })
    }

    fn new_drag_item(button: i8, slot: i16) -> Result<Self, InventoryError> {
        let state = match button {
            0 => MouseDragState::Start(MouseDragType::Left),
            4 => MouseDragState::Start(MouseDragType::Right),
            8 => MouseDragState::Start(MouseDragType::Middle),
            1 | 5 | 9 => MouseDragState::AddSlot(
                slot.try_into()
                    .map_err(|_| InventoryError::InvalidPacket)?,
            ),
            2 | 6 | 10 => MouseDragState::End,
            _ => return Err(InventoryError::InvalidButton { mode: 5, button }),
        };
        Ok(Self {
            slot: match &state {
                MouseDragState::AddSlot(slot) => Slot::Normal(*slot),
                _ => Slot::OutsideInventory,
            },
            click_type: ClickType::MouseDrag { drag_state: state },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickType {
    MouseClick(MouseClick),
    ShiftClick(MouseClick),
    KeyClick(KeyClick),
    /// Middle mouse button, the client only sends this in creative mode
    MiddleClick,
    DropType(DropType),
    MouseDrag { drag_state: MouseDragState },
    DoubleClick,
}

impl ClickType {
    pub fn is_left_click(&self) -> bool {
        matches!(
            self,
            ClickType::MouseClick(MouseClick::Left)
                | ClickType::ShiftClick(MouseClick::Left)
                | ClickType::DoubleClick
        )
    }

    pub fn is_right_click(&self) -> bool {
        matches!(
            self,
            ClickType::MouseClick(MouseClick::Right) | ClickType::ShiftClick(MouseClick::Right)
        )
    }

    pub fn is_middle_click(&self) -> bool {
        matches!(self, ClickType::MiddleClick)
    }

    pub fn is_shift_click(&self) -> bool {
        matches!(self, ClickType::ShiftClick(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseClick {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClick {
    Slot(u8),
    Offhand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Normal(usize),
    OutsideInventory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropType {
    SingleItem,
    FullStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseDragType {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseDragState {
    Start(MouseDragType),
    AddSlot(usize),
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_clicks() {
        let click = Click::new(0, 0, 4).unwrap();
        assert_eq!(click.slot, Slot::Normal(4));
        assert_eq!(click.click_type, ClickType::MouseClick(MouseClick::Left));
        assert!(click.click_type.is_left_click());
        assert!(!click.click_type.is_right_click());

        let click = Click::new(0, 1, 53).unwrap();
        assert_eq!(click.click_type, ClickType::MouseClick(MouseClick::Right));
        assert!(click.click_type.is_right_click());

        assert_eq!(Click::new(0, 0, -999).unwrap().slot, Slot::OutsideInventory);
        assert_eq!(Click::new(0, 0, -1).unwrap().slot, Slot::OutsideInventory);
    }

    #[test]
    fn classification() {
        let shift_right = Click::new(1, 1, 0).unwrap().click_type;
        assert!(shift_right.is_right_click());
        assert!(shift_right.is_shift_click());

        let double = Click::new(6, 0, 0).unwrap().click_type;
        assert!(double.is_left_click());

        let middle = Click::new(3, 2, 0).unwrap().click_type;
        assert!(middle.is_middle_click());
        assert!(!middle.is_left_click());
        assert!(!middle.is_right_click());

        let key = Click::new(2, 3, 10).unwrap().click_type;
        assert_eq!(key, ClickType::KeyClick(KeyClick::Slot(3)));
        assert!(!key.is_left_click() && !key.is_right_click() && !key.is_middle_click());

        let offhand = Click::new(2, 40, 10).unwrap().click_type;
        assert_eq!(offhand, ClickType::KeyClick(KeyClick::Offhand));
    }

    #[test]
    fn drags() {
        let start = Click::new(5, 4, -999).unwrap();
        assert_eq!(
            start.click_type,
            ClickType::MouseDrag {
                drag_state: MouseDragState::Start(MouseDragType::Right)
            }
        );
        assert_eq!(start.slot, Slot::OutsideInventory);

        let add = Click::new(5, 5, 12).unwrap();
        assert_eq!(add.slot, Slot::Normal(12));
    }

    #[test]
    fn invalid_packets() {
        assert_eq!(Click::new(7, 0, 0), Err(InventoryError::InvalidMode(7)));
        assert_eq!(
            Click::new(0, 3, 0),
            Err(InventoryError::InvalidButton { mode: 0, button: 3 })
        );
        assert_eq!(
            Click::new(2, 12, 0),
            Err(InventoryError::InvalidButton { mode: 2, button: 12 })
        );
        assert_eq!(Click::new(1, 0, -4), Err(InventoryError::InvalidPacket));
        assert_eq!(Click::new(5, 1, -2), Err(InventoryError::InvalidPacket));
    }
}
