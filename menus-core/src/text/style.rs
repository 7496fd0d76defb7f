use serde::{Deserialize, Serialize};

use super::color::Color;

/// The styling a menu title, item name or lore line can carry.
///
/// Unset fields inherit from the parent component, or from the client's
/// default for the context (lore renders italic unless told otherwise).
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

