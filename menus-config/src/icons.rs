use serde::{Deserialize, Serialize};

/// One candidate of an icon chain.
///
/// Written either as a plain item name or, for legacy servers that tell
/// colours apart by data value, as `{ name = "minecraft:wool", data = 14 }`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum IconEntry {
    Name(String),
    WithData { name: String, data: u16 },
}

impl IconEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::WithData { name, .. } => name,
        }
    }

    /// The legacy data value, 0 for plain names.
    pub fn data(&self) -> u16 {
        match self {
            Self::Name(_) => 0,
            Self::WithData { data, .. } => *data,
        }
    }
}

/// Fallback chains for the icons the built-in items use.
///
/// Each chain is tried in order until the host knows one of the names, which
/// lets the same configuration work on servers that still use the legacy
/// (pre-flattening) item names.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct IconConfig {
    pub back: Vec<IconEntry>,
    pub empty: Vec<IconEntry>,
    pub unknown: Vec<IconEntry>,
    pub red: Vec<IconEntry>,
    pub yellow: Vec<IconEntry>,
    pub green: Vec<IconEntry>,
    pub close: Vec<IconEntry>,
    pub page: Vec<IconEntry>,
    pub skull: Vec<IconEntry>,
}

fn modern(name: &str) -> IconEntry {
    IconEntry::Name(format!("minecraft:{name}"))
}

fn legacy(name: &str, data: u16) -> IconEntry {
    IconEntry::WithData {
        name: format!("minecraft:{name}"),
        data,
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        // legacy dye data: black 15, red 14, green 13, yellow 4; skull 3 is a player head
        Self {
            back: vec![modern("oak_fence_gate"), modern("fence_gate")],
            empty: vec![modern("black_stained_glass_pane"), legacy("stained_glass_pane", 15)],
            unknown: vec![modern("barrier"), modern("tnt")],
            red: vec![modern("red_wool"), legacy("wool", 14)],
            yellow: vec![modern("yellow_wool"), legacy("wool", 4)],
            green: vec![modern("green_wool"), legacy("wool", 13)],
            close: vec![modern("music_disc_cat"), modern("gold_record")],
            page: vec![modern("paper")],
            skull: vec![modern("player_head"), legacy("skull", 3)],
        }
    }
}

impl IconConfig {
    pub fn chains(&self) -> [(&'static str, &[IconEntry]); 9] {
        [
            ("back", self.back.as_slice()),
            ("empty", self.empty.as_slice()),
            ("unknown", self.unknown.as_slice()),
            ("red", self.red.as_slice()),
            ("yellow", self.yellow.as_slice()),
            ("green", self.green.as_slice()),
            ("close", self.close.as_slice()),
            ("page", self.page.as_slice()),
            ("skull", self.skull.as_slice()),
        ]
    }

    pub fn validate(&self) {
        for (name, chain) in self.chains() {
            assert!(!chain.is_empty(), "Icon chain '{name}' must not be empty");
        }
    }
}
