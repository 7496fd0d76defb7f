use std::str::FromStr;

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text color
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Whatever the client uses in that place, white for item names, purple for lore
    #[default]
    Reset,
    Named(NamedColor),
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Color::Reset => serializer.serialize_str("reset"),
            Color::Named(color) => serializer.serialize_str(color.name()),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        if name == "reset" {
            return Ok(Color::Reset);
        }
        name.parse()
            .map(Color::Named)
            .map_err(|_| serde::de::Error::custom(format!("Unknown color '{name}'")))
    }
}

impl Color {
    pub fn console_color(&self, text: &str) -> ColoredString {
        match self {
            Color::Reset => text.clear(),
            Color::Named(color) => match color {
                NamedColor::Black => text.black(),
                NamedColor::DarkBlue => text.blue(),
                NamedColor::DarkGreen => text.green(),
                NamedColor::DarkAqua => text.cyan(),
                NamedColor::DarkRed => text.red(),
                NamedColor::DarkPurple => text.purple(),
                NamedColor::Gold => text.yellow(),
                NamedColor::Gray | NamedColor::DarkGray => text.bright_black(),
                NamedColor::Blue => text.bright_blue(),
                NamedColor::Green => text.bright_green(),
                NamedColor::Aqua => text.bright_cyan(),
                NamedColor::Red => text.bright_red(),
                NamedColor::LightPurple => text.bright_purple(),
                NamedColor::Yellow => text.bright_yellow(),
                NamedColor::White => text.white(),
            },
        }
    }
}

/// The 16 chat colors every client version knows
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}

impl FromStr for NamedColor {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, NamedColor};

    #[test]
    fn parse_colors() {
        let values = [
            ("\"reset\"", Color::Reset),
            ("\"red\"", Color::Named(NamedColor::Red)),
            ("\"dark_gray\"", Color::Named(NamedColor::DarkGray)),
        ];

        for (json, color) in values {
            let parsed: Color = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, color);
            assert_eq!(serde_json::to_string(&color).unwrap(), json);
        }
    }

    #[test]
    fn names_are_unique() {
        for color in NamedColor::ALL {
            assert_eq!(color.name().parse::<NamedColor>(), Ok(color));
        }
    }

    #[test]
    fn reject_bad_colors() {
        assert!(serde_json::from_str::<Color>("\"#FF8000\"").is_err());
        assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
    }
}
