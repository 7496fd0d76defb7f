use std::fmt;

use color::Color;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use style::Style;

pub mod color;
pub mod style;

/// Represents a Text component, used for menu titles, item names and lore
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    /// The actual text
    pub text: String,
    #[serde(flatten)]
    pub style: Style,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    /// Extra text components
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn add_child(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }

    pub fn color_named(mut self, color: color::NamedColor) -> Self {
        self.style.color = Some(Color::Named(color));
        self
    }

    /// Makes the text bold
    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    /// The text of this component and all of its children, without any styling.
    pub fn to_plain(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.extra {
            text += &child.to_plain();
        }
        text
    }

    pub fn to_pretty_console(&self) -> String {
        let style = &self.style;
        let mut text = self.text.clone();
        if let Some(color) = style.color {
            text = color.console_color(&text).to_string();
        }
        if style.bold == Some(true) {
            text = text.bold().to_string();
        }
        if style.italic == Some(true) {
            text = text.italic().to_string();
        }
        for child in &self.extra {
            text += &child.to_pretty_console();
        }
        text
    }

    /// Encodes the component the way the client expects item names and window titles.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl fmt::Display for TextComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::color::NamedColor;
    use super::TextComponent;

    #[test]
    fn plain_text_includes_children() {
        let text = TextComponent::text("Page ")
            .color_named(NamedColor::Gold)
            .add_child(TextComponent::text("2").bold());
        assert_eq!(text.to_plain(), "Page 2");
        assert_eq!(text.to_string(), "Page 2");
    }

    #[test]
    fn encode_named_color() {
        let text = TextComponent::text("Back").color_named(NamedColor::Red);
        assert_eq!(
            text.encode().unwrap(),
            r#"{"text":"Back","color":"red"}"#
        );
    }

    #[test]
    fn encode_skips_empty_fields() {
        let text = TextComponent::from(" ");
        assert_eq!(text.encode().unwrap(), r#"{"text":" "}"#);
    }

    #[test]
    fn explicit_non_italic_survives_decoding() {
        let text: TextComponent = serde_json::from_str(r#"{"text":"Lore","italic":false}"#).unwrap();
        assert_eq!(text.style.italic, Some(false));
        assert_eq!(text.encode().unwrap(), r#"{"text":"Lore","italic":false}"#);
    }

    #[test]
    fn decode_nested() {
        let text: TextComponent =
            serde_json::from_str(r#"{"text":"a","bold":true,"extra":[{"text":"b"}]}"#).unwrap();
        assert_eq!(text.style.bold, Some(true));
        assert_eq!(text.to_plain(), "ab");
    }
}
