use menus_core::TextComponent;
use serde::Serialize;
use uuid::Uuid;

pub const AIR: &str = "minecraft:air";

/// The visual item shown in a slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    /// Namespaced item identifier, e.g. `minecraft:paper`
    pub item: String,
    pub item_count: u8,
    /// Data value legacy servers use for colour variants, 0 otherwise
    #[serde(skip_serializing_if = "is_zero")]
    pub damage: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<TextComponent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<TextComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SkullProfile>,
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}

/// Whose face a player head shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SkullProfile {
    Owner(Uuid),
    Texture(String),
}

impl ItemStack {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            item_count: 1,
            damage: 0,
            display_name: None,
            lore: vec![],
            profile: None,
        }
    }

    /// The empty slot, also used when an icon can't be resolved.
    pub fn air() -> Self {
        Self::new(AIR)
    }

    pub fn is_air(&self) -> bool {
        self.item == AIR
    }

    pub fn with_count(mut self, item_count: u8) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_profile(mut self, profile: SkullProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn set_name_and_lore(mut self, display_name: TextComponent, lore: &[TextComponent]) -> Self {
        self.display_name = Some(display_name);
        self.lore = lore.to_vec();
        self
    }
}

#[cfg(test)]
mod tests {
    use menus_core::TextComponent;

    use super::ItemStack;

    #[test]
    fn air_is_air() {
        assert!(ItemStack::air().is_air());
        assert!(!ItemStack::new("minecraft:paper").is_air());
    }

    #[test]
    fn name_and_lore_replace_previous() {
        let stack = ItemStack::new("minecraft:paper")
            .set_name_and_lore("a".into(), &["1".into(), "2".into()])
            .set_name_and_lore("b".into(), &[]);
        assert_eq!(stack.display_name, Some(TextComponent::text("b")));
        assert!(stack.lore.is_empty());
        assert_eq!(stack.item_count, 1);
    }

    #[test]
    fn damage_tells_variants_apart() {
        let red = ItemStack::new("minecraft:wool").with_damage(14);
        let green = ItemStack::new("minecraft:wool").with_damage(13);
        assert_ne!(red, green);
        assert_eq!(ItemStack::new("minecraft:wool").damage, 0);
    }
}
