use menus_config::{IconConfig, IconEntry};
use menus_inventory::ItemStack;

/// The icons used by the built-in items, resolved once against the running server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Materials {
    pub back_item: ItemStack,
    pub empty_item: ItemStack,
    pub unknown_item: ItemStack,
    pub red_wool: ItemStack,
    pub yellow_wool: ItemStack,
    pub green_wool: ItemStack,
    pub close_item: ItemStack,
    pub page_item: ItemStack,
    pub skull_item: ItemStack,
}

impl Materials {
    pub fn resolve<F>(lookup: F, icons: &IconConfig) -> Self
    where
        F: Fn(&str) -> Option<ItemStack>,
    {
        let first_available = |icon: &str, chain: &[IconEntry]| {
            chain
                .iter()
                .find_map(|entry| {
                    lookup(entry.name()).map(|stack| match entry.data() {
                        0 => stack,
                        data => stack.with_damage(data),
                    })
                })
                .unwrap_or_else(|| {
                    let names: Vec<&str> = chain.iter().map(IconEntry::name).collect();
                    log::warn!("None of {names:?} is a known item, the {icon} icon will be empty");
                    ItemStack::air()
                })
        };

        Self {
            back_item: first_available("back", &icons.back),
            empty_item: first_available("empty", &icons.empty),
            unknown_item: first_available("unknown", &icons.unknown),
            red_wool: first_available("red", &icons.red),
            yellow_wool: first_available("yellow", &icons.yellow),
            green_wool: first_available("green", &icons.green),
            close_item: first_available("close", &icons.close),
            page_item: first_available("page", &icons.page),
            skull_item: first_available("skull", &icons.skull),
        }
    }
}

#[cfg(test)]
mod tests {
    use menus_config::IconConfig;
    use menus_inventory::ItemStack;

    use super::Materials;

    fn known(names: &'static [&'static str]) -> impl Fn(&str) -> Option<ItemStack> {
        move |name| {
            names
                .iter()
                .find(|known| **known == name)
                .map(|known| ItemStack::new(*known))
        }
    }

    #[test]
    fn modern_names_win() {
        let materials = Materials::resolve(
            known(&["minecraft:oak_fence_gate", "minecraft:fence_gate"]),
            &IconConfig::default(),
        );
        assert_eq!(materials.back_item.item, "minecraft:oak_fence_gate");
    }

    #[test]
    fn legacy_names_are_used_as_fallback() {
        let materials = Materials::resolve(
            known(&["minecraft:fence_gate", "minecraft:gold_record", "minecraft:wool"]),
            &IconConfig::default(),
        );
        assert_eq!(materials.back_item.item, "minecraft:fence_gate");
        assert_eq!(materials.close_item.item, "minecraft:gold_record");
        assert_eq!(materials.red_wool.item, "minecraft:wool");
    }

    #[test]
    fn legacy_wool_keeps_its_colours() {
        let materials = Materials::resolve(
            known(&["minecraft:wool", "minecraft:stained_glass_pane", "minecraft:skull"]),
            &IconConfig::default(),
        );
        let wool = [&materials.red_wool, &materials.yellow_wool, &materials.green_wool];
        assert!(wool.iter().all(|stack| stack.item == "minecraft:wool"));
        assert_eq!(wool.map(|stack| stack.damage), [14, 4, 13]);
        assert_eq!(materials.empty_item.damage, 15);
        assert_eq!(materials.skull_item.damage, 3);
    }

    #[test]
    fn modern_icons_have_no_data() {
        let materials = Materials::resolve(
            known(&["minecraft:red_wool", "minecraft:wool"]),
            &IconConfig::default(),
        );
        assert_eq!(materials.red_wool.item, "minecraft:red_wool");
        assert_eq!(materials.red_wool.damage, 0);
    }

    #[test]
    fn exhausted_chain_is_air() {
        let materials = Materials::resolve(known(&[]), &IconConfig::default());
        assert!(materials.empty_item.is_air());
        assert!(materials.page_item.is_air());
    }
}
