use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use itertools::Itertools;
use menus::{
    headless::{HeadlessHost, HeadlessViewer},
    items::{BooleanItem, CloseMenuItem, MenuItem, StaticMenuItem, ToggleableMenuItem},
    ItemMenu, MenuPlugin, MenuSize, PaginatedItemMenu, Viewer,
};
use menus_config::{MenuConfiguration, MENU_CONFIG};
use menus_core::text::{color::NamedColor, TextComponent};
use menus_inventory::ItemStack;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_view(viewer: &HeadlessViewer) {
    let Some(title) = viewer.title() else {
        log::info!("{} has nothing open", viewer.name());
        return;
    };
    log::info!("{} sees {}", viewer.name(), title.to_pretty_console());
    for row in 0..6 {
        let line = (0..9)
            .filter_map(|column| viewer.slot(row * 9 + column))
            .map(|stack| {
                let name = stack
                    .display_name
                    .as_ref()
                    .map_or_else(|| stack.item.clone(), TextComponent::to_plain);
                format!("{name}x{}", stack.item_count)
            })
            .join(" | ");
        if !line.is_empty() {
            log::info!("  {line}");
        }
    }
}

fn main() {
    let config: MenuConfiguration = MENU_CONFIG.clone();
    if let Err(err) = menus::init_logger(&config.logging) {
        eprintln!("Failed to set up logging: {err}");
    }
    log::info!("Menu demo {CARGO_PKG_VERSION}");

    let host = HeadlessHost::new();
    let plugin = MenuPlugin::new("menu-demo", host.clone(), config);

    let main_menu = ItemMenu::builder(
        TextComponent::text("Main menu").color_named(NamedColor::DarkPurple),
        MenuSize::ThreeLine,
    )
    .title(|viewer: &dyn Viewer| TextComponent::text(format!("Hello {}", viewer.name())))
    .build(&plugin);

    let shop = PaginatedItemMenu::with_parent(
        &plugin,
        "Shop",
        |_: &dyn Viewer| -> Vec<Arc<dyn MenuItem>> {
            (1..=60)
                .map(|i| {
                    Arc::new(StaticMenuItem::new(
                        format!("Offer #{i}"),
                        ItemStack::new("minecraft:diamond"),
                    )) as Arc<dyn MenuItem>
                })
                .collect()
        },
        &main_menu,
    );

    let flying = Arc::new(AtomicBool::new(false));
    let read = flying.clone();
    let fly_toggle = ToggleableMenuItem::new(
        BooleanItem::new("Flight", plugin.materials(), move |_: &dyn Viewer| {
            read.load(Ordering::Relaxed)
        })
        .with_display_names("Flight: on", "Flight: off"),
        move |_: &dyn Viewer| {
            flying.fetch_xor(true, Ordering::Relaxed);
        },
    );

    let shop_menu = shop.menu().clone();
    let open_shop = StaticMenuItem::new("Shop", ItemStack::new("minecraft:diamond"))
        .with_lore(["Browse the offers"])
        .on_click(move |event| {
            event.play_click_feedback();
            shop_menu.open(event.viewer().as_ref());
        });

    let placements: [(usize, usize, Arc<dyn MenuItem>); 3] = [
        (2, 2, Arc::new(open_shop)),
        (2, 5, Arc::new(fly_toggle)),
        (2, 8, Arc::new(CloseMenuItem::new(plugin.materials()))),
    ];
    for (row, column, item) in placements {
        if let Err(err) = main_menu.set_item_at(row, column, item) {
            log::error!("Couldn't place item: {err}");
        }
    }
    main_menu.fill_empty_slots();

    let alex = host.join("Alex");
    main_menu.open(alex.as_ref());
    print_view(&alex);

    let clicks: [(&str, i16, u32); 5] = [
        ("toggle flight", 13, 0),
        ("open the shop", 10, 0),
        ("next page", 53, 0),
        ("go back", 49, 3),
        ("close", 16, 1),
    ];
    for (what, slot, ticks) in clicks {
        log::info!("Alex clicks slot {slot} to {what}");
        if let Err(err) = host.left_click(&alex, slot) {
            log::error!("Click failed: {err}");
        }
        host.tick_n(ticks);
        print_view(&alex);
    }

    host.quit(alex.uuid());
    log::info!("Shop still tracks {} viewers", shop.tracked_viewers());
}
