use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use uibind::{find_element, Binder, Element, Event, Key, Modifiers, MouseButton, ACTIVE_CLASS};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("page.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = page();
    let binder = Binder::bind(&root);

    let script = [
        ("click burger", click("burger")),
        ("click trigger", click("open-confirm")),
        ("click close icon", click("confirm-dialog-close")),
        ("click trigger again", click("open-confirm")),
        ("press Escape", escape()),
    ];

    for (label, event) in script {
        binder.handle_event(&mut root, &event);
        println!(
            "{label:24} menu={} confirm-dialog={}",
            state(&root, "nav-menu"),
            state(&root, "confirm-dialog"),
        );
    }

    Ok(())
}

fn click(id: &str) -> Event {
    Event::Click {
        target: Some(id.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn escape() -> Event {
    Event::Key {
        key: Key::Escape,
        modifiers: Modifiers::default(),
    }
}

fn state(root: &Element, id: &str) -> &'static str {
    match find_element(root, id) {
        Some(el) if el.has_class(ACTIVE_CLASS) => "open",
        Some(_) => "closed",
        None => "missing",
    }
}

fn page() -> Element {
    Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("nav")
                .class("navbar")
                .child(
                    Element::box_()
                        .id("burger")
                        .class("navbar-burger")
                        .data("data-target", "nav-menu"),
                )
                .child(
                    Element::box_()
                        .id("nav-menu")
                        .class("navbar-menu")
                        .child(Element::text("Home").id("nav-home"))
                        .child(Element::text("Settings").id("nav-settings")),
                ),
        )
        .child(
            Element::box_()
                .id("open-confirm")
                .class("js-modal-trigger")
                .class("button")
                .data("data-target", "confirm-dialog")
                .child(Element::text("Delete bookmark").id("open-confirm-label")),
        )
        .child(
            Element::box_()
                .id("confirm-dialog")
                .class("modal")
                .child(
                    Element::box_()
                        .id("confirm-dialog-bg")
                        .class("modal-background"),
                )
                .child(
                    Element::box_()
                        .id("confirm-dialog-card")
                        .class("modal-card")
                        .child(
                            Element::box_()
                                .id("confirm-dialog-head")
                                .class("modal-card-head")
                                .child(Element::text("Are you sure?").id("confirm-dialog-title"))
                                .child(
                                    Element::box_()
                                        .id("confirm-dialog-delete")
                                        .class("delete"),
                                ),
                        )
                        .child(
                            Element::box_()
                                .id("confirm-dialog-foot")
                                .class("modal-card-foot")
                                .child(Element::box_().id("confirm-dialog-ok").class("button")),
                        ),
                )
                .child(
                    Element::box_()
                        .id("confirm-dialog-close")
                        .class("modal-close"),
                ),
        )
}
