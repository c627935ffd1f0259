use super::*;

fn open_menu() -> MobileMenu {
    let mut menu = MobileMenu::new();
    menu.toggle();
    menu
}

#[test]
fn wide_resize_closes_open_menu_after_debounce() {
    let mut watch = ResizeWatch::new(250, 768.0);
    let mut menu = open_menu();
    let ticket = watch.on_resize(0.0);

    assert!(watch.on_timer(ticket, 249.0, 1024.0, &mut menu).is_empty());
    assert!(menu.is_open());

    let effects = watch.on_timer(ticket, 250.0, 1024.0, &mut menu);
    assert!(!menu.is_open());
    assert!(effects.contains(&Effect::RemoveClass(Target::NavMenu, "active")));
}

#[test]
fn burst_of_resizes_only_acts_on_the_last() {
    let mut watch = ResizeWatch::new(250, 768.0);
    let mut menu = open_menu();
    let early = watch.on_resize(0.0);
    let late = watch.on_resize(200.0);

    assert!(watch.on_timer(early, 250.0, 1024.0, &mut menu).is_empty());
    assert!(menu.is_open());
    assert!(!watch.on_timer(late, 450.0, 1024.0, &mut menu).is_empty());
    assert!(!menu.is_open());
}

#[test]
fn narrow_resize_keeps_menu_open() {
    let mut watch = ResizeWatch::new(250, 768.0);
    let mut menu = open_menu();
    let ticket = watch.on_resize(0.0);
    assert!(watch.on_timer(ticket, 300.0, 768.0, &mut menu).is_empty());
    assert!(menu.is_open());
}

#[test]
fn closed_menu_is_left_alone() {
    let mut watch = ResizeWatch::new(250, 768.0);
    let mut menu = MobileMenu::new();
    let ticket = watch.on_resize(0.0);
    assert!(watch.on_timer(ticket, 300.0, 1440.0, &mut menu).is_empty());
}

#[test]
fn load_marks_body() {
    assert_eq!(on_load(), vec![Effect::AddClass(Target::Body, "loaded")]);
}

#[test]
fn only_complete_ready_state_counts_as_loaded() {
    assert!(already_loaded("complete"));
    assert!(!already_loaded("interactive"));
    assert!(!already_loaded("loading"));
}
