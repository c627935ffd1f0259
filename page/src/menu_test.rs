use super::*;

fn opened() -> MobileMenu {
    let mut menu = MobileMenu::new();
    menu.toggle();
    menu
}

#[test]
fn menu_starts_closed() {
    assert!(!MobileMenu::new().is_open());
}

#[test]
fn toggle_opens_with_markers_and_scroll_lock() {
    let mut menu = MobileMenu::new();
    let effects = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(
        effects,
        vec![
            Effect::AddClass(Target::MenuButton, "active"),
            Effect::AddClass(Target::NavMenu, "active"),
            Effect::SetStyle(Target::Body, "overflow", "hidden".to_owned()),
        ]
    );
}

#[test]
fn toggle_twice_closes() {
    let mut menu = opened();
    let effects = menu.toggle();
    assert!(!menu.is_open());
    assert!(effects.contains(&Effect::RemoveClass(Target::NavMenu, "active")));
    assert!(effects.contains(&Effect::SetStyle(Target::Body, "overflow", String::new())));
}

#[test]
fn close_is_idempotent() {
    let mut menu = MobileMenu::new();
    let first = menu.close();
    let second = menu.close();
    assert!(!menu.is_open());
    assert_eq!(first, second);
    assert!(first.iter().all(|e| !matches!(e, Effect::AddClass(..))));
}

#[test]
fn escape_closes_open_menu() {
    let mut menu = opened();
    let effects = menu.on_key("Escape", false, FocusRing::default());
    assert!(!menu.is_open());
    assert_eq!(effects.len(), 3);
}

#[test]
fn escape_ignored_when_closed() {
    let mut menu = MobileMenu::new();
    assert!(menu.on_key("Escape", false, FocusRing::default()).is_empty());
}

#[test]
fn tab_on_last_wraps_to_first() {
    let mut menu = opened();
    let effects = menu.on_key("Tab", false, FocusRing::new(Some(4), 5));
    assert_eq!(
        effects,
        vec![Effect::PreventDefault, Effect::Focus(Target::MenuFocusable(0))]
    );
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let mut menu = opened();
    let effects = menu.on_key("Tab", true, FocusRing::new(Some(0), 5));
    assert_eq!(
        effects,
        vec![Effect::PreventDefault, Effect::Focus(Target::MenuFocusable(4))]
    );
}

#[test]
fn tab_in_the_middle_keeps_default_order() {
    let mut menu = opened();
    assert!(menu.on_key("Tab", false, FocusRing::new(Some(2), 5)).is_empty());
    assert!(menu.on_key("Tab", true, FocusRing::new(Some(2), 5)).is_empty());
    assert!(menu.on_key("Tab", true, FocusRing::new(Some(4), 5)).is_empty());
    assert!(menu.on_key("Tab", false, FocusRing::new(Some(0), 5)).is_empty());
}

#[test]
fn tab_is_not_trapped_when_closed() {
    let mut menu = MobileMenu::new();
    assert!(menu.on_key("Tab", false, FocusRing::new(Some(4), 5)).is_empty());
}

#[test]
fn tab_with_focus_outside_menu_is_ignored() {
    let mut menu = opened();
    assert!(menu.on_key("Tab", false, FocusRing::new(None, 5)).is_empty());
    assert!(menu.on_key("Tab", true, FocusRing::new(None, 0)).is_empty());
}

#[test]
fn other_keys_are_ignored() {
    let mut menu = opened();
    assert!(menu.on_key("Enter", false, FocusRing::new(Some(0), 5)).is_empty());
    assert!(menu.is_open());
}
