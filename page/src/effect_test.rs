use super::*;

#[test]
fn element_effects_report_their_target() {
    assert_eq!(Effect::AddClass(Target::Navbar, "x").target(), Some(Target::Navbar));
    assert_eq!(Effect::Focus(Target::MenuFocusable(2)).target(), Some(Target::MenuFocusable(2)));
    assert_eq!(
        Effect::SetStyle(Target::Body, "overflow", String::new()).target(),
        Some(Target::Body)
    );
}

#[test]
fn window_effects_have_no_target() {
    assert_eq!(Effect::ScrollTo { top: 10.0 }.target(), None);
    assert_eq!(Effect::PreventDefault.target(), None);
}

#[test]
fn indexed_targets_are_distinct() {
    assert_ne!(Target::NavLink(0), Target::NavLink(1));
    assert_ne!(Target::Reveal(0), Target::Counter(0));
}
