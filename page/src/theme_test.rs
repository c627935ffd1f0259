use super::*;

fn manager() -> ThemeManager<MemoryStore> {
    ThemeManager::new(MemoryStore::new(), "theme")
}

fn stored(mgr: &ThemeManager<MemoryStore>) -> Option<String> {
    mgr.store().load("theme")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parses_both_spellings() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
}

#[test]
fn theme_rejects_unknown_value() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme \"sepia\"");
}

#[test]
fn theme_flip_is_involution() {
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn theme_spelling_round_trips_through_storage() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// Preference
// =============================================================

#[test]
fn preference_defaults_to_dark_when_nothing_stored() {
    assert_eq!(manager().preference(), Theme::Dark);
}

#[test]
fn preference_ignores_system_signal_when_nothing_stored() {
    let mut mgr = manager();
    let before = mgr.preference();
    // init never consults the system; only an explicit change event does.
    mgr.init();
    assert_eq!(before, Theme::Dark);
    assert_eq!(mgr.current(), Theme::Dark);
}

#[test]
fn preference_reads_stored_value() {
    let mut store = MemoryStore::new();
    store.save("theme", "light");
    let mgr = ThemeManager::new(store, "theme");
    assert_eq!(mgr.preference(), Theme::Light);
    assert_eq!(mgr.current(), Theme::Light);
}

#[test]
fn preference_falls_back_to_dark_on_garbage() {
    let mut store = MemoryStore::new();
    store.save("theme", "purple");
    let mgr = ThemeManager::new(store, "theme");
    assert_eq!(mgr.preference(), Theme::Dark);
    assert!(mgr.has_stored_choice());
}

// =============================================================
// Apply / toggle
// =============================================================

#[test]
fn init_sets_attribute_without_persisting() {
    let mut mgr = manager();
    let effects = mgr.init();
    assert_eq!(
        effects,
        vec![Effect::SetAttribute(Target::Root, "data-theme", "dark".to_owned())]
    );
    assert_eq!(stored(&mgr), None);
}

#[test]
fn apply_sets_attribute_and_persists() {
    let mut mgr = manager();
    let effects = mgr.apply(Theme::Light);
    assert_eq!(
        effects,
        vec![Effect::SetAttribute(Target::Root, "data-theme", "light".to_owned())]
    );
    assert_eq!(stored(&mgr).as_deref(), Some("light"));
}

#[test]
fn toggle_always_stores_the_opposite() {
    let mut mgr = manager();
    mgr.init();
    for _ in 0..5 {
        let before = mgr.current();
        mgr.toggle();
        let after: Theme = stored(&mgr).unwrap().parse().unwrap();
        assert_eq!(after, before.flipped());
    }
}

// =============================================================
// System preference
// =============================================================

#[test]
fn system_change_applies_when_nothing_stored() {
    let mut mgr = manager();
    mgr.init();
    let effects = mgr.on_system_change(false);
    assert_eq!(effects.len(), 1);
    assert_eq!(mgr.current(), Theme::Light);
    assert_eq!(stored(&mgr).as_deref(), Some("light"));
}

#[test]
fn system_change_never_overrides_user_toggle() {
    let mut mgr = manager();
    mgr.init();
    mgr.toggle();
    let chosen = stored(&mgr);
    assert!(mgr.on_system_change(true).is_empty());
    assert!(mgr.on_system_change(false).is_empty());
    assert_eq!(stored(&mgr), chosen);
    assert_eq!(mgr.current(), Theme::Light);
}
