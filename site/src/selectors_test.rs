use super::*;

#[test]
fn required_elements_are_ids() {
    for selector in REQUIRED {
        assert!(selector.starts_with('#'), "{selector} should be an id selector");
    }
}

#[test]
fn typewriter_selector_matches_its_attribute() {
    assert_eq!(TYPEWRITER, format!("[{TYPEWRITER_ATTRIBUTE}]"));
}

#[test]
fn anchor_selector_targets_fragments() {
    assert!(IN_PAGE_ANCHORS.contains("href^=\"#\""));
}
