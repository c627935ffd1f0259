use std::collections::HashSet;

use super::*;

fn layout() -> Vec<SectionSpan> {
    vec![
        SectionSpan::new("home", 0.0, 800.0),
        SectionSpan::new("about", 800.0, 600.0),
        SectionSpan::new("projects", 1400.0, 1000.0),
        SectionSpan::new("contact", 2400.0, 500.0),
    ]
}

fn links() -> Vec<String> {
    ["#home", "#about", "#projects", "#contact"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect()
}

/// Replays effects over an initial set of active links.
fn active_after(initial: &[usize], effects: &[Effect]) -> HashSet<usize> {
    let mut active = initial.iter().copied().collect::<HashSet<_>>();
    for effect in effects {
        match effect {
            Effect::AddClass(Target::NavLink(i), "active") => {
                active.insert(*i);
            }
            Effect::RemoveClass(Target::NavLink(i), "active") => {
                active.remove(i);
            }
            _ => {}
        }
    }
    active
}

#[test]
fn finds_section_under_viewport() {
    assert_eq!(current_section(&layout(), 1800.0, 70.0, 100.0), Some("projects"));
}

#[test]
fn section_becomes_current_ahead_of_its_top() {
    // 1400 - 70 - 100 = 1230 is the first offset that counts as "projects".
    assert_eq!(current_section(&layout(), 1230.0, 70.0, 100.0), Some("projects"));
}

#[test]
fn overlapping_ranges_pick_the_later_section() {
    // 1250 is inside "about" (ends at 1400) and inside the lead of "projects".
    assert_eq!(current_section(&layout(), 1250.0, 70.0, 100.0), Some("projects"));
}

#[test]
fn no_section_past_the_end() {
    assert_eq!(current_section(&layout(), 5000.0, 70.0, 100.0), None);
}

#[test]
fn no_sections_means_no_match() {
    assert_eq!(current_section(&[], 0.0, 70.0, 100.0), None);
}

#[test]
fn exactly_the_projects_link_ends_active() {
    let spans = layout();
    let id = current_section(&spans, 1800.0, 70.0, 100.0).unwrap();
    let effects = highlight(&links(), id);
    let active = active_after(&[0, 1], &effects);
    assert_eq!(active, HashSet::from([2]));
}

#[test]
fn unknown_section_clears_all_links() {
    let effects = highlight(&links(), "blog");
    assert!(active_after(&[3], &effects).is_empty());
}
