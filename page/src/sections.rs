//! Active nav link tracking for the section under the viewport.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use crate::consts::CLASS_ACTIVE;
use crate::effect::{Effect, Target};

/// Layout of one `section[id]`, measured in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, scroll_y: f64, navbar_height: f64, offset: f64) -> bool {
        scroll_y >= self.top - navbar_height - offset && scroll_y < self.top + self.height
    }
}

/// Id of the section the viewport is in.
///
/// If ranges overlap, the later section in document order wins.
#[must_use]
pub fn current_section(sections: &[SectionSpan], scroll_y: f64, navbar_height: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y, navbar_height, offset))
        .map(|section| section.id.as_str())
}

/// Clear `active` from every nav link and set it on the one whose `href`
/// is `#<section_id>`. `link_hrefs` is indexed like [`Target::NavLink`].
#[must_use]
pub fn highlight(link_hrefs: &[String], section_id: &str) -> Vec<Effect> {
    let wanted = format!("#{section_id}");
    let mut effects = link_hrefs
        .iter()
        .enumerate()
        .map(|(i, _)| Effect::RemoveClass(Target::NavLink(i), CLASS_ACTIVE))
        .collect::<Vec<_>>();
    effects.extend(
        link_hrefs
            .iter()
            .enumerate()
            .filter(|(_, href)| **href == wanted)
            .map(|(i, _)| Effect::AddClass(Target::NavLink(i), CLASS_ACTIVE)),
    );
    effects
}
