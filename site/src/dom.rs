//! The page's resolved element contract and the effect applier.
//!
//! ARCHITECTURE
//! ============
//! Elements are queried once at mount into [`Elements`], then shared by every
//! behavior through an `Rc`. Behaviors hand their [`Effect`]s to
//! [`Elements::apply`], which maps each [`Target`] back to a live element.

use page::effect::{Effect, Target};
use page::menu::FocusRing;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{Result, SiteError};
use crate::selectors;

pub(crate) struct Elements {
    pub window: Window,
    pub document: Document,
    pub root: HtmlElement,
    pub body: HtmlElement,
    pub navbar: HtmlElement,
    pub nav_menu: HtmlElement,
    pub menu_button: HtmlElement,
    pub theme_toggle: HtmlElement,
    pub nav_links: Vec<HtmlElement>,
    pub anchors: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub reveals: Vec<HtmlElement>,
    pub counters: Vec<HtmlElement>,
    pub skill_tags: Vec<HtmlElement>,
    pub project_cards: Vec<HtmlElement>,
    pub menu_focusables: Vec<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub hero_gradient: Option<HtmlElement>,
    pub hero_particles: Option<HtmlElement>,
    pub typewriter: Option<HtmlElement>,
}

impl Elements {
    /// Query the whole contract from the current document.
    ///
    /// # Errors
    ///
    /// [`SiteError::MissingElement`] if a required element is absent.
    pub fn resolve(window: Window) -> Result<Self> {
        let document = document(&window)?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(SiteError::NoBrowser("root element"))?;
        let body = document.body().ok_or(SiteError::NoBrowser("body"))?;
        let nav_menu = require(&document, selectors::NAV_MENU)?;
        let menu_focusables = collect(&nav_menu.query_selector_all(selectors::MENU_FOCUSABLES)?);

        Ok(Self {
            navbar: require(&document, selectors::NAVBAR)?,
            menu_button: require(&document, selectors::MENU_BUTTON)?,
            theme_toggle: require(&document, selectors::THEME_TOGGLE)?,
            nav_links: all(&document, selectors::NAV_LINKS)?,
            anchors: all(&document, selectors::IN_PAGE_ANCHORS)?,
            sections: all(&document, selectors::SECTIONS)?,
            reveals: all(&document, selectors::REVEALS)?,
            counters: all(&document, selectors::COUNTERS)?,
            skill_tags: all(&document, selectors::SKILL_TAGS)?,
            project_cards: all(&document, selectors::PROJECT_CARDS)?,
            hero: optional(&document, selectors::HERO)?,
            hero_gradient: optional(&document, selectors::HERO_GRADIENT)?,
            hero_particles: optional(&document, selectors::HERO_PARTICLES)?,
            typewriter: optional(&document, selectors::TYPEWRITER)?,
            menu_focusables,
            nav_menu,
            root,
            body,
            document,
            window,
        })
    }

    fn element(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Root => Some(&self.root),
            Target::Body => Some(&self.body),
            Target::Navbar => Some(&self.navbar),
            Target::NavMenu => Some(&self.nav_menu),
            Target::MenuButton => Some(&self.menu_button),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Reveal(i) => self.reveals.get(i),
            Target::Counter(i) => self.counters.get(i),
            Target::HeroGradient => self.hero_gradient.as_ref(),
            Target::HeroParticles => self.hero_particles.as_ref(),
            Target::SkillTag(i) => self.skill_tags.get(i),
            Target::ProjectCard(i) => self.project_cards.get(i),
            Target::MenuFocusable(i) => self.menu_focusables.get(i),
            Target::Typewriter => self.typewriter.as_ref(),
        }
    }

    /// Apply effects in order. `event` is the DOM event being handled, if
    /// any, for [`Effect::PreventDefault`].
    pub fn apply(&self, effects: &[Effect], event: Option<&Event>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect, event) {
                log::warn!("effect {effect:?} failed: {err}");
            }
        }
    }

    fn apply_one(&self, effect: &Effect, event: Option<&Event>) -> Result<()> {
        match effect {
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
                return Ok(());
            }
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
                return Ok(());
            }
            _ => {}
        }

        let Some(target) = effect.target() else {
            return Ok(());
        };
        let Some(el) = self.element(target) else {
            log::debug!("skipping {effect:?}: {target:?} not on this page");
            return Ok(());
        };
        match effect {
            Effect::AddClass(_, class) => el.class_list().add_1(class)?,
            Effect::RemoveClass(_, class) => el.class_list().remove_1(class)?,
            Effect::SetAttribute(_, name, value) => el.set_attribute(name, value)?,
            Effect::SetStyle(_, property, value) => el.style().set_property(property, value)?,
            Effect::SetText(_, text) => el.set_text_content(Some(text.as_str())),
            Effect::Focus(_) => el.focus()?,
            Effect::ScrollTo { .. } | Effect::PreventDefault => {}
        }
        Ok(())
    }

    /// Where keyboard focus sits among the menu's focusable elements.
    pub fn focus_ring(&self) -> FocusRing {
        let focused = self
            .document
            .active_element()
            .and_then(|active| index_of(&self.menu_focusables, &active));
        FocusRing::new(focused, self.menu_focusables.len())
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn inner_width(&self) -> f64 {
        dimension(self.window.inner_width())
    }

    pub fn inner_height(&self) -> f64 {
        dimension(self.window.inner_height())
    }

    /// Milliseconds on the same clock as animation-frame timestamps.
    pub fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map_or_else(js_sys::Date::now, |perf| perf.now())
    }

    /// Run `f` on the next animation frame with the frame timestamp.
    ///
    /// # Errors
    ///
    /// Propagates a failed `requestAnimationFrame` call.
    pub fn request_frame(&self, f: impl FnOnce(f64) + 'static) -> Result<()> {
        let callback = Closure::once_into_js(f);
        self.window.request_animation_frame(callback.unchecked_ref())?;
        Ok(())
    }
}

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoBrowser("window"))
}

pub(crate) fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(SiteError::NoBrowser("document"))
}

/// Position of `target` within `list`, compared by node identity.
pub(crate) fn index_of(list: &[HtmlElement], target: &Element) -> Option<usize> {
    list.iter().position(|el| {
        let el: &Element = el;
        el == target
    })
}

fn require(document: &Document, selector: &'static str) -> Result<HtmlElement> {
    optional(document, selector)?.ok_or(SiteError::MissingElement(selector))
}

fn optional(document: &Document, selector: &'static str) -> Result<Option<HtmlElement>> {
    let found = document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        log::debug!("optional element {selector} not found");
    }
    Ok(found)
}

fn all(document: &Document, selector: &'static str) -> Result<Vec<HtmlElement>> {
    Ok(collect(&document.query_selector_all(selector)?))
}

fn collect(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn dimension(value: std::result::Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
