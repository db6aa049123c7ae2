//! Fade/slide-in of content blocks as they scroll into view.
//!
//! Each tracked element starts hidden and is revealed the first time the
//! visibility observer reports it at least [`REVEAL_THRESHOLD`] visible.
//! The transition is one-way; later notifications are ignored.
//!
//! A ratio up to [`RATIO_EPSILON`] below the threshold still counts as a
//! crossing, since browsers report the crossing ratio with float noise.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Tolerance applied below the threshold.
pub const RATIO_EPSILON: f64 = 1e-3;

/// Inline transition set on every tracked element.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Inline `(opacity, transform)` for this state.
    #[must_use]
    pub fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Hidden => ("0", "translateY(30px)"),
            Self::Revealed => ("1", "translateY(0)"),
        }
    }
}

/// Observer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN.to_owned() }
    }
}

/// One entry of a visibility notification batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub index: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    options: RevealOptions,
    states: Vec<RevealState>,
}

impl RevealSet {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { options, states: Vec::new() }
    }

    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Start tracking one more element, hidden. Returns its index.
    pub fn track(&mut self) -> usize {
        self.states.push(RevealState::Hidden);
        self.states.len() - 1
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Revealed).count()
    }

    /// Process one notification batch. Returns the indices revealed by it,
    /// in batch order. Unknown indices are ignored.
    pub fn observe(&mut self, batch: &[Visibility]) -> Vec<usize> {
        let threshold = self.options.threshold;
        batch
            .iter()
            .filter(|entry| entry.is_intersecting && entry.ratio + RATIO_EPSILON >= threshold)
            .filter_map(|entry| {
                let state = self.states.get_mut(entry.index)?;
                if *state == RevealState::Revealed {
                    return None;
                }
                *state = RevealState::Revealed;
                Some(entry.index)
            })
            .collect()
    }
}

/// Position of `target` among the tracked elements.
pub fn index_of<'a, T: PartialEq + 'a>(tracked: impl IntoIterator<Item = &'a T>, target: &T) -> Option<usize> {
    tracked.into_iter().position(|el| el == target)
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::{REVEAL_TRANSITION, RevealOptions, RevealSet, RevealState, Visibility, index_of};
    use crate::dom;
    use crate::error::PageError;

    fn paint(el: &HtmlElement, state: RevealState) {
        let (opacity, transform) = state.style();
        dom::set_style(el, "opacity", opacity);
        dom::set_style(el, "transform", transform);
    }

    fn entry_visibility(tracked: &[HtmlElement], entry: &IntersectionObserverEntry) -> Option<Visibility> {
        let elements = tracked.iter().map(AsRef::<Element>::as_ref);
        let index = index_of(elements, &entry.target())?;
        Some(Visibility { index, is_intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() })
    }

    /// Hide every element matching `selector` and reveal each on first sight.
    /// Returns how many elements are tracked.
    pub fn mount(document: &Document, selector: &str) -> Result<usize, PageError> {
        let elements = dom::query_all(document, selector)?;
        if elements.is_empty() {
            return Ok(0);
        }

        let options = RevealOptions::default();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let mut set = RevealSet::new(options);
        for el in &elements {
            set.track();
            paint(el, RevealState::Hidden);
            dom::set_style(el, "transition", REVEAL_TRANSITION);
        }

        let set = Rc::new(RefCell::new(set));
        let tracked = Rc::new(elements);
        let for_cb = Rc::clone(&tracked);
        let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let batch: Vec<Visibility> = entries
                    .iter()
                    .filter_map(dom::cast::<IntersectionObserverEntry>)
                    .filter_map(|entry| entry_visibility(&for_cb, &entry))
                    .collect();
                for index in set.borrow_mut().observe(&batch) {
                    if let Some(el) = for_cb.get(index) {
                        paint(el, RevealState::Revealed);
                        observer.unobserve(el);
                    }
                }
            },
        );

        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
        cb.forget();
        for el in tracked.iter() {
            observer.observe(el);
        }
        Ok(tracked.len())
    }
}
