//! Character-by-character heading reveal.
//!
//! [`Typewriter`] owns the source text and a cursor. The host calls
//! [`Typewriter::tick`] once per scheduled callback and schedules the next
//! one only when the returned [`Tick`] asks for it, so ticks never overlap.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts::{TYPING_DELAY_MS, TYPING_START_DELAY_MS};

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Append `ch` to the target and tick again after `next_in_ms`.
    Typed { ch: char, next_in_ms: u32 },
    /// Text exhausted: apply the terminal style once, stop scheduling.
    Finished,
    /// Already finished; nothing to do.
    Idle,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
    finished: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), cursor: 0, finished: false }
    }

    /// Delay before the first tick after load.
    #[must_use]
    pub fn start_delay_ms() -> u32 {
        TYPING_START_DELAY_MS
    }

    pub fn tick(&mut self) -> Tick {
        if let Some(&ch) = self.chars.get(self.cursor) {
            self.cursor += 1;
            return Tick::Typed { ch, next_in_ms: TYPING_DELAY_MS };
        }
        if self.finished {
            return Tick::Idle;
        }
        self.finished = true;
        Tick::Finished
    }

    /// Characters revealed so far.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the terminal style has been applied.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The text the target should currently show.
    #[must_use]
    pub fn revealed(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, HtmlElement};

    use super::{Tick, Typewriter};
    use crate::dom;
    use crate::error::PageError;

    const FINISHED_CLASS: &str = "text-gradient";

    /// Start typing `text` into `#element_id` after the initial delay.
    pub fn mount(document: &Document, element_id: &str, text: &str) -> Result<(), PageError> {
        let target = dom::by_id(document, element_id)?;
        let typewriter = Typewriter::new(text);
        schedule(target, typewriter, Typewriter::start_delay_ms());
        Ok(())
    }

    fn schedule(target: HtmlElement, typewriter: Typewriter, delay_ms: u32) {
        dom::after(delay_ms, move || step(target, typewriter));
    }

    fn step(target: HtmlElement, mut typewriter: Typewriter) {
        match typewriter.tick() {
            Tick::Typed { ch, next_in_ms } => {
                let mut shown = target.text_content().unwrap_or_default();
                shown.push(ch);
                target.set_text_content(Some(&shown));
                schedule(target, typewriter, next_in_ms);
            }
            Tick::Finished => dom::set_class(&target, FINISHED_CLASS, true),
            Tick::Idle => {}
        }
    }
}
