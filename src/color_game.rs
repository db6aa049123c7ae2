//! "Pick a color" mini-game.
//!
//! DESIGN
//! ======
//! The game is a three-state machine. Every transition returns what the
//! host must change on the page; control visibility is derived from the
//! state alone so it cannot drift from it.
//!
//! ```text
//!   Idle --play--> Picking --commit--> Applied --reset--> Idle
//! ```
//!
//! Reset reads the applied theme because the fallback background differs
//! between light and dark mode.

#[cfg(test)]
#[path = "color_game_test.rs"]
mod color_game_test;

use crate::color::{Backdrop, Rgb};
use crate::consts::{DEFAULT_ACCENT, DEFAULT_LINK, DEFAULT_PICKER_VALUE};
use crate::theme::Theme;

/// Background restored on reset in light mode.
pub const LIGHT_RESET_BACKGROUND: &str = "white";

/// Background restored on reset in dark mode: the theme's own token.
pub const DARK_RESET_BACKGROUND: &str = "var(--bg-primary)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Idle,
    Picking,
    Applied,
}

/// The five page controls the game shows and hides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    PlayButton,
    PickerContainer,
    ColorInput,
    Confirmation,
    ResetButton,
}

impl Control {
    /// `display` value used when the control is shown.
    #[must_use]
    pub fn shown_display(self) -> &'static str {
        match self {
            Self::PickerContainer | Self::ResetButton => "flex",
            Self::PlayButton | Self::ColorInput | Self::Confirmation => "block",
        }
    }
}

/// `display` value of a hidden control.
pub const HIDDEN_DISPLAY: &str = "none";

/// Which game controls are shown.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlVisibility {
    pub play_button: bool,
    pub picker_container: bool,
    pub color_input: bool,
    pub confirmation: bool,
    pub reset_button: bool,
}

impl ControlVisibility {
    #[must_use]
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::Idle => Self {
                play_button: true,
                picker_container: false,
                color_input: true,
                confirmation: false,
                reset_button: false,
            },
            GameState::Picking => Self {
                play_button: false,
                picker_container: true,
                color_input: true,
                confirmation: false,
                reset_button: false,
            },
            GameState::Applied => Self {
                play_button: false,
                picker_container: true,
                color_input: false,
                confirmation: true,
                reset_button: true,
            },
        }
    }

    /// Inline `display` value for every control.
    #[must_use]
    pub fn display_values(self) -> [(Control, &'static str); 5] {
        let display = |control: Control, on: bool| (control, if on { control.shown_display() } else { HIDDEN_DISPLAY });
        [
            display(Control::PlayButton, self.play_button),
            display(Control::PickerContainer, self.picker_container),
            display(Control::ColorInput, self.color_input),
            display(Control::Confirmation, self.confirmation),
            display(Control::ResetButton, self.reset_button),
        ]
    }
}

/// Page style writes produced by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylePatch {
    /// Inline `background` of `<body>`.
    pub background: String,
    /// `--gradient-start` on the document element.
    pub accent: String,
    /// `--color-link` on the document element.
    pub link: String,
    /// New value for the color input, when it changes.
    pub picker_value: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ColorGame {
    state: GameState,
    applied: Option<Rgb>,
}

impl ColorGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn visibility(&self) -> ControlVisibility {
        ControlVisibility::for_state(self.state)
    }

    /// Accent currently applied, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Rgb> {
        self.applied
    }

    /// Open the picker. Returns `true` when the game moved to `Picking`
    /// and the picker should be scrolled into view.
    pub fn play(&mut self) -> bool {
        if self.state != GameState::Idle {
            return false;
        }
        self.state = GameState::Picking;
        true
    }

    /// Apply the picked color. The caller launches a confetti burst on `Some`.
    ///
    /// An unparseable value leaves the game untouched.
    pub fn commit(&mut self, raw: &str) -> Option<StylePatch> {
        let color = Rgb::parse_hex(raw)?;
        let hex = color.to_hex();
        self.state = GameState::Applied;
        self.applied = Some(color);
        Some(StylePatch {
            background: Backdrop::for_color(color).gradient(color),
            accent: hex.clone(),
            link: hex,
            picker_value: None,
        })
    }

    /// Return to defaults. Valid from any state.
    pub fn reset(&mut self, theme: Theme) -> StylePatch {
        self.state = GameState::Idle;
        self.applied = None;
        let background = if theme.is_dark() { DARK_RESET_BACKGROUND } else { LIGHT_RESET_BACKGROUND };
        StylePatch {
            background: background.to_owned(),
            accent: DEFAULT_ACCENT.to_owned(),
            link: DEFAULT_LINK.to_owned(),
            picker_value: Some(DEFAULT_PICKER_VALUE.to_owned()),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::mount;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlInputElement};

    use super::{ColorGame, Control, ControlVisibility, StylePatch};
    use crate::anchor::ScrollBlock;
    use crate::config::DomHooks;
    use crate::confetti::{self, Burst};
    use crate::consts::PICKER_SCROLL_DELAY_MS;
    use crate::dom;
    use crate::error::PageError;
    use crate::theme::SharedTheme;

    struct Controls {
        play_button: HtmlElement,
        picker_container: HtmlElement,
        color_input: HtmlInputElement,
        confirmation: HtmlElement,
        reset_button: HtmlElement,
    }

    impl Controls {
        fn find(document: &Document, hooks: &DomHooks) -> Result<Self, PageError> {
            let color_input = dom::by_id(document, &hooks.color_input_id)?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| PageError::MissingElement(format!("input#{}", hooks.color_input_id)))?;
            Ok(Self {
                play_button: dom::by_id(document, &hooks.play_button_id)?,
                picker_container: dom::query(document, &hooks.picker_container_selector)?,
                color_input,
                confirmation: dom::query(document, &hooks.confirmation_selector)?,
                reset_button: dom::query(document, &hooks.reset_button_selector)?,
            })
        }

        fn element(&self, control: Control) -> &HtmlElement {
            match control {
                Control::PlayButton => &self.play_button,
                Control::PickerContainer => &self.picker_container,
                Control::ColorInput => &self.color_input,
                Control::Confirmation => &self.confirmation,
                Control::ResetButton => &self.reset_button,
            }
        }

        fn show(&self, visibility: ControlVisibility) {
            for (control, display) in visibility.display_values() {
                dom::set_display(self.element(control), display);
            }
        }
    }

    struct Session {
        document: Document,
        controls: Controls,
        game: ColorGame,
        theme: SharedTheme,
        rng: SmallRng,
    }

    impl Session {
        fn paint(&self, patch: &StylePatch) {
            if let Some(body) = self.document.body() {
                dom::set_style(&body, "background", &patch.background);
            }
            dom::set_root_property(&self.document, "--gradient-start", &patch.accent);
            dom::set_root_property(&self.document, "--color-link", &patch.link);
            if let Some(value) = &patch.picker_value {
                self.controls.color_input.set_value(value);
            }
        }
    }

    fn seed() -> u64 {
        js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits()
    }

    /// Wire play, commit and reset. Skips the game when any control is missing.
    pub fn mount(document: &Document, hooks: &DomHooks, theme: SharedTheme) -> Result<(), PageError> {
        let controls = Controls::find(document, hooks)?;
        let session = Rc::new(RefCell::new(Session {
            document: document.clone(),
            controls,
            game: ColorGame::new(),
            theme,
            rng: SmallRng::seed_from_u64(seed()),
        }));
        let borrowed = session.borrow();

        let s = Rc::clone(&session);
        dom::on_click(&borrowed.controls.play_button, move |_event| {
            let mut session = s.borrow_mut();
            if !session.game.play() {
                return;
            }
            session.controls.show(session.game.visibility());
            let container = session.controls.picker_container.clone();
            dom::after(PICKER_SCROLL_DELAY_MS, move || dom::scroll_to(&container, ScrollBlock::Center));
        })?;

        let s = Rc::clone(&session);
        dom::listen(&borrowed.controls.color_input, "change", move |_event| {
            let mut guard = s.borrow_mut();
            let session = &mut *guard;
            let raw = session.controls.color_input.value();
            let Some(patch) = session.game.commit(&raw) else {
                log::warn!("ignoring unparseable color {raw:?}");
                return;
            };
            session.paint(&patch);
            session.controls.show(session.game.visibility());
            let burst = Burst::new(&mut session.rng, js_sys::Date::now());
            confetti::launch(&session.document, &burst);
        })?;

        let s = Rc::clone(&session);
        dom::on_click(&borrowed.controls.reset_button, move |_event| {
            let mut session = s.borrow_mut();
            let theme = session.theme.borrow().current();
            let patch = session.game.reset(theme);
            session.paint(&patch);
            session.controls.show(session.game.visibility());
        })?;

        Ok(())
    }
}
