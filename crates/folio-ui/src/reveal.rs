//! Scroll-reveal hook.
//!
//! A section starts hidden (faded and offset) and transitions in the first
//! time it becomes visible. Once revealed it stays revealed.

use dioxus::prelude::*;

/// Direction a block slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    fn css_value(self) -> &'static str {
        match self {
            RevealDirection::Up => "up",
            RevealDirection::Left => "left",
            RevealDirection::Right => "right",
        }
    }
}

/// Class list for a revealable block.
pub fn reveal_class(base: &str, direction: RevealDirection, visible: bool) -> String {
    let state = if visible { "is-visible" } else { "is-hidden" };
    format!("{base} reveal reveal-{} {state}", direction.css_value())
}

/// Latched visibility flag of one block.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    visible: Signal<bool>,
}

impl ScrollReveal {
    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }

    /// Feed an `onvisible` event.
    pub fn observe(&self, evt: Event<VisibleData>) {
        let mut visible = self.visible;
        if *visible.peek() {
            return;
        }
        if evt.data().is_intersecting().unwrap_or(false) {
            visible.set(true);
        }
    }

    pub fn class(&self, base: &str, direction: RevealDirection) -> String {
        reveal_class(base, direction, self.is_visible())
    }
}

/// Create a reveal flag owned by the calling component.
pub fn use_scroll_reveal() -> ScrollReveal {
    let visible = use_signal(|| false);
    ScrollReveal { visible }
}
