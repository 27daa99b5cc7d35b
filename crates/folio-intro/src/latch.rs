//! The page root's one-shot "show intro" flag.

/// One-shot flag deciding whether the intro or the main content is mounted.
///
/// Starts out showing the intro. [`dismiss`](Self::dismiss) is the only
/// mutation and there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroLatch {
    dismissed: bool,
}

impl IntroLatch {
    pub fn new() -> Self {
        Self { dismissed: false }
    }

    /// A latch that never shows the intro.
    pub fn skipped() -> Self {
        Self { dismissed: true }
    }

    pub fn showing(&self) -> bool {
        !self.dismissed
    }

    /// Hide the intro. Returns true only for the call that flipped the flag.
    pub fn dismiss(&mut self) -> bool {
        let flipped = !self.dismissed;
        self.dismissed = true;
        flipped
    }
}

impl Default for IntroLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// What the page root mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Intro,
    Main,
}

impl PageView {
    pub fn of(latch: &IntroLatch) -> Self {
        if latch.showing() {
            PageView::Intro
        } else {
            PageView::Main
        }
    }
}
