//! Carousel navigation with wraparound

/// Direction of the last navigation step. Used only to choose which way the
/// entry/exit transition animates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlideDirection {
    #[default]
    None,
    Forward,
    Backward,
}

impl SlideDirection {
    /// CSS class modifier for the card transition.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::None => "slide-none",
            Self::Forward => "slide-forward",
            Self::Backward => "slide-backward",
        }
    }
}

/// Current position within the (possibly filtered) ticket list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    direction: SlideDirection,
}

impl Carousel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Advance one position, wrapping from last to first.
    pub fn next(&mut self, len: usize) {
        self.direction = SlideDirection::Forward;
        if len == 0 {
            self.index = 0;
        } else {
            self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
        }
    }

    /// Retreat one position, wrapping from first to last.
    pub fn previous(&mut self, len: usize) {
        self.direction = SlideDirection::Backward;
        if len == 0 {
            self.index = 0;
        } else {
            self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
        }
    }

    /// Return to the first item with a neutral direction. Called whenever
    /// the active filter changes.
    pub fn reset(&mut self) {
        self.index = 0;
        self.direction = SlideDirection::None;
    }
}
