use std::collections::HashSet;

pub const REVEAL_SELECTOR: &str = ".section, .card, .table-container";
pub const OBSERVED_CLASS: &str = "animate-on-scroll";
pub const ANIMATED_CLASS: &str = "animated";
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 0.6s ease-out";
pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Section,
    Card,
    /// Table containers and anything else: marked, never animated.
    Plain,
}

impl RevealKind {
    pub fn from_classes(is_section: bool, is_card: bool) -> Self {
        if is_section {
            Self::Section
        } else if is_card {
            Self::Card
        } else {
            Self::Plain
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub mark_animated: bool,
    pub entrance: bool,
}

/// Remembers which observed elements already entered the viewport.
#[derive(Default)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self, id: u32, kind: RevealKind) -> Option<Reveal> {
        if !self.revealed.insert(id) {
            return None;
        }

        Some(Reveal {
            mark_animated: true,
            entrance: kind != RevealKind::Plain,
        })
    }
}

pub fn nav_is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn parse_parallax_speed(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

pub fn parallax_offset(scrolled: f64, speed: f64) -> f64 {
    -(scrolled * speed)
}

pub fn parallax_transform(scrolled: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scrolled, speed))
}

/// Visibility rule for the floating back-to-top control.
#[derive(Clone, Copy)]
pub struct BackToTop {
    threshold: f64,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn visible_at(&self, offset: f64) -> bool {
        offset > self.threshold
    }
}
