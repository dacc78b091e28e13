//! Geometry and key mapping behind the small pointer and keyboard effects.

pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const LINK_HOVER_TRANSFORM: &str = "scale(1.05)";
pub const LINK_REST_TRANSFORM: &str = "scale(1)";

const TRAIL_DOT_SIZE: f64 = 6.0;
const TOOLTIP_LIFT: f64 = 40.0;
const DEFAULT_PERCENTAGE: &str = "100";

/// Client-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// A circle centred on the click and wide enough to cover the target.
pub fn ripple_geometry(bounds: Bounds, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = bounds.width.max(bounds.height);

    RippleGeometry {
        size,
        left: client_x - bounds.left - size / 2.0,
        top: client_y - bounds.top - size / 2.0,
    }
}

pub fn trail_dot_origin(client_x: f64, client_y: f64) -> (f64, f64) {
    let half = TRAIL_DOT_SIZE / 2.0;
    (client_x - half, client_y - half)
}

/// Horizontal centre of the element, lifted above its top edge.
pub fn tooltip_anchor(bounds: Bounds) -> (f64, f64) {
    (bounds.left + bounds.width / 2.0, bounds.top - TOOLTIP_LIFT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    JumpHome,
}

impl Shortcut {
    pub fn from_keys(ctrl_or_meta: bool, key: &str) -> Option<Self> {
        if !ctrl_or_meta {
            return None;
        }

        match key {
            "k" => Some(Self::ToggleTheme),
            "h" => Some(Self::JumpHome),
            _ => None,
        }
    }

    pub fn target_selector(self) -> &'static str {
        match self {
            Self::ToggleTheme => ".theme-toggle",
            Self::JumpHome => "a[href=\"#home\"]",
        }
    }
}

/// A missing or empty `data-percentage` means a full bar.
pub fn parse_percentage(raw: Option<String>) -> String {
    raw.filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_PERCENTAGE.to_string())
}

pub fn viewport_unit(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 120.0,
        height: 40.0,
    };

    #[test]
    fn ripple_is_centred_on_click_and_covers_target() {
        let ripple = ripple_geometry(BUTTON, 130.0, 70.0);

        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, -30.0);
        assert_eq!(ripple.top, -40.0);
        assert_eq!(
            ripple.style(),
            "width: 120px; height: 120px; left: -30px; top: -40px;"
        );
    }

    #[test]
    fn ripple_uses_taller_side_for_tall_targets() {
        let tall = Bounds {
            width: 20.0,
            height: 300.0,
            ..BUTTON
        };
        assert_eq!(ripple_geometry(tall, 110.0, 200.0).size, 300.0);
    }

    #[test]
    fn trail_dot_is_centred_on_cursor() {
        assert_eq!(trail_dot_origin(40.0, 25.0), (37.0, 22.0));
    }

    #[test]
    fn tooltip_sits_above_element_centre() {
        assert_eq!(tooltip_anchor(BUTTON), (160.0, 10.0));
    }

    #[test]
    fn shortcuts_need_a_modifier() {
        assert_eq!(Shortcut::from_keys(true, "k"), Some(Shortcut::ToggleTheme));
        assert_eq!(Shortcut::from_keys(true, "h"), Some(Shortcut::JumpHome));
        assert_eq!(Shortcut::from_keys(false, "k"), None);
        assert_eq!(Shortcut::from_keys(true, "K"), None);
        assert_eq!(Shortcut::from_keys(true, "x"), None);
        assert_eq!(Shortcut::JumpHome.target_selector(), "a[href=\"#home\"]");
    }

    #[test]
    fn percentage_defaults_to_full() {
        assert_eq!(parse_percentage(None), "100");
        assert_eq!(parse_percentage(Some("72".to_string())), "72");
    }

    #[test]
    fn empty_percentage_fills_the_bar() {
        assert_eq!(parse_percentage(Some(String::new())), "100");
    }

    #[test]
    fn viewport_unit_is_one_percent_of_height() {
        assert_eq!(viewport_unit(800.0), "8px");
        assert_eq!(viewport_unit(750.0), "7.5px");
    }
}
