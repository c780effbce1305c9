//! Scroll-derived navigation bar and hero presentation.
//!
//! Everything here is a pure function of the raw vertical scroll offset, so the
//! page re-derives it on every scroll event instead of keeping incremental flags.

/// Vertical offset (px) past which the navbar becomes prominent
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll distance (px) over which the hero parallax plays out
pub const PARALLAX_RANGE: f64 = 300.0;

/// Hero translation (px) at the end of the parallax range
pub const PARALLAX_SHIFT: f64 = -30.0;

/// Hero opacity at the end of the parallax range
pub const PARALLAX_MIN_OPACITY: f64 = 0.9;

const NAV_BASE: &str = "fixed top-0 left-0 right-0 z-50 p-4 lg:p-6 transition-all duration-300";
const SURFACE_BASE: &str = "transition-all duration-300 rounded-2xl px-6 py-4";
const LINK_BASE: &str = "font-medium transition-colors duration-200 relative group py-2 px-1 \
    focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 rounded-md";

/// Navbar presentation variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    /// At (or near) the top of the page: transparent, roomy
    #[default]
    Compact,
    /// Scrolled past the threshold: frosted surface with border and shadow
    Prominent,
}

impl NavbarStyle {
    /// Derive the variant from the raw scroll offset
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            NavbarStyle::Prominent
        } else {
            NavbarStyle::Compact
        }
    }

    /// Classes for the fixed `<nav>` wrapper
    pub fn nav_class(&self) -> String {
        let padding = match self {
            NavbarStyle::Compact => "py-4 lg:py-6",
            NavbarStyle::Prominent => "py-3 lg:py-4",
        };
        format!("{NAV_BASE} {padding}")
    }

    /// Classes for the rounded bar surface
    pub fn surface_class(&self) -> String {
        let surface = match self {
            NavbarStyle::Compact => "bg-transparent",
            NavbarStyle::Prominent => {
                "bg-white/95 dark:bg-slate-900/95 backdrop-blur-xl border border-slate-200/50 \
                 dark:border-slate-700/50 shadow-lg"
            }
        };
        format!("{SURFACE_BASE} {surface}")
    }

    /// Classes for desktop navigation links
    pub fn link_class(&self) -> String {
        let tone = match self {
            NavbarStyle::Compact => {
                "text-slate-800 dark:text-slate-200 hover:text-emerald-600 dark:hover:text-emerald-400"
            }
            NavbarStyle::Prominent => {
                "text-slate-700 dark:text-slate-300 hover:text-emerald-600 dark:hover:text-emerald-400"
            }
        };
        format!("{LINK_BASE} {tone}")
    }
}

/// Free-function form of [`NavbarStyle::from_offset`]
pub fn navbar_style(offset: f64) -> NavbarStyle {
    NavbarStyle::from_offset(offset)
}

/// Hero section offset and fade for a given scroll position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    pub const REST: Parallax = Parallax {
        translate_y: 0.0,
        opacity: 1.0,
    };

    /// Inline style for the hero section
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}px); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

/// Map scroll offset linearly onto the hero parallax, clamped to [0, PARALLAX_RANGE]
pub fn hero_parallax(offset: f64) -> Parallax {
    if !offset.is_finite() {
        return Parallax::REST;
    }
    let progress = (offset / PARALLAX_RANGE).clamp(0.0, 1.0);
    if progress == 0.0 {
        return Parallax::REST;
    }

    Parallax {
        translate_y: PARALLAX_SHIFT * progress,
        opacity: 1.0 - (1.0 - PARALLAX_MIN_OPACITY) * progress,
    }
}

/// Collapsible mobile menu state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Flip between open and closed (menu button)
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// Force closed (a navigation link was selected)
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(navbar_style(0.0), NavbarStyle::Compact);
        assert_eq!(navbar_style(49.9), NavbarStyle::Compact);
        assert_eq!(navbar_style(50.0), NavbarStyle::Compact);
        assert_eq!(navbar_style(50.5), NavbarStyle::Prominent);
        assert_eq!(navbar_style(51.0), NavbarStyle::Prominent);
        assert_eq!(navbar_style(10_000.0), NavbarStyle::Prominent);
    }

    #[test]
    fn test_negative_overscroll_is_compact() {
        assert_eq!(navbar_style(-40.0), NavbarStyle::Compact);
    }

    #[test]
    fn test_scroll_down_and_back_up() {
        let seen: Vec<_> = [0.0, 120.0, 10.0].into_iter().map(navbar_style).collect();
        assert_eq!(
            seen,
            [
                NavbarStyle::Compact,
                NavbarStyle::Prominent,
                NavbarStyle::Compact
            ]
        );
    }

    #[test]
    fn test_monotonic_in_offset() {
        let mut previous = NavbarStyle::Compact;
        for offset in (0..400).map(f64::from) {
            let current = navbar_style(offset);
            // Once prominent, scrolling further never goes back to compact
            if previous == NavbarStyle::Prominent {
                assert_eq!(current, NavbarStyle::Prominent);
            }
            previous = current;
        }
        assert_eq!(previous, NavbarStyle::Prominent);
    }

    #[test]
    fn test_prominent_classes() {
        let surface = NavbarStyle::Prominent.surface_class();
        assert!(surface.contains("backdrop-blur-xl"));
        assert!(surface.contains("shadow-lg"));
        assert!(surface.contains("border"));
        assert!(!surface.contains("bg-transparent"));
        assert!(NavbarStyle::Prominent.nav_class().contains("py-3 lg:py-4"));
    }

    #[test]
    fn test_compact_classes() {
        let surface = NavbarStyle::Compact.surface_class();
        assert!(surface.contains("bg-transparent"));
        assert!(!surface.contains("shadow-lg"));
        assert!(!surface.contains("backdrop-blur"));
        assert!(NavbarStyle::Compact.nav_class().contains("py-4 lg:py-6"));
    }

    #[test]
    fn test_link_tone_changes() {
        assert!(NavbarStyle::Compact.link_class().contains("text-slate-800"));
        assert!(NavbarStyle::Prominent.link_class().contains("text-slate-700"));
    }

    #[test]
    fn test_hero_parallax_range() {
        assert_eq!(hero_parallax(0.0), Parallax::REST);

        let halfway = hero_parallax(150.0);
        assert!((halfway.translate_y + 15.0).abs() < 1e-9);
        assert!((halfway.opacity - 0.95).abs() < 1e-9);

        let end = hero_parallax(300.0);
        assert!((end.translate_y + 30.0).abs() < 1e-9);
        assert!((end.opacity - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_hero_parallax_clamps() {
        assert_eq!(hero_parallax(-100.0), Parallax::REST);
        assert_eq!(hero_parallax(5_000.0), hero_parallax(300.0));
        assert_eq!(hero_parallax(f64::NAN), Parallax::REST);
    }

    #[test]
    fn test_parallax_style() {
        assert_eq!(
            hero_parallax(150.0).style(),
            "transform: translateY(-15.00px); opacity: 0.950;"
        );
    }

    #[test]
    fn test_menu_toggle_parity() {
        for toggles in 0..7 {
            let mut menu = MenuState::default();
            for _ in 0..toggles {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), toggles % 2 == 1);
        }
    }

    #[test]
    fn test_menu_close_always_closes() {
        let mut open = MenuState::Open;
        open.close();
        assert_eq!(open, MenuState::Closed);

        let mut closed = MenuState::Closed;
        closed.close();
        assert_eq!(closed, MenuState::Closed);
    }
}
