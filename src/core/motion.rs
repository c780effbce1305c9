//! Decorative motion parameters.
//!
//! Animations are plain CSS keyframes (see `ui::pages::landing::LandingStyles`);
//! this module only computes which keyframes run, for how long and after what delay.

/// Pop-in duration for floating bubbles (s)
pub const POP_IN_SECS: f64 = 0.5;

/// One full bob cycle for floating bubbles (s)
pub const BOB_PERIOD_SECS: f64 = 4.0;

/// Entrance duration for hero content and chat bubbles (s)
pub const ENTRANCE_SECS: f64 = 0.8;

/// Fade-in direction for an entering element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    Up,
    FromLeft,
    FromRight,
}

impl Entrance {
    fn keyframes(&self) -> &'static str {
        match self {
            Entrance::Fade => "lb-fade-in",
            Entrance::Up => "lb-fade-in-up",
            Entrance::FromLeft => "lb-fade-in-left",
            Entrance::FromRight => "lb-fade-in-right",
        }
    }

    /// Inline `animation` style that plays once after `delay` seconds
    pub fn style(&self, delay: f64, duration: f64) -> String {
        format!(
            "animation: {} {}s ease-out {}s both;",
            self.keyframes(),
            secs(duration),
            secs(delay)
        )
    }
}

/// Inline style for a floating bubble: pop in after `delay`, then bob forever
pub fn bubble_style(delay: f64) -> String {
    format!(
        "animation: lb-pop-in {}s ease-out {}s both, lb-bob {}s ease-in-out {}s infinite;",
        secs(POP_IN_SECS),
        secs(delay),
        secs(BOB_PERIOD_SECS),
        secs(delay + POP_IN_SECS)
    )
}

// Trim float noise so styles stay stable across server and client renders
fn secs(value: f64) -> f64 {
    (value.max(0.0) * 1000.0).round() / 1000.0
}

/// Greeting bubble floating around the chat mockup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingGreeting {
    pub text: &'static str,
    pub delay: f64,
    pub position: &'static str,
    pub color: &'static str,
}

pub const FLOATING_GREETINGS: [FloatingGreeting; 4] = [
    FloatingGreeting {
        text: "नमस्ते",
        delay: 0.0,
        position: "top-4 -left-8",
        color: "bg-orange-100 dark:bg-orange-900/30 text-orange-700 dark:text-orange-300",
    },
    FloatingGreeting {
        text: "Hello",
        delay: 1.0,
        position: "top-16 -right-12",
        color: "bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300",
    },
    FloatingGreeting {
        text: "வணக்கம்",
        delay: 2.0,
        position: "bottom-8 -left-12",
        color: "bg-purple-100 dark:bg-purple-900/30 text-purple-700 dark:text-purple-300",
    },
    FloatingGreeting {
        text: "مرحبا",
        delay: 1.5,
        position: "bottom-16 -right-8",
        color: "bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300",
    },
];

/// Delays (s) for the chat mockup: customer message, typing dots, bot reply, translation note
pub const CHAT_CUSTOMER_DELAY: f64 = 1.0;
pub const CHAT_TYPING_DELAY: f64 = 1.2;
pub const CHAT_REPLY_DELAY: f64 = 1.8;
pub const CHAT_TRANSLATION_DELAY: f64 = 2.2;

/// Stagger between the three typing indicator dots (s)
pub const TYPING_DOT_STAGGER: f64 = 0.1;

/// `animation-delay` for typing dot `index`
pub fn typing_dot_style(index: usize) -> String {
    format!("animation-delay: {}s;", secs(index as f64 * TYPING_DOT_STAGGER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_style() {
        assert_eq!(
            Entrance::Up.style(0.2, ENTRANCE_SECS),
            "animation: lb-fade-in-up 0.8s ease-out 0.2s both;"
        );
        assert_eq!(
            Entrance::Fade.style(CHAT_TYPING_DELAY, 0.5),
            "animation: lb-fade-in 0.5s ease-out 1.2s both;"
        );
    }

    #[test]
    fn test_bubble_bob_starts_after_pop_in() {
        assert_eq!(
            bubble_style(1.5),
            "animation: lb-pop-in 0.5s ease-out 1.5s both, lb-bob 4s ease-in-out 2s infinite;"
        );
    }

    #[test]
    fn test_bubble_bob_is_infinite() {
        for greeting in FLOATING_GREETINGS {
            let style = bubble_style(greeting.delay);
            assert!(style.ends_with("infinite;"), "{style}");
        }
    }

    #[test]
    fn test_negative_delay_clamps() {
        assert_eq!(
            Entrance::Fade.style(-1.0, 0.5),
            "animation: lb-fade-in 0.5s ease-out 0s both;"
        );
    }

    #[test]
    fn test_typing_dots_stagger() {
        let styles: Vec<_> = (0..3).map(typing_dot_style).collect();
        assert_eq!(
            styles,
            [
                "animation-delay: 0s;",
                "animation-delay: 0.1s;",
                "animation-delay: 0.2s;"
            ]
        );
    }

    #[test]
    fn test_chat_sequence_is_ordered() {
        assert!(CHAT_CUSTOMER_DELAY < CHAT_TYPING_DELAY);
        assert!(CHAT_TYPING_DELAY < CHAT_REPLY_DELAY);
        assert!(CHAT_REPLY_DELAY < CHAT_TRANSLATION_DELAY);
    }
}
