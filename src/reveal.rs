//! Scroll-reveal state.
//!
//! The intersection observer only reports "in view" / "out of view"; the
//! decision of when an element becomes visible (and whether a delayed show
//! is still wanted) is made here.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
    Fade,
}

impl Direction {
    /// CSS transform of the hidden pose.
    pub fn hidden_transform(self, distance: f64) -> String {
        match self {
            Direction::Up => format!("translateY({distance}px)"),
            Direction::Down => format!("translateY(-{distance}px)"),
            Direction::Left => format!("translateX({distance}px)"),
            Direction::Right => format!("translateX(-{distance}px)"),
            Direction::Scale => "scale(0.8)".to_string(),
            Direction::Fade => "none".to_string(),
        }
    }

    pub fn shown_transform(self) -> &'static str {
        match self {
            Direction::Scale => "scale(1)",
            Direction::Fade => "none",
            _ => "translate(0, 0)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub trigger_once: bool,
    pub delay_ms: u64,
    pub direction: Direction,
    pub distance: f64,
    pub immediately_visible: bool,
    /// Transition duration in seconds.
    pub duration: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
            delay_ms: 0,
            direction: Direction::Up,
            distance: 50.0,
            immediately_visible: false,
            duration: 0.8,
        }
    }
}

impl RevealOptions {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    pub fn immediately_visible(mut self, immediately_visible: bool) -> Self {
        self.immediately_visible = immediately_visible;
        self
    }

    pub fn style(&self, visible: bool) -> String {
        motion_style(
            self.direction,
            self.distance,
            visible,
            self.duration,
            if self.immediately_visible {
                0
            } else {
                self.delay_ms
            },
        )
    }
}

/// Whether an intersection entry counts as "in view" for a threshold.
pub fn entered(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Nothing,
    Show,
    ShowAfter(u64),
}

#[derive(Debug, Clone)]
pub struct Reveal {
    options: RevealOptions,
    visible: bool,
    in_view: bool,
    pending: bool,
    locked: bool,
}

impl Reveal {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            visible: options.immediately_visible,
            in_view: false,
            pending: false,
            locked: options.immediately_visible,
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn observe(&mut self, intersecting: bool) -> RevealAction {
        if self.locked {
            return RevealAction::Nothing;
        }
        self.in_view = intersecting;

        if intersecting {
            if self.visible || self.pending {
                return RevealAction::Nothing;
            }
            if self.options.delay_ms > 0 {
                self.pending = true;
                return RevealAction::ShowAfter(self.options.delay_ms);
            }
            self.show();
            return RevealAction::Show;
        }

        // leaving the viewport only cancels a delayed show; a shown element stays shown
        if !self.options.trigger_once {
            self.pending = false;
        }
        RevealAction::Nothing
    }

    /// Completes a delayed show. Returns false when it was cancelled.
    pub fn fire(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.show();
        true
    }

    fn show(&mut self) {
        self.pending = false;
        self.visible = true;
        if self.options.trigger_once {
            self.locked = true;
        }
    }
}

/// Per-item visibility for a list revealed one after another.
#[derive(Debug, Clone)]
pub struct Stagger {
    visible: Vec<bool>,
    base_delay_ms: u64,
    started: bool,
}

impl Stagger {
    pub fn new(count: usize, base_delay_ms: u64) -> Self {
        Self {
            visible: vec![false; count],
            base_delay_ms,
            started: false,
        }
    }

    /// Item delays for the first intersection; empty afterwards.
    pub fn start(&mut self) -> Vec<(usize, u64)> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        (0..self.visible.len())
            .map(|i| (i, i as u64 * self.base_delay_ms))
            .collect()
    }

    pub fn reveal(&mut self, index: usize) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = true;
        }
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn delay_for(&self, index: usize) -> u64 {
        index as u64 * self.base_delay_ms
    }
}

pub fn motion_style(
    direction: Direction,
    distance: f64,
    visible: bool,
    duration: f64,
    delay_ms: u64,
) -> String {
    let (opacity, transform) = if visible {
        (1, direction.shown_transform().to_string())
    } else {
        (0, direction.hidden_transform(distance))
    };
    let delay = delay_ms as f64 / 1000.0;
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
    )
}

/// Rise-and-grow entrance for staggered cards. Carries no transition delay;
/// the stagger timer already spaces the cards out.
pub fn pop_in_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0) scale(1); transition: opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);"
    } else {
        "opacity: 0; transform: translateY(50px) scale(0.9);"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_once_shows_exactly_once() {
        let mut r = Reveal::new(RevealOptions::default());
        assert!(!r.is_visible());
        let mut shows = 0;
        for intersecting in [true, false, true, true, false, true] {
            if r.observe(intersecting) == RevealAction::Show {
                shows += 1;
            }
            if shows > 0 {
                assert!(r.is_visible());
            }
        }
        assert_eq!(shows, 1);
    }

    #[test]
    fn out_of_view_events_before_entry_do_nothing() {
        let mut r = Reveal::new(RevealOptions::default());
        assert_eq!(r.observe(false), RevealAction::Nothing);
        assert!(!r.is_visible());
    }

    #[test]
    fn delayed_show_waits_for_timer() {
        let mut r = Reveal::new(RevealOptions::default().delay_ms(200));
        assert_eq!(r.observe(true), RevealAction::ShowAfter(200));
        assert!(!r.is_visible());
        // a second intersection must not schedule another timer
        assert_eq!(r.observe(true), RevealAction::Nothing);
        assert!(r.fire());
        assert!(r.is_visible());
        assert!(!r.fire());
    }

    #[test]
    fn trigger_once_keeps_pending_show_after_exit() {
        let mut r = Reveal::new(RevealOptions::default().delay_ms(100));
        r.observe(true);
        r.observe(false);
        assert!(r.fire());
        assert!(r.is_visible());
    }

    #[test]
    fn repeatable_reveal_stays_shown_after_exit() {
        let opts = RevealOptions::default().trigger_once(false);
        let mut r = Reveal::new(opts);
        assert_eq!(r.observe(true), RevealAction::Show);
        assert_eq!(r.observe(false), RevealAction::Nothing);
        assert!(r.is_visible());
        assert!(!r.in_view());
        assert_eq!(r.observe(true), RevealAction::Nothing);
        assert!(r.is_visible());
    }

    #[test]
    fn repeatable_reveal_exit_cancels_pending_show() {
        let opts = RevealOptions::default().trigger_once(false).delay_ms(300);
        let mut r = Reveal::new(opts);
        assert_eq!(r.observe(true), RevealAction::ShowAfter(300));
        assert_eq!(r.observe(false), RevealAction::Nothing);
        assert!(!r.is_pending());
        assert!(!r.fire());
        assert!(!r.is_visible());
        // re-entering schedules the show again
        assert_eq!(r.observe(true), RevealAction::ShowAfter(300));
        assert!(r.fire());
        assert!(r.is_visible());
    }

    #[test]
    fn immediately_visible_ignores_observer() {
        let mut r = Reveal::new(RevealOptions::default().immediately_visible(true));
        assert!(r.is_visible());
        assert_eq!(r.observe(true), RevealAction::Nothing);
        assert_eq!(r.observe(false), RevealAction::Nothing);
        assert!(r.is_visible());
    }

    #[test]
    fn stagger_schedules_once() {
        let mut s = Stagger::new(3, 150);
        assert_eq!(s.start(), vec![(0, 0), (1, 150), (2, 300)]);
        assert!(s.start().is_empty());
        s.reveal(1);
        s.reveal(7);
        assert_eq!(s.visible(), &[false, true, false]);
        assert!(!s.is_visible(7));
    }

    #[test]
    fn threshold_gates_entry() {
        assert!(entered(true, 0.3, 0.3));
        assert!(!entered(true, 0.05, 0.1));
        assert!(!entered(false, 0.5, 0.1));
        assert!(entered(true, 0.0, 0.0));
    }

    #[test]
    fn styles_for_each_pose() {
        let hidden = motion_style(Direction::Right, 80.0, false, 0.6, 200);
        assert!(hidden.starts_with("opacity: 0; transform: translateX(-80px);"));
        assert!(hidden.contains("ease-out 0.2s"));
        let shown = motion_style(Direction::Scale, 50.0, true, 0.8, 0);
        assert!(shown.starts_with("opacity: 1; transform: scale(1);"));
        assert_eq!(Direction::Fade.hidden_transform(10.0), "none");
    }

    #[test]
    fn pop_in_has_no_transition_delay() {
        let shown = pop_in_style(true);
        assert!(shown.contains("opacity: 1"));
        let times: Vec<&str> = shown
            .split_whitespace()
            .map(|w| w.trim_end_matches([',', ';']))
            .filter(|w| {
                w.strip_suffix('s')
                    .is_some_and(|n| n.parse::<f64>().is_ok())
            })
            .collect();
        // one duration per property, no delay
        assert_eq!(times, ["0.6s", "0.6s"]);
        assert!(pop_in_style(false).contains("scale(0.9)"));
    }
}
