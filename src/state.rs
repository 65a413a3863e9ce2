//! View-state for the page behaviors.
//!
//! Everything in here is plain data derived from input sampling (scroll
//! offset, intersection notifications, clicks). The DOM side reads these
//! values and writes styles, so the rules can be checked without a browser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// Reveal state of every observed element, indexed in query order.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![RevealState::Hidden; len],
        }
    }

    /// Marks the element as revealed. Returns `true` only for the first
    /// transition, so callers apply the final style at most once.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ RevealState::Hidden) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Reveals the item `is_target` picks out. Returns its index only on the
    /// first transition.
    pub fn reveal_matching<T>(&mut self, items: &[T], is_target: impl Fn(&T) -> bool) -> Option<usize> {
        let index = items.iter().position(is_target)?;
        self.reveal(index).then_some(index)
    }

    /// Whether the item `is_target` picks out is still waiting to be shown.
    /// Items outside the set are never pending.
    pub fn is_pending_matching<T>(&self, items: &[T], is_target: impl Fn(&T) -> bool) -> bool {
        items
            .iter()
            .position(is_target)
            .and_then(|index| self.states.get(index))
            .map_or(false, |state| *state == RevealState::Hidden)
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}

/// Thresholds the scroll snapshot is computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub scroll_top: f64,
    pub navbar: f64,
    pub parallax_factor: f64,
}

/// Everything scroll-driven, as a pure function of the vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_top_visible: bool,
    pub navbar_scrolled: bool,
    pub parallax_offset: f64,
}

impl ScrollSnapshot {
    pub fn at(offset: f64, thresholds: &ScrollThresholds) -> Self {
        Self {
            scroll_top_visible: offset > thresholds.scroll_top,
            navbar_scrolled: offset > thresholds.navbar,
            parallax_offset: offset * thresholds.parallax_factor,
        }
    }
}

/// What a download button should show, and whether it accepts clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub content: String,
    pub disabled: bool,
}

/// Loading simulation for one download button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DownloadState {
    #[default]
    Idle,
    Loading { original: String },
    Restoring,
}

impl DownloadState {
    /// A click on the button. From `Idle` it starts loading and returns the
    /// loading view; in any other state the click changes nothing.
    pub fn click(&mut self, current_content: &str, loading_content: &str) -> Option<ButtonView> {
        self.trigger(current_content).then(|| ButtonView {
            content: loading_content.to_string(),
            disabled: true,
        })
    }

    /// The loading delay ran out. Returns the restored view once, and the
    /// button is idle again afterwards.
    pub fn elapse(&mut self) -> Option<ButtonView> {
        let original = self.begin_restore();
        self.finish_restore();
        original.map(|content| ButtonView {
            content,
            disabled: false,
        })
    }

    fn trigger(&mut self, current_content: &str) -> bool {
        match self {
            DownloadState::Idle => {
                *self = DownloadState::Loading {
                    original: current_content.to_string(),
                };
                true
            }
            _ => false,
        }
    }

    /// Hands out the captured content exactly once.
    fn begin_restore(&mut self) -> Option<String> {
        match std::mem::replace(self, DownloadState::Restoring) {
            DownloadState::Loading { original } => Some(original),
            other => {
                *self = other;
                None
            }
        }
    }

    fn finish_restore(&mut self) {
        if *self == DownloadState::Restoring {
            *self = DownloadState::Idle;
        }
    }
}

/// Count-up animation for one statistic counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterProgress {
    target: f64,
    increment: f64,
    current: f64,
}

impl CounterProgress {
    pub fn new(target: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target / steps,
            current: 0.0,
        }
    }

    /// Advances one tick. Returns the value to display and whether the
    /// counter has reached its target.
    pub fn tick(&mut self) -> (i64, bool) {
        self.current += self.increment;
        let done = self.increment <= 0.0 || self.current >= self.target;
        if done {
            self.current = self.target;
        }
        (self.current.floor() as i64, done)
    }
}

/// Reads the leading integer of a counter target the way `parseInt` does:
/// `"1,500"` is 1 and `"12+"` is 12. No leading digits means no target.
pub fn parse_counter_target(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.as_bytes().first() {
        Some(b'-') => (-1.0, &raw[1..]),
        Some(b'+') => (1.0, &raw[1..]),
        _ => (1.0, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: f64 = digits[..end].parse().ok()?;
    Some(sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> ScrollThresholds {
        ScrollThresholds {
            scroll_top: 300.0,
            navbar: 50.0,
            parallax_factor: 0.5,
        }
    }

    #[test]
    fn reveal_happens_once_and_never_reverts() {
        let mut set = RevealSet::new(3);
        assert!(set.reveal(1));
        assert!(!set.reveal(1));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn reveal_out_of_range_is_ignored() {
        let mut set = RevealSet::new(1);
        assert!(!set.reveal(5));
        assert_eq!(set.revealed_count(), 0);
    }

    #[test]
    fn reveal_matching_finds_element_by_identity() {
        let cards = ["hero", "features", "download"];
        let mut set = RevealSet::new(cards.len());
        assert_eq!(set.reveal_matching(&cards, |c| *c == "features"), Some(1));
        assert_eq!(set.reveal_matching(&cards, |c| *c == "features"), None);
        assert_eq!(set.reveal_matching(&cards, |c| *c == "footer"), None);
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn pending_until_revealed() {
        let cards = ["hero", "features"];
        let mut set = RevealSet::new(cards.len());
        assert!(set.is_pending_matching(&cards, |c| *c == "hero"));
        set.reveal_matching(&cards, |c| *c == "hero");
        assert!(!set.is_pending_matching(&cards, |c| *c == "hero"));
        assert!(set.is_pending_matching(&cards, |c| *c == "features"));
        assert!(!set.is_pending_matching(&cards, |c| *c == "badge"));
    }

    #[test]
    fn scroll_top_visibility_follows_offset() {
        let t = thresholds();
        assert!(!ScrollSnapshot::at(0.0, &t).scroll_top_visible);
        assert!(!ScrollSnapshot::at(300.0, &t).scroll_top_visible);
        assert!(ScrollSnapshot::at(301.0, &t).scroll_top_visible);
        assert!(!ScrollSnapshot::at(120.0, &t).scroll_top_visible);
    }

    #[test]
    fn snapshot_derives_navbar_and_parallax() {
        let snap = ScrollSnapshot::at(80.0, &thresholds());
        assert!(snap.navbar_scrolled);
        assert_eq!(snap.parallax_offset, 40.0);

        let top = ScrollSnapshot::at(10.0, &thresholds());
        assert!(!top.navbar_scrolled);
    }

    #[test]
    fn click_disables_and_shows_loading() {
        let mut state = DownloadState::default();
        let view = state.click("Download", "Loading...").unwrap();
        assert_eq!(view.content, "Loading...");
        assert!(view.disabled);
    }

    #[test]
    fn delay_restores_original_and_enables() {
        let mut state = DownloadState::default();
        state.click("Download", "Loading...");
        let view = state.elapse().unwrap();
        assert_eq!(view.content, "Download");
        assert!(!view.disabled);
        assert_eq!(state, DownloadState::Idle);
    }

    #[test]
    fn double_click_restores_once() {
        let mut state = DownloadState::default();
        assert!(state.click("Download", "Loading...").is_some());
        assert!(state.click("Loading...", "Loading...").is_none());
        assert_eq!(state.elapse().map(|v| v.content).as_deref(), Some("Download"));
        assert!(state.elapse().is_none());
        assert!(state.click("Download", "Loading...").is_some());
    }

    #[test]
    fn elapse_without_click_does_nothing() {
        let mut state = DownloadState::Idle;
        assert!(state.elapse().is_none());
        assert_eq!(state, DownloadState::Idle);
    }

    #[test]
    fn counter_ends_exactly_on_target() {
        let mut counter = CounterProgress::new(1000.0, 2000, 16);
        let mut last = (0, false);
        let mut ticks = 0;
        while !last.1 {
            last = counter.tick();
            ticks += 1;
            assert!(ticks <= 200);
        }
        assert_eq!(last.0, 1000);
        assert_eq!(ticks, 125);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counter = CounterProgress::new(0.0, 2000, 16);
        assert_eq!(counter.tick(), (0, true));
    }

    #[test]
    fn counter_target_reads_leading_integer() {
        assert_eq!(parse_counter_target(" 42 "), Some(42.0));
        assert_eq!(parse_counter_target("1,500"), Some(1.0));
        assert_eq!(parse_counter_target("12+"), Some(12.0));
        assert_eq!(parse_counter_target("-7k"), Some(-7.0));
        assert_eq!(parse_counter_target("+3"), Some(3.0));
    }

    #[test]
    fn counter_target_without_digits_is_none() {
        assert_eq!(parse_counter_target("abc"), None);
        assert_eq!(parse_counter_target(""), None);
        assert_eq!(parse_counter_target("-"), None);
        assert_eq!(parse_counter_target("$100"), None);
    }
}
