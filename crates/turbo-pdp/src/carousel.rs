//! Image carousel state machine.
//!
//! The controller owns at most one armed timer at a time. Every transition
//! that re-arms cancels the previous timer first and hands the new one a fresh
//! [`TimerToken`]; ticks carrying any other token are dropped. This keeps
//! auto-advance from compounding after manual navigation.
//!
//! ```text
//! Idle ──load_pages(n>0)──► Running ◄──end_manual_scroll── Paused
//!   ▲                        │  │ tick / navigate              ▲
//!   └──load_pages(0)─────────┘  └──begin_manual_scroll─────────┘
//!
//! any ──dispose──► Disposed (terminal)
//! ```

use std::time::Duration;

use serde::Serialize;

/// Identity of one arming of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Scheduler seam for the auto-advance timer.
///
/// An armed timer fires repeatedly every `period`, delivering `token` back to
/// the controller through [`CarouselController::tick`], until cancelled.
pub trait TickTimer {
    /// Start a repeating timer identified by `token`.
    fn arm(&mut self, token: TimerToken, period: Duration);

    /// Stop the timer identified by `token`. Unknown tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Timer driven by hand. Records what is armed; [`ManualTimer::fire`] hands
/// back the live token for the caller to deliver.
#[derive(Debug, Default, Clone)]
pub struct ManualTimer {
    live: Vec<TimerToken>,
    period: Option<Duration>,
    arm_count: usize,
    max_live: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently armed, still live token.
    pub fn fire(&self) -> Option<TimerToken> {
        self.live.last().copied()
    }

    /// Number of timers currently armed.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Highest number of timers ever armed at once.
    pub fn max_live(&self) -> usize {
        self.max_live
    }

    /// Total number of `arm` calls.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    /// Period of the last arming.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl TickTimer for ManualTimer {
    fn arm(&mut self, token: TimerToken, period: Duration) {
        self.live.push(token);
        self.period = Some(period);
        self.arm_count += 1;
        self.max_live = self.max_live.max(self.live.len());
    }

    fn cancel(&mut self, token: TimerToken) {
        self.live.retain(|t| *t != token);
    }
}

/// Carousel lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselPhase {
    /// No pages loaded.
    #[default]
    Idle,
    /// User is dragging; auto-advance suspended.
    Paused,
    /// Auto-advancing.
    Running,
    /// Screen closed. Every operation is a no-op.
    Disposed,
}

/// Direction for manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The carousel moved to `page`.
    Advanced { page: usize },
    /// The token was stale, or the carousel was not running.
    Dropped,
}

/// Observable carousel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub phase: CarouselPhase,
    pub current_page: usize,
    pub page_count: usize,
    pub timer_active: bool,
}

/// Paged image carousel with timed auto-advance and manual navigation.
#[derive(Debug)]
pub struct CarouselController<T: TickTimer> {
    timer: T,
    interval: Duration,
    phase: CarouselPhase,
    current: usize,
    page_count: usize,
    armed: Option<TimerToken>,
    next_token: u64,
}

impl<T: TickTimer> CarouselController<T> {
    /// Create an idle carousel that auto-advances every `interval`.
    pub fn new(timer: T, interval: Duration) -> Self {
        Self {
            timer,
            interval,
            phase: CarouselPhase::Idle,
            current: 0,
            page_count: 0,
            armed: None,
            next_token: 0,
        }
    }

    /// Replace the page set, resetting to the first page.
    ///
    /// A non-empty set starts auto-advance; an empty one leaves the carousel
    /// idle with no timer.
    pub fn load_pages(&mut self, page_count: usize) {
        if self.is_disposed() {
            return;
        }
        self.disarm();
        self.current = 0;
        self.page_count = page_count;
        if page_count == 0 {
            self.phase = CarouselPhase::Idle;
        } else {
            self.phase = CarouselPhase::Running;
            self.rearm();
        }
    }

    /// Deliver a timer tick.
    ///
    /// Advances with wraparound only while running and only for the live
    /// token. The timer is periodic, so the token stays live afterwards.
    pub fn tick(&mut self, token: TimerToken) -> TickOutcome {
        if self.phase != CarouselPhase::Running || self.armed != Some(token) {
            return TickOutcome::Dropped;
        }
        self.current = (self.current + 1) % self.page_count;
        TickOutcome::Advanced { page: self.current }
    }

    /// Step one page with wraparound and restart the timer.
    pub fn navigate(&mut self, direction: Direction) {
        if !self.has_pages() {
            return;
        }
        self.current = match direction {
            Direction::Next => (self.current + 1) % self.page_count,
            Direction::Previous => (self.current + self.page_count - 1) % self.page_count,
        };
        self.restart();
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Jump to `index`, clamped to the last page, and restart the timer.
    pub fn select_page(&mut self, index: usize) {
        if !self.has_pages() {
            return;
        }
        self.current = index.min(self.page_count - 1);
        self.restart();
    }

    /// Suspend auto-advance while the user drags.
    pub fn begin_manual_scroll(&mut self) {
        if !self.has_pages() {
            return;
        }
        self.disarm();
        self.phase = CarouselPhase::Paused;
    }

    /// Settle on the page nearest `offset` and resume auto-advance.
    ///
    /// The page is `round(offset / page_width)` clamped to the page range; a
    /// non-positive width keeps the current page.
    pub fn end_manual_scroll(&mut self, offset: f64, page_width: f64) {
        if !self.has_pages() {
            return;
        }
        if page_width > 0.0 && offset.is_finite() {
            let nearest = (offset / page_width).round().max(0.0) as usize;
            self.current = nearest.min(self.page_count - 1);
        }
        self.restart();
    }

    /// Stop for good. Idempotent.
    pub fn dispose(&mut self) {
        self.disarm();
        self.phase = CarouselPhase::Disposed;
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            phase: self.phase,
            current_page: self.current,
            page_count: self.page_count,
            timer_active: self.armed.is_some(),
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Token of the armed timer, if any.
    pub fn armed_token(&self) -> Option<TimerToken> {
        self.armed
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == CarouselPhase::Disposed
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    fn has_pages(&self) -> bool {
        !self.is_disposed() && self.page_count > 0
    }

    fn restart(&mut self) {
        self.disarm();
        self.phase = CarouselPhase::Running;
        self.rearm();
    }

    fn rearm(&mut self) {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.timer.arm(token, self.interval);
        self.armed = Some(token);
    }

    fn disarm(&mut self) {
        if let Some(token) = self.armed.take() {
            self.timer.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(pages: usize) -> CarouselController<ManualTimer> {
        let mut c = CarouselController::new(ManualTimer::new(), Duration::from_secs(3));
        c.load_pages(pages);
        c
    }

    fn fire(c: &mut CarouselController<ManualTimer>) -> TickOutcome {
        let token = c.timer().fire().expect("timer armed");
        c.tick(token)
    }

    #[test]
    fn test_load_starts_running() {
        let c = carousel(3);
        assert_eq!(c.phase(), CarouselPhase::Running);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.timer().live_count(), 1);
        assert_eq!(c.timer().period(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_ticks_wrap_around() {
        let mut c = carousel(3);
        let pages: Vec<TickOutcome> = (0..4).map(|_| fire(&mut c)).collect();
        assert_eq!(
            pages,
            vec![
                TickOutcome::Advanced { page: 1 },
                TickOutcome::Advanced { page: 2 },
                TickOutcome::Advanced { page: 0 },
                TickOutcome::Advanced { page: 1 },
            ]
        );
    }

    #[test]
    fn test_single_page_stays_put() {
        let mut c = carousel(1);
        assert_eq!(fire(&mut c), TickOutcome::Advanced { page: 0 });
        c.previous();
        assert_eq!(c.current_page(), 0);
    }

    #[test]
    fn test_empty_pages_are_idle_without_timer() {
        let mut c = carousel(0);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert!(c.timer().fire().is_none());

        c.next();
        c.begin_manual_scroll();
        c.end_manual_scroll(100.0, 50.0);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        assert_eq!(c.timer().arm_count(), 0);
    }

    #[test]
    fn test_navigation_rearms_with_new_token() {
        let mut c = carousel(3);
        let first = c.armed_token().unwrap();

        c.previous();
        assert_eq!(c.current_page(), 2);
        let second = c.armed_token().unwrap();
        assert_ne!(first, second);

        assert_eq!(c.tick(first), TickOutcome::Dropped);
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.tick(second), TickOutcome::Advanced { page: 0 });
        assert_eq!(c.timer().max_live(), 1);
    }

    #[test]
    fn test_manual_scroll_pauses_and_settles() {
        let mut c = carousel(4);
        let before = c.armed_token().unwrap();

        c.begin_manual_scroll();
        assert_eq!(c.phase(), CarouselPhase::Paused);
        assert!(!c.state().timer_active);
        assert_eq!(c.tick(before), TickOutcome::Dropped);

        c.end_manual_scroll(640.0, 320.0);
        assert_eq!(c.phase(), CarouselPhase::Running);
        assert_eq!(c.current_page(), 2);
        assert!(c.state().timer_active);
    }

    #[test]
    fn test_scroll_offset_rounds_and_clamps() {
        let mut c = carousel(3);
        c.end_manual_scroll(470.0, 320.0);
        assert_eq!(c.current_page(), 1);
        c.end_manual_scroll(5000.0, 320.0);
        assert_eq!(c.current_page(), 2);
        c.end_manual_scroll(-200.0, 320.0);
        assert_eq!(c.current_page(), 0);
        c.next();
        c.end_manual_scroll(10.0, 0.0);
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn test_select_page() {
        let mut c = carousel(3);
        c.select_page(2);
        assert_eq!(c.current_page(), 2);
        c.select_page(0);
        assert_eq!(c.current_page(), 0);
        c.select_page(7);
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_reload_resets_to_first_page() {
        let mut c = carousel(3);
        c.next();
        c.next();
        c.load_pages(2);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.page_count(), 2);
        assert_eq!(c.timer().live_count(), 1);
    }

    #[test]
    fn test_at_most_one_timer_ever_live() {
        let mut c = carousel(5);
        c.next();
        c.begin_manual_scroll();
        c.end_manual_scroll(0.0, 1.0);
        c.previous();
        c.select_page(3);
        c.load_pages(4);
        fire(&mut c);
        assert_eq!(c.timer().max_live(), 1);
        assert_eq!(c.timer().live_count(), 1);
    }

    #[test]
    fn test_dispose_is_terminal() {
        let mut c = carousel(3);
        let token = c.armed_token().unwrap();
        c.dispose();
        c.dispose();

        assert_eq!(c.phase(), CarouselPhase::Disposed);
        assert_eq!(c.timer().live_count(), 0);
        assert_eq!(c.tick(token), TickOutcome::Dropped);

        c.load_pages(3);
        c.next();
        c.end_manual_scroll(320.0, 320.0);
        assert_eq!(c.phase(), CarouselPhase::Disposed);
        assert_eq!(c.current_page(), 0);
        assert_eq!(c.timer().live_count(), 0);
    }
}
