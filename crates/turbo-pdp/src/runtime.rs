//! Async screen runtime.
//!
//! A screen is one task that owns a [`ProductPage`] and processes commands
//! and timer ticks one at a time, so no operation ever observes another
//! half-applied. Renderers read snapshots from a `watch` channel.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use turbo_catalog::ParseError;
use turbo_observability::{ScreenId, StructuredLogger};

use crate::carousel::{TickTimer, TimerToken};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::page::{Intent, ProductPage, ViewSnapshot};

/// Repeating tokio timer that posts its token to the screen's tick queue.
///
/// Arming replaces any running timer, and dropping the timer aborts it.
#[derive(Debug)]
pub struct IntervalTimer {
    ticks: mpsc::UnboundedSender<TimerToken>,
    running: Option<(TimerToken, JoinHandle<()>)>,
}

impl IntervalTimer {
    pub fn new(ticks: mpsc::UnboundedSender<TimerToken>) -> Self {
        Self {
            ticks,
            running: None,
        }
    }

    /// Token of the running timer, if any.
    pub fn running_token(&self) -> Option<TimerToken> {
        self.running.as_ref().map(|(token, _)| *token)
    }

    fn abort(&mut self) {
        if let Some((_, handle)) = self.running.take() {
            handle.abort();
        }
    }
}

impl TickTimer for IntervalTimer {
    fn arm(&mut self, token: TimerToken, period: Duration) {
        self.abort();
        let period = period.max(Duration::from_millis(1));
        let ticks = self.ticks.clone();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(token).is_err() {
                    break;
                }
            }
        });
        self.running = Some((token, handle));
    }

    fn cancel(&mut self, token: TimerToken) {
        if self.running_token() == Some(token) {
            self.abort();
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.abort();
    }
}

enum Command {
    Load(Vec<u8>, oneshot::Sender<Result<(), ParseError>>),
    Intent(Intent, Option<oneshot::Sender<()>>),
    Dispose,
}

/// Handle to a running screen.
#[derive(Debug)]
pub struct ScreenHandle {
    screen_id: ScreenId,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<ViewSnapshot>,
    task: JoinHandle<()>,
}

impl ScreenHandle {
    /// Load a catalog and wait for the outcome.
    pub async fn load_catalog(&self, bytes: impl Into<Vec<u8>>) -> Result<(), EngineError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Command::Load(bytes.into(), reply))
            .map_err(|_| EngineError::ScreenClosed)?;
        outcome.await.map_err(|_| EngineError::ScreenClosed)??;
        Ok(())
    }

    /// Queue a user action.
    pub fn send(&self, intent: Intent) -> Result<(), EngineError> {
        self.commands
            .send(Command::Intent(intent, None))
            .map_err(|_| EngineError::ScreenClosed)
    }

    /// Apply a user action and wait until its snapshot is published.
    pub async fn apply(&self, intent: Intent) -> Result<ViewSnapshot, EngineError> {
        let (reply, applied) = oneshot::channel();
        self.commands
            .send(Command::Intent(intent, Some(reply)))
            .map_err(|_| EngineError::ScreenClosed)?;
        applied.await.map_err(|_| EngineError::ScreenClosed)?;
        Ok(self.snapshot())
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.clone()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn screen_id(&self) -> &ScreenId {
        &self.screen_id
    }

    /// Close the screen and wait for its task to finish.
    pub async fn dispose(self) -> Result<(), EngineError> {
        // The task also stops when every handle is gone, so a closed queue is fine.
        let _ = self.commands.send(Command::Dispose);
        self.task.await.map_err(|_| EngineError::ScreenClosed)
    }
}

/// Start a screen task on the current tokio runtime.
pub fn spawn_screen(
    config: EngineConfig,
    logger: StructuredLogger,
) -> Result<ScreenHandle, EngineError> {
    config.validate()?;

    let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
    let (commands_tx, commands_rx) = mpsc::unbounded_channel();
    let screen_id = logger.screen_id().clone();

    let page = ProductPage::new(config, IntervalTimer::new(ticks_tx)).with_logger(logger);
    let snapshots = page.subscribe();
    let task = tokio::spawn(run_screen(page, commands_rx, ticks_rx));

    Ok(ScreenHandle {
        screen_id,
        commands: commands_tx,
        snapshots,
        task,
    })
}

async fn run_screen(
    mut page: ProductPage<IntervalTimer>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut ticks: mpsc::UnboundedReceiver<TimerToken>,
) {
    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Load(bytes, reply)) => {
                    let _ = reply.send(page.load_catalog(&bytes));
                }
                Some(Command::Intent(intent, reply)) => {
                    page.apply(intent);
                    if let Some(reply) = reply {
                        let _ = reply.send(());
                    }
                }
                Some(Command::Dispose) | None => {
                    page.dispose();
                    break;
                }
            },
            Some(token) = ticks.recv() => {
                page.handle_tick(token);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselPhase;
    use tokio::time::sleep;

    const FIXTURE: &[u8] = include_bytes!("../../turbo-catalog/tests/fixtures/catalog.json");

    fn screen() -> ScreenHandle {
        let logger = StructuredLogger::new(ScreenId::from_string("runtime-test"));
        spawn_screen(EngineConfig::default(), logger).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_wraps() {
        let screen = screen();
        screen.load_catalog(FIXTURE).await.unwrap();
        assert_eq!(screen.snapshot().carousel.current_page, 0);

        sleep(Duration::from_millis(3_100)).await;
        assert_eq!(screen.snapshot().carousel.current_page, 1);

        sleep(Duration::from_millis(6_000)).await;
        assert_eq!(screen.snapshot().carousel.current_page, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_restarts_period() {
        let screen = screen();
        screen.load_catalog(FIXTURE).await.unwrap();

        sleep(Duration::from_millis(1_500)).await;
        screen.send(Intent::NextImage).unwrap();

        // The replaced timer would have fired at 3.0s.
        sleep(Duration::from_millis(2_500)).await;
        assert_eq!(screen.snapshot().carousel.current_page, 1);

        sleep(Duration::from_millis(600)).await;
        assert_eq!(screen.snapshot().carousel.current_page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_scroll_holds_page() {
        let screen = screen();
        screen.load_catalog(FIXTURE).await.unwrap();
        screen.send(Intent::BeginManualScroll).unwrap();

        sleep(Duration::from_secs(10)).await;
        let snapshot = screen.snapshot();
        assert_eq!(snapshot.carousel.phase, CarouselPhase::Paused);
        assert_eq!(snapshot.carousel.current_page, 0);

        screen
            .send(Intent::EndManualScroll {
                offset: 640.0,
                page_width: 320.0,
            })
            .unwrap();
        // Settles on the last page, then the next tick wraps.
        sleep(Duration::from_millis(3_100)).await;
        assert_eq!(screen.snapshot().carousel.current_page, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_returns_settled_snapshot() {
        let screen = screen();
        screen.load_catalog(FIXTURE).await.unwrap();

        let snapshot = screen.apply(Intent::SelectColor(101)).await.unwrap();
        assert_eq!(snapshot.images.len(), 2);
        assert_eq!(snapshot.selected_color, Some(0));

        let snapshot = screen.apply(Intent::SelectColor(999)).await.unwrap();
        assert_eq!(snapshot.images.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_error_is_returned() {
        let screen = screen();
        let err = screen.load_catalog(&b"{}"[..]).await.unwrap_err();
        assert!(matches!(err, EngineError::Parse(e) if e.is_malformed()));
        assert!(!screen.snapshot().has_data);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_ticks() {
        let screen = screen();
        let mut rx = screen.subscribe();
        screen.load_catalog(FIXTURE).await.unwrap();
        rx.borrow_and_update();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().carousel.current_page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_stops_ticks() {
        let screen = screen();
        let mut rx = screen.subscribe();
        screen.load_catalog(FIXTURE).await.unwrap();
        screen.dispose().await.unwrap();

        let last = rx.borrow_and_update().clone();
        assert_eq!(last.carousel.phase, CarouselPhase::Disposed);
        assert!(!last.carousel.timer_active);

        sleep(Duration::from_secs(10)).await;
        assert!(rx.has_changed().is_err() || !rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let config = EngineConfig::default().with_carousel_interval(Duration::ZERO);
        let logger = StructuredLogger::new(ScreenId::generate());
        assert!(matches!(
            spawn_screen(config, logger),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
