//! The "Coming Soon" placeholder cycle.
//!
//! A [`PlaceholderCycle`] is a list of timed frames. [`PlaceholderCycle::start`]
//! spawns one task that publishes each frame on a watch channel when its
//! offset elapses, and returns the [`CycleHandle`] that owns the task.
//! Dropping the handle aborts the task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Words shown at one point of the cycle.
pub type Frame = Vec<String>;

/// One frame and the offset from cycle start at which it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedFrame {
    pub at: Duration,
    pub words: Frame,
}

impl TimedFrame {
    pub fn new(at: Duration, words: &[&str]) -> Self {
        Self {
            at,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// A one-shot sequence of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCycle {
    frames: Vec<TimedFrame>,
}

impl Default for PlaceholderCycle {
    fn default() -> Self {
        Self::coming_soon()
    }
}

impl PlaceholderCycle {
    /// Frames must be sorted by offset.
    pub fn new(frames: Vec<TimedFrame>) -> Self {
        Self { frames }
    }

    /// `[]`, `Coming`, `Soon`, `Coming Soon` one second apart.
    pub fn coming_soon() -> Self {
        Self::new(vec![
            TimedFrame::new(Duration::ZERO, &[]),
            TimedFrame::new(Duration::from_secs(1), &["Coming"]),
            TimedFrame::new(Duration::from_secs(2), &["Soon"]),
            TimedFrame::new(Duration::from_secs(3), &["Coming", "Soon"]),
        ])
    }

    pub fn frames(&self) -> &[TimedFrame] {
        &self.frames
    }

    /// Spawns the cycle task. Must be called within a tokio runtime.
    pub fn start(&self) -> CycleHandle {
        let (tx, rx) = watch::channel(Frame::new());
        let tx = Arc::new(tx);
        let task = self.spawn(tx.clone());
        CycleHandle {
            cycle: self.clone(),
            tx,
            rx,
            task,
        }
    }

    fn spawn(&self, tx: Arc<watch::Sender<Frame>>) -> JoinHandle<()> {
        let frames = self.frames.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            for frame in frames {
                tokio::time::sleep_until(started + frame.at).await;
                trace!(words = ?frame.words, "placeholder frame");
                tx.send_replace(frame.words);
            }
        })
    }
}

/// Owner of a running cycle.
///
/// The handle holds the only task handle; [`reset`](Self::reset) replaces
/// the task and dropping the handle aborts it.
#[derive(Debug)]
pub struct CycleHandle {
    cycle: PlaceholderCycle,
    tx: Arc<watch::Sender<Frame>>,
    rx: watch::Receiver<Frame>,
    task: JoinHandle<()>,
}

impl CycleHandle {
    /// The frame currently shown.
    pub fn current(&self) -> Frame {
        self.rx.borrow().clone()
    }

    /// Waits for the next frame and returns it.
    ///
    /// Once the last frame is shown this never resolves; the sender lives
    /// as long as the handle.
    pub async fn changed(&mut self) -> Frame {
        if self.rx.changed().await.is_err() {
            return self.current();
        }
        self.rx.borrow_and_update().clone()
    }

    /// A receiver that observes this cycle's frames.
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.tx.subscribe()
    }

    /// Cancels pending frames and restarts from the empty frame.
    pub fn reset(&mut self) {
        self.task.abort();
        self.tx.send_replace(Frame::new());
        self.rx.mark_unchanged();
        self.task = self.cycle.spawn(self.tx.clone());
    }

    /// Returns true once every frame has been published.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CycleHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
