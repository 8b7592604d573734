//! Rotation carousel - an active index over a fixed list that auto-advances

use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, watch};

use crate::error::{Error, Result};
use crate::model::Direction;
use crate::task::RepeatingTask;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub active_index: usize,
    pub direction: Direction,
    pub is_paused: bool,
    pub len: usize,
}

struct CarouselInner<T> {
    this: Weak<Mutex<CarouselInner<T>>>,
    items: Vec<T>,
    state: CarouselState,
    interval: Duration,
    autoplay: RepeatingTask,
    snapshots: watch::Sender<CarouselState>,
}

/// Handle to a mounted carousel. Clones share the same carousel.
pub struct RotationCarousel<T> {
    inner: Arc<Mutex<CarouselInner<T>>>,
    updates: watch::Receiver<CarouselState>,
}

impl<T> Clone for RotationCarousel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            updates: self.updates.clone(),
        }
    }
}

impl<T> RotationCarousel<T>
where
    T: Clone + Send + 'static,
{
    /// Start rotating through `items` every `interval`. Must be called from
    /// within a tokio runtime.
    pub fn mount(items: Vec<T>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::invalid("autoplay interval must be greater than zero"));
        }

        let state = CarouselState {
            len: items.len(),
            ..Default::default()
        };
        let (snapshots, updates) = watch::channel(state);

        let inner = Arc::new_cyclic(|this: &Weak<Mutex<CarouselInner<T>>>| {
            let mut inner = CarouselInner {
                this: this.clone(),
                items,
                state,
                interval,
                autoplay: RepeatingTask::idle(),
                snapshots,
            };
            inner.restart_autoplay();
            Mutex::new(inner)
        });

        tracing::debug!(items = state.len, interval_ms = interval.as_millis() as u64, "Carousel mounted");
        Ok(Self { inner, updates })
    }

    /// Move `steps` positions, wrapping around. Does not touch the timer.
    pub async fn advance(&self, steps: isize) {
        self.inner.lock().await.advance(steps);
    }

    /// Jump to `index` and push the next automatic tick a full interval away.
    pub async fn go_to(&self, index: usize) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let len = inner.items.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        if len <= 1 {
            return Ok(());
        }

        inner.autoplay.stop();
        inner.state.direction = if index > inner.state.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        inner.state.active_index = index;
        inner.restart_autoplay();
        inner.publish();
        tracing::debug!(index, "Carousel jumped");
        Ok(())
    }

    pub async fn next(&self) {
        self.inner.lock().await.step_manually(1);
    }

    pub async fn previous(&self) {
        self.inner.lock().await.step_manually(-1);
    }

    pub async fn pause(&self) {
        let mut inner = self.inner.lock().await;
        if inner.state.is_paused {
            return;
        }
        inner.autoplay.stop();
        inner.state.is_paused = true;
        inner.publish();
    }

    pub async fn resume(&self) {
        let mut inner = self.inner.lock().await;
        if !inner.state.is_paused {
            return;
        }
        inner.state.is_paused = false;
        inner.restart_autoplay();
        inner.publish();
    }

    pub async fn unmount(&self) {
        self.inner.lock().await.autoplay.stop();
    }

    pub async fn current(&self) -> Option<T> {
        let inner = self.inner.lock().await;
        inner.items.get(inner.state.active_index).cloned()
    }

    pub async fn is_autoplaying(&self) -> bool {
        self.inner.lock().await.autoplay.is_running()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.updates.clone()
    }

    pub fn snapshot(&self) -> CarouselState {
        *self.updates.borrow()
    }
}

impl<T> CarouselInner<T>
where
    T: Clone + Send + 'static,
{
    fn advance(&mut self, steps: isize) {
        let len = self.items.len();
        if len <= 1 || steps == 0 {
            return;
        }
        self.state.direction = Direction::from_steps(steps);
        self.state.active_index = (self.state.active_index as isize + steps).rem_euclid(len as isize) as usize;
        self.publish();
    }

    fn step_manually(&mut self, steps: isize) {
        if self.items.len() <= 1 {
            return;
        }
        self.autoplay.stop();
        self.advance(steps);
        self.restart_autoplay();
    }

    /// Schedule a fresh interval unless paused or there is nothing to rotate.
    fn restart_autoplay(&mut self) {
        self.autoplay.stop();
        if self.state.is_paused || self.items.len() <= 1 {
            return;
        }
        let this = self.this.clone();
        self.autoplay = RepeatingTask::start(self.interval, move || {
            let this = this.clone();
            async move {
                if let Some(inner) = this.upgrade() {
                    let mut inner = inner.lock().await;
                    if !inner.state.is_paused {
                        inner.advance(1);
                        tracing::trace!(index = inner.state.active_index, "Carousel auto-advanced");
                    }
                }
            }
        });
    }

    fn publish(&self) {
        self.snapshots.send_if_modified(|current| {
            if *current == self.state {
                false
            } else {
                *current = self.state;
                true
            }
        });
    }
}
