//! Frame clock driving time-based updates.
//!
//! The host calls [`FrameClock::tick`] once per display refresh with a
//! monotonic timestamp in nanoseconds. Components register callbacks with
//! [`FrameClock::receive_frame_nanos`]; each callback runs on every tick until
//! it returns [`FrameNanosControl::Stop`].
//!
//! ```
//! use sejahtera_ui::{FrameClock, FrameNanosControl, State};
//!
//! let mut clock = FrameClock::new();
//! let frames = State::new(0u32);
//! let counter = frames.clone();
//! clock.receive_frame_nanos(move |_| {
//!     let seen = counter.with_mut(|n| {
//!         *n += 1;
//!         *n
//!     });
//!     if seen < 2 {
//!         FrameNanosControl::Continue
//!     } else {
//!         FrameNanosControl::Stop
//!     }
//! });
//!
//! clock.tick(0);
//! clock.tick(16_000_000);
//! clock.tick(32_000_000);
//! assert_eq!(frames.get(), 2);
//! assert!(!clock.has_pending());
//! ```

use std::fmt;

use tracing::trace;

/// Whether a frame callback wants to keep receiving frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameNanosControl {
    /// Run again on the next frame.
    Continue,
    /// Drop the callback after this frame.
    Stop,
}

type FrameCallback = Box<dyn FnMut(u64) -> FrameNanosControl + Send>;

/// Cooperative scheduler for per-frame callbacks.
///
/// Callbacks run in registration order, on the thread that calls
/// [`tick`](Self::tick). Frame timestamps never go backwards: a timestamp
/// earlier than the previous frame is treated as the previous frame.
#[derive(Default)]
pub struct FrameClock {
    callbacks: Vec<FrameCallback>,
    last_frame_nanos: Option<u64>,
    frame_count: u64,
}

impl FrameClock {
    /// Creates an idle clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback that runs on every frame until it returns
    /// [`FrameNanosControl::Stop`].
    pub fn receive_frame_nanos<F>(&mut self, callback: F)
    where
        F: FnMut(u64) -> FrameNanosControl + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Runs all registered callbacks for a frame at `frame_nanos`.
    ///
    /// Returns the number of callbacks still registered afterwards.
    pub fn tick(&mut self, frame_nanos: u64) -> usize {
        let frame_nanos = match self.last_frame_nanos {
            Some(last) if frame_nanos < last => last,
            _ => frame_nanos,
        };
        self.last_frame_nanos = Some(frame_nanos);
        self.frame_count += 1;

        let before = self.callbacks.len();
        self.callbacks
            .retain_mut(|callback| callback(frame_nanos) == FrameNanosControl::Continue);
        trace!(
            frame = self.frame_count,
            frame_nanos,
            ran = before,
            remaining = self.callbacks.len(),
            "frame tick"
        );
        self.callbacks.len()
    }

    /// Returns true if any callback is waiting for a frame.
    pub fn has_pending(&self) -> bool {
        !self.callbacks.is_empty()
    }

    /// Number of callbacks waiting for a frame.
    pub fn pending(&self) -> usize {
        self.callbacks.len()
    }

    /// Timestamp of the most recent frame, if any.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.last_frame_nanos
    }

    /// Number of frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameClock")
            .field("pending", &self.callbacks.len())
            .field("last_frame_nanos", &self.last_frame_nanos)
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    };

    use super::*;

    #[test]
    fn timestamps_never_go_backwards() {
        let mut clock = FrameClock::new();
        let last = Arc::new(AtomicU64::new(0));
        let sink = Arc::clone(&last);
        clock.receive_frame_nanos(move |nanos| {
            sink.store(nanos, Ordering::SeqCst);
            FrameNanosControl::Continue
        });
        clock.tick(500);
        clock.tick(100);
        assert_eq!(last.load(Ordering::SeqCst), 500);
        assert_eq!(clock.last_frame_nanos(), Some(500));
        assert_eq!(clock.frame_count(), 2);
    }

}
