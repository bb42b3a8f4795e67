//! Round timer and clock
//!
//! `RoundTimer` is a synchronous countdown advanced one elapsed second at a
//! time, so the state machine can be tested without waiting on a real clock.
//! `Metronome` is the runtime side: a tokio task that emits one pulse per
//! second over a channel, tagged with the epoch of the timer it belongs to.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Something the timer reports while counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Seconds left after the latest decrement (or the starting value)
    Tick { remaining: u32 },
    /// Countdown reached zero; fires once per `start`
    Expired,
}

/// Single-instance countdown. Starting while running replaces the
/// previous countdown.
#[derive(Debug, Default)]
pub struct RoundTimer {
    remaining: Option<u32>,
    epoch: u64,
}

impl RoundTimer {
    /// Create an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting down from `duration_seconds`.
    ///
    /// Returns the starting tick, or `Expired` straight away for a zero
    /// duration.
    pub fn start(&mut self, duration_seconds: u32) -> TimerEvent {
        self.epoch += 1;
        if duration_seconds == 0 {
            self.remaining = None;
            return TimerEvent::Expired;
        }
        self.remaining = Some(duration_seconds);
        TimerEvent::Tick {
            remaining: duration_seconds,
        }
    }

    /// Stop the countdown; no further events are produced
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Advance by one elapsed second
    pub fn second_elapsed(&mut self) -> Option<TimerEvent> {
        let remaining = self.remaining?.saturating_sub(1);
        if remaining == 0 {
            self.remaining = None;
            Some(TimerEvent::Expired)
        } else {
            self.remaining = Some(remaining);
            Some(TimerEvent::Tick { remaining })
        }
    }

    /// Whether a countdown is in progress
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left, if running
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Identifier of the running countdown; changes on every `start`
    pub fn active_epoch(&self) -> Option<u64> {
        self.remaining.map(|_| self.epoch)
    }
}

/// One elapsed period, tagged with the timer epoch it was scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub epoch: u64,
}

/// Tokio-backed source of one pulse per period
#[derive(Debug)]
pub struct Metronome {
    period: Duration,
    tx: mpsc::Sender<Pulse>,
    running: Option<(u64, JoinHandle<()>)>,
}

impl Metronome {
    /// Create a stopped metronome and the receiver its pulses arrive on
    pub fn new(period: Duration) -> (Self, mpsc::Receiver<Pulse>) {
        let (tx, rx) = mpsc::channel(16);
        (
            Self {
                period,
                tx,
                running: None,
            },
            rx,
        )
    }

    /// Start pulsing for `epoch`; the first pulse arrives one period from now.
    /// Any previous pulse task is aborted.
    pub fn start(&mut self, epoch: u64) {
        self.stop();

        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(Pulse { epoch }).await.is_err() {
                    break;
                }
            }
        });
        tracing::debug!(epoch, "metronome started");
        self.running = Some((epoch, handle));
    }

    /// Stop pulsing
    pub fn stop(&mut self) {
        if let Some((epoch, handle)) = self.running.take() {
            handle.abort();
            tracing::debug!(epoch, "metronome stopped");
        }
    }

    /// Epoch currently being pulsed, if any
    pub fn epoch(&self) -> Option<u64> {
        self.running.as_ref().map(|(epoch, _)| *epoch)
    }

    /// Make the metronome follow a timer: restart on a new epoch, stop
    /// when the timer is idle
    pub fn follow(&mut self, active_epoch: Option<u64>) {
        match active_epoch {
            Some(epoch) if self.epoch() != Some(epoch) => self.start(epoch),
            None => self.stop(),
            _ => {}
        }
    }
}

impl Drop for Metronome {
    fn drop(&mut self) {
        self.stop();
    }
}
