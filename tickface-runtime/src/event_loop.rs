//! Event loop driver
//!
//! Owns the face, its surface, the timer queue and the event channel, and
//! dispatches events one at a time. Time only moves when [`EventLoop::advance`]
//! is called, which makes whole sessions reproducible.

use embassy_sync::channel::TrySendError;
use tickface_core::config::FaceConfig;
use tickface_core::state::Event;
use tickface_core::traits::SequenceSource;
use tickface_core::WatchFace;
use tickface_display::LayerStack;
use tickface_hal::{ChargeState, WallClock};
use tickface_sprite::SpriteLoader;

use crate::channels::EventChannel;
use crate::clock::SimClock;
use crate::timer::TimerQueue;

/// Event loop playing bundled sprites
pub type SpriteEventLoop<R> = EventLoop<SpriteLoader<R>>;

/// Single-threaded event loop
pub struct EventLoop<L: SequenceSource> {
    face: WatchFace<L>,
    surface: LayerStack,
    timers: TimerQueue,
    events: EventChannel,
    clock: SimClock,
    dropped: u32,
}

impl<L: SequenceSource> EventLoop<L> {
    pub fn new(config: FaceConfig, loader: L, clock: SimClock) -> Self {
        Self {
            face: WatchFace::new(config, loader),
            surface: LayerStack::new(config.layout.screen),
            timers: TimerQueue::new(),
            events: EventChannel::new(),
            clock,
            dropped: 0,
        }
    }

    /// Show the face
    pub fn start(&mut self, battery: ChargeState) {
        info!("Event loop started at {}", self.now_ms());
        self.face
            .load(&mut self.surface, &mut self.timers, &self.clock, battery);
    }

    /// Tear the face down; armed timers still fire but do nothing
    pub fn stop(&mut self) {
        self.run_until_idle();
        self.face.unload(&mut self.surface);
    }

    /// Queue an event for dispatch
    ///
    /// Returns `false` if the channel was full and the event was dropped.
    pub fn post(&mut self, event: Event) -> bool {
        match self.events.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!("Event channel full, dropping {:?}", event);
                self.dropped += 1;
                false
            }
        }
    }

    /// Dispatch queued events until the channel is empty
    pub fn run_until_idle(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_receive() {
            trace!("Dispatching {:?}", event);
            self.face.handle(event, &mut self.surface, &mut self.timers);
            handled += 1;
        }
        handled
    }

    /// Let `ms` milliseconds pass
    ///
    /// Timers and minute ticks falling inside the window fire in time order,
    /// each dispatched before the next is considered, so frames scheduled
    /// along the way fire too. A timer due at the same instant as a minute
    /// tick fires first. Returns the number of timers fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.deadline(ms);
        let mut fired = 0;

        self.run_until_idle();

        loop {
            let next_timer = self.timers.next_due().filter(|due| *due <= target);
            let next_minute = Some(self.clock.next_minute_ms()).filter(|at| *at <= target);

            match (next_timer, next_minute) {
                (Some(due), minute) if minute.map_or(true, |at| due <= at) => {
                    self.set_time(due);
                    while let Some(token) = self.timers.pop_due() {
                        fired += 1;
                        self.post(Event::FrameDue(token));
                        self.run_until_idle();
                    }
                }
                (_, Some(at)) => {
                    self.set_time(at);
                    let time = self.clock.now();
                    self.post(Event::MinuteTick(time));
                    self.run_until_idle();
                }
                _ => break,
            }
        }

        self.set_time(target);
        fired
    }

    /// Instant `ms` from now, pinned at the end of the clock's range
    fn deadline(&self, ms: u64) -> u64 {
        self.now_ms().saturating_add(ms)
    }

    fn set_time(&mut self, now_ms: u64) {
        self.timers.set_now(now_ms);
        self.clock.set_elapsed(self.timers.now_ms());
    }

    /// Time since start (ms)
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn face(&self) -> &WatchFace<L> {
        &self.face
    }

    pub fn surface(&self) -> &LayerStack {
        &self.surface
    }

    /// Surface access for the compositor, e.g. to take the dirty region
    pub fn surface_mut(&mut self) -> &mut LayerStack {
        &mut self.surface
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Events dropped because the channel was full
    pub fn dropped_events(&self) -> u32 {
        self.dropped
    }
}
