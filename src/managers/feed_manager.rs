//! Live permission-event feed for PrivacyGuard.
//!
//! A bounded, newest-first buffer of synthetic permission events emulating
//! live telemetry. The caller drives ticks on a single timeline (the demo
//! binary sleeps `tick_interval_secs` between ticks); each tick draws one
//! event from fixed catalogs, prepends it, and evicts the oldest entries
//! past capacity. The clock and random source are injectable so tests are
//! deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::types::permission::{DeviceType, PermissionEvent, PermissionKind, PermissionStatus};

/// Source of "now" for generated event timestamps.
pub trait Clock {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> i64;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

/// Feed sizing and cadence configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Maximum number of events retained; oldest entries drop past this.
    pub capacity: usize,
    /// Seconds between ticks when the caller drives the feed on a timer.
    pub tick_interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            tick_interval_secs: 3,
        }
    }
}

/// Sample domains the simulator draws from.
const SAMPLE_DOMAINS: &[&str] = &["youtube.com", "instagram.com", "zoom.us", "spotify.com"];

/// Statuses the simulator draws from (live telemetry never emits Prompt).
const SAMPLE_STATUSES: &[PermissionStatus] = &[PermissionStatus::Granted, PermissionStatus::Denied];

const SAMPLE_DEVICES: &[DeviceType] = &[DeviceType::Desktop, DeviceType::Mobile, DeviceType::Tablet];

/// Bounded event feed with a start/stop gate.
///
/// States: Stopped and Running. `tick()` only produces an event while
/// running, so no event can be generated after `stop()` returns. Each tick
/// mutates the buffer atomically; readers only ever see a fully-applied
/// tick through `events()`.
pub struct EventFeed {
    events: Vec<PermissionEvent>,
    config: FeedConfig,
    running: bool,
    rng: StdRng,
    clock: Box<dyn Clock>,
}

impl EventFeed {
    /// Feed with default config, wall clock, and an OS-entropy seed.
    pub fn new() -> Self {
        Self::with_parts(
            FeedConfig::default(),
            Box::new(SystemClock),
            rand::random::<u64>(),
        )
    }

    /// Fully injected constructor; tests pass a fixed clock and seed to get
    /// a reproducible event sequence.
    pub fn with_parts(config: FeedConfig, clock: Box<dyn Clock>, seed: u64) -> Self {
        Self {
            events: Vec::new(),
            config,
            running: false,
            rng: StdRng::seed_from_u64(seed),
            clock,
        }
    }

    /// Replace the buffer contents with seed data, truncated to capacity.
    pub fn seed(&mut self, mut events: Vec<PermissionEvent>) {
        events.truncate(self.config.capacity);
        self.events = events;
    }

    /// Begin producing events on tick. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop producing events. Idempotent; no tick fires after this returns.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Current buffer, newest first.
    pub fn events(&self) -> &[PermissionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Generate one synthetic event and push it onto the feed.
    ///
    /// Returns `None` while stopped. A generated event draws its domain,
    /// permission, device, and status uniformly from the catalogs and a
    /// duration from 10–129 seconds.
    pub fn tick(&mut self) -> Option<&PermissionEvent> {
        if !self.running {
            return None;
        }

        let domain = SAMPLE_DOMAINS[self.rng.gen_range(0..SAMPLE_DOMAINS.len())];
        let permission = PermissionKind::ALL[self.rng.gen_range(0..PermissionKind::ALL.len())];
        let device_type = SAMPLE_DEVICES[self.rng.gen_range(0..SAMPLE_DEVICES.len())];
        let status = SAMPLE_STATUSES[self.rng.gen_range(0..SAMPLE_STATUSES.len())];
        let duration = self.rng.gen_range(10..130u32);

        let event = PermissionEvent {
            id: Uuid::new_v4().to_string(),
            domain: domain.to_string(),
            permission,
            timestamp: self.clock.now(),
            duration: Some(duration),
            device_type,
            status,
        };

        self.events.insert(0, event);
        self.events.truncate(self.config.capacity);
        Some(&self.events[0])
    }
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}
