use super::element::{ElementProperty, ScrollElement};
use crate::scheduling::{EventHandle, EventQueue};
use crate::util::helpers::{next_ring_index, secs_to_delta};
use crate::{event, warn};
use chrono::TimeDelta;

/// Marker for a due activation.
#[derive(Debug)]
struct Activate;

/// A fixed set of scroll elements activated one after another at a shared interval.
#[derive(Debug)]
pub struct ScrollRing {
    name: &'static str,
    elements: Vec<ScrollElement>,
    timers: EventQueue<Activate>,
    activation: Option<EventHandle>,
    interval: TimeDelta,
    next_index: usize,
    started: bool,
    torn_down: bool,
}

impl ScrollRing {
    /// Builds a ring of `size` elements. Returns `None` for a non-positive interval.
    pub fn new(name: &'static str, property: ElementProperty, size: usize) -> Option<Self> {
        let interval = secs_to_delta(property.interval);
        if interval <= TimeDelta::zero() {
            warn!("Ring {name} has no usable interval ({}s), skipping", property.interval);
            return None;
        }
        Some(Self {
            name,
            elements: (0..size).map(|_| ScrollElement::new(property)).collect(),
            timers: EventQueue::new(),
            activation: None,
            interval,
            next_index: 0,
            started: false,
            torn_down: false,
        })
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn elements(&self) -> &[ScrollElement] { &self.elements }
    pub fn is_started(&self) -> bool { self.started }
    pub fn is_torn_down(&self) -> bool { self.torn_down }

    /// Arms the repeating activation timer. Called lazily by the first tick.
    fn start(&mut self) {
        self.started = true;
        if self.elements.is_empty() {
            return;
        }
        self.activation = Some(self.timers.schedule_in(self.interval, Activate));
    }

    /// Updates every element by `dt`, then fires due activations in ring order.
    pub fn tick(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }
        if !self.started {
            self.start();
        }
        let step = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        for element in &mut self.elements {
            element.update(step);
        }

        for (_, deadline, Activate) in self.timers.advance(secs_to_delta(step)) {
            self.fire_since(deadline);
        }
    }

    /// Fires every activation due between `deadline` and now in one pass and re-arms the timer.
    ///
    /// At most one full round of elements is activated; further missed firings only advance the
    /// ring position.
    fn fire_since(&mut self, deadline: TimeDelta) {
        let len = self.elements.len();
        if len == 0 {
            return;
        }
        let interval_us = self.interval.num_microseconds().unwrap_or(i64::MAX).max(1);
        let behind_us = (self.timers.now() - deadline).num_microseconds().unwrap_or(i64::MAX);
        let firings = (behind_us.max(0) / interval_us).saturating_add(1);

        let first = self.next_index;
        let activations = usize::try_from(firings).map_or(len, |f| f.min(len));
        for _ in 0..activations {
            self.activate_next();
        }
        let phase = usize::try_from(firings % i64::try_from(len).unwrap_or(i64::MAX)).unwrap_or(0);
        self.next_index = (first + phase) % len;

        let next = deadline + TimeDelta::microseconds(interval_us.saturating_mul(firings));
        self.activation = Some(self.timers.schedule_at(next, Activate));
    }

    fn activate_next(&mut self) {
        let len = self.elements.len();
        if let Some(element) = self.elements.get_mut(self.next_index) {
            if element.activate() {
                event!("Ring {} activated element {}", self.name, self.next_index);
            }
        }
        self.next_index = next_ring_index(self.next_index, len);
    }

    /// Cancels the activation timer and releases all elements. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(handle) = self.activation.take() {
            self.timers.cancel(handle);
        }
        self.timers.clear();
        self.elements.clear();
    }
}
