/// The shared countdown, always clamped into `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    time: f32,
}

impl SessionClock {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 255.0;

    pub fn new(time: f32) -> Self {
        let mut clock = Self { time: Self::MIN };
        clock.set(time);
        clock
    }

    pub fn time(&self) -> f32 { self.time }

    /// NaN is treated as an empty clock.
    pub fn set(&mut self, time: f32) {
        self.time = if time.is_nan() { Self::MIN } else { time.clamp(Self::MIN, Self::MAX) };
    }

    pub fn increment(&mut self, delta: f32) { self.set(self.time + delta); }

    pub fn decrement(&mut self, delta: f32) { self.set(self.time - delta); }

    pub fn is_expired(&self) -> bool { self.time <= Self::MIN }
}
