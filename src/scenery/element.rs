use crate::util::Vec2D;
use serde::Deserialize;

/// Fixed motion parameters shared by every element of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementProperty {
    /// Seconds between two activations in the ring.
    pub interval: f32,
    /// Seconds an activated element moves before it resets.
    pub duration: f32,
    pub start_position: Vec2D<f32>,
    pub start_scale: f32,
    pub start_velocity: Vec2D<f32>,
    #[serde(default)]
    pub velocity_coefficient: f32,
    #[serde(default)]
    pub scale_coefficient: f32,
}

impl ElementProperty {
    /// Velocity after `t` seconds: quadratic acceleration along the start direction.
    pub fn velocity(&self, t: f32) -> Vec2D<f32> {
        self.start_velocity.normalize() * (t * t * self.velocity_coefficient) + self.start_velocity
    }

    /// Uniform scale after `t` seconds.
    pub fn scale(&self, t: f32) -> f32 { self.start_scale + t * self.scale_coefficient }
}

/// One background element that runs a bounded animation each time it is activated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollElement {
    property: ElementProperty,
    position: Vec2D<f32>,
    scale: f32,
    active: bool,
    visible: bool,
    t: f32,
}

impl ScrollElement {
    pub fn new(property: ElementProperty) -> Self {
        let mut element = Self {
            property,
            position: property.start_position,
            scale: property.start_scale,
            active: false,
            visible: false,
            t: 0.0,
        };
        element.init();
        element
    }

    pub fn property(&self) -> &ElementProperty { &self.property }
    pub fn position(&self) -> Vec2D<f32> { self.position }
    pub fn scale(&self) -> f32 { self.scale }
    /// Local scale as `[x, y, z]`; z stays at 1.
    pub fn local_scale(&self) -> [f32; 3] { [self.scale, self.scale, 1.0] }
    pub fn is_active(&self) -> bool { self.active }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn t(&self) -> f32 { self.t }

    /// Starts the animation from the start values. Re-activating a running element is a no-op.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.init();
        self.active = true;
        true
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            self.visible = false;
            return;
        }
        self.visible = true;
        self.position += self.property.velocity(self.t) * dt;
        self.scale = self.property.scale(self.t);

        self.t += dt;
        if self.t >= self.property.duration {
            self.init();
        }
    }

    fn init(&mut self) {
        self.t = 0.0;
        self.position = self.property.start_position;
        self.scale = self.property.start_scale;
        self.active = false;
        self.visible = false;
    }
}
