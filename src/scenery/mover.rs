use super::ring::ScrollRing;
use crate::config::SceneryConfig;
use crate::warn;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The independently scheduled rings of the background.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter)]
pub enum RingKind {
    WhiteLine,
    BuildingsLeft,
    BuildingsRight,
}

impl RingKind {
    fn slot(self) -> usize {
        match self {
            RingKind::WhiteLine => 0,
            RingKind::BuildingsLeft => 1,
            RingKind::BuildingsRight => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            RingKind::WhiteLine => "white_line",
            RingKind::BuildingsLeft => "buildings_left",
            RingKind::BuildingsRight => "buildings_right",
        }
    }
}

/// Drives every configured ring from the same per-tick delta.
#[derive(Debug)]
pub struct SceneryMover {
    rings: [Option<ScrollRing>; 3],
}

impl SceneryMover {
    /// Builds one ring per configured property set; unconfigured rings are skipped.
    pub fn from_config(config: &SceneryConfig) -> Self {
        let mut rings = [None, None, None];
        for kind in RingKind::iter() {
            let property = match kind {
                RingKind::WhiteLine => config.white_line,
                RingKind::BuildingsLeft => config.buildings_left,
                RingKind::BuildingsRight => config.buildings_right,
            };
            match property {
                Some(p) => rings[kind.slot()] = ScrollRing::new(kind.label(), p, config.ring_size),
                None => warn!("No properties for ring {kind}, skipping"),
            }
        }
        Self { rings }
    }

    pub fn ring(&self, kind: RingKind) -> Option<&ScrollRing> { self.rings[kind.slot()].as_ref() }

    /// Number of rings that are configured and still running.
    pub fn active_rings(&self) -> usize {
        self.rings.iter().flatten().filter(|r| !r.is_torn_down()).count()
    }

    pub fn tick(&mut self, dt: f32) {
        for ring in self.rings.iter_mut().flatten() {
            ring.tick(dt);
        }
    }

    /// Tears down and releases every ring. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for slot in &mut self.rings {
            if let Some(ring) = slot.as_mut() {
                ring.teardown();
            }
            *slot = None;
        }
    }
}
