use super::board::ExpressionBoard;
use crate::fatal;
use crate::util::Vec2D;

/// Frame positions of the twelve board slots, used to resolve drag releases to slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    frames: [Vec2D<f32>; ExpressionBoard::LEN],
}

impl BoardLayout {
    /// Horizontal distance between neighbouring frames of the default row.
    const DEFAULT_SPACING: f32 = 1.0;

    pub fn new(frames: [Vec2D<f32>; ExpressionBoard::LEN]) -> Self { Self { frames } }

    /// A single row of frames centred on the origin.
    #[allow(clippy::cast_precision_loss)]
    pub fn row() -> Self {
        let half = (ExpressionBoard::LEN - 1) as f32 / 2.0;
        let frames = std::array::from_fn(|i| {
            Vec2D::new((i as f32 - half) * Self::DEFAULT_SPACING, 0.0)
        });
        Self { frames }
    }

    pub fn frame(&self, index: usize) -> Option<Vec2D<f32>> { self.frames.get(index).copied() }

    /// Exact lookup of the slot whose frame sits at `pos`.
    ///
    /// # Panics
    /// A position that is not a frame indicates a defect in the caller and aborts via `fatal!`.
    pub fn index_of(&self, pos: Vec2D<f32>) -> usize {
        self.frames
            .iter()
            .position(|f| *f == pos)
            .unwrap_or_else(|| fatal!("No board slot at {pos}"))
    }

    /// Snaps a release point to the nearest frame within `radius`.
    pub fn snap(&self, pos: Vec2D<f32>, radius: f32) -> Option<Vec2D<f32>> {
        self.frames
            .iter()
            .map(|f| (*f, f.euclid_distance(&pos)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(f, _)| f)
    }

    /// The slot of the nearest frame within `radius` of a release point.
    pub fn drop_target(&self, pos: Vec2D<f32>, radius: f32) -> Option<usize> {
        self.snap(pos, radius).map(|frame| self.index_of(frame))
    }

    /// Resolves a release point to a slot that would accept a tile right now.
    pub fn open_drop_target(
        &self,
        board: &ExpressionBoard,
        pos: Vec2D<f32>,
        radius: f32,
    ) -> Option<usize> {
        self.drop_target(pos, radius).filter(|i| board.is_open(*i))
    }
}

impl Default for BoardLayout {
    fn default() -> Self { Self::row() }
}
