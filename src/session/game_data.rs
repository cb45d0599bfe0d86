/// Counters kept outside the board for end-of-session reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameData {
    defeated_enemy_num: u32,
}

impl GameData {
    pub fn reset(&mut self) { *self = Self::default(); }

    /// Number of successful evaluations so far.
    pub fn defeated_enemy_num(&self) -> u32 { self.defeated_enemy_num }

    pub fn record_defeat(&mut self) {
        self.defeated_enemy_num = self.defeated_enemy_num.saturating_add(1);
    }
}
