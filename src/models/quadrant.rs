use super::constants::Condition;
use super::enterprise::Enterprise;
use super::entity::{Entity, EntityKind};
use super::input_state::InputPanel;
use super::message::MessageLog;
use super::position::{QuadrantPosition, SectorPosition};
use super::sector_map::SectorMap;
use super::stardate::Stardate;

/// One 10x10 tactical area of the galaxy.
///
/// Created once at galaxy generation and kept for the whole session, so
/// hostile and starbase losses persist between visits.
#[derive(Debug, Clone)]
pub struct Quadrant {
    pub position: QuadrantPosition,
    pub map: SectorMap,
    pub starting_hostiles: u32,
    pub hostiles: u32,
    pub starting_starbases: u32,
    pub starbases: u32,
    pub stars: u32,
    /// Whether the player's sensors have revealed this quadrant.
    pub scanned: bool,
    pub messages: MessageLog,
    pub panel: InputPanel,
}

impl Quadrant {
    pub fn new(
        position: QuadrantPosition,
        map: SectorMap,
        hostiles: u32,
        stars: u32,
        starbases: u32,
    ) -> Self {
        Quadrant {
            position,
            map,
            starting_hostiles: hostiles,
            hostiles,
            starting_starbases: starbases,
            starbases,
            stars,
            scanned: false,
            messages: MessageLog::new(),
            panel: InputPanel::new(),
        }
    }

    pub fn log(&mut self, text: impl Into<String>, now: Stardate) {
        let text = text.into();
        log::debug!("quadrant {},{}: {}", self.position.x + 1, self.position.y + 1, text);
        self.messages.push(text, now);
    }

    /// Docked: shields down and a starbase directly north, south, east or west.
    pub fn is_docked(&self, player: &Enterprise) -> bool {
        if player.shields() != 0 {
            return false;
        }
        let at = player.sector();
        [(0, 1), (0, -1), (1, 0), (-1, 0)].iter().any(|(dx, dy)| {
            matches!(
                self.map.get(SectorPosition::new(at.x + dx, at.y + dy)),
                Some(Entity::Starbase(_))
            )
        })
    }

    pub fn condition(&self, player: &Enterprise) -> Condition {
        if self.is_docked(player) {
            Condition::Docked
        } else if self.hostiles > 0 {
            Condition::Red
        } else {
            Condition::Green
        }
    }

    pub fn hostile_positions(&self) -> Vec<SectorPosition> {
        self.map.positions_of(EntityKind::Hostile)
    }

    /// Take the player out of this quadrant: marker, torpedoes in flight and
    /// any half-entered command are all cleared.
    pub fn vacate(&mut self) {
        if let Some(pos) = self.map.find_player() {
            self.map.remove(pos);
        }
        self.map.clear_torpedoes();
        self.panel.reset();
    }

    pub fn summary(&self, is_active: bool) -> QuadrantSummary {
        QuadrantSummary {
            position: self.position,
            hostiles: self.hostiles,
            starbases: self.starbases,
            stars: self.stars,
            is_active,
            scanned: self.scanned,
        }
    }
}

/// What the galaxy map and long-range sensors know about a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantSummary {
    pub position: QuadrantPosition,
    pub hostiles: u32,
    pub starbases: u32,
    pub stars: u32,
    pub is_active: bool,
    pub scanned: bool,
}

impl QuadrantSummary {
    /// The 3-digit code: hostiles, starbases, stars.
    pub fn encoded(&self) -> String {
        format!("{}{}{}", self.hostiles, self.starbases, self.stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::klingon::Klingon;
    use crate::models::starbase::Starbase;

    fn quadrant_with_player(at: SectorPosition) -> (Quadrant, Enterprise) {
        let mut map = SectorMap::new();
        map.place(at, Entity::Player);
        let q = Quadrant::new(QuadrantPosition::new(2, 3), map, 0, 0, 0);
        (q, Enterprise::new(at))
    }

    #[test]
    fn docked_requires_orthogonal_starbase_and_lowered_shields() {
        let at = SectorPosition::new(4, 4);
        let (mut q, mut player) = quadrant_with_player(at);
        let base = SectorPosition::new(5, 5);
        q.map.place(base, Entity::Starbase(Starbase::new(base)));
        assert!(!q.is_docked(&player), "diagonal does not dock");

        let base = SectorPosition::new(4, 5);
        q.map.place(base, Entity::Starbase(Starbase::new(base)));
        assert!(q.is_docked(&player));
        assert_eq!(q.condition(&player), Condition::Docked);

        player.set_shields(10);
        assert!(!q.is_docked(&player));
    }

    #[test]
    fn condition_red_while_hostiles_remain() {
        let (mut q, player) = quadrant_with_player(SectorPosition::new(0, 0));
        assert_eq!(q.condition(&player), Condition::Green);
        let k = SectorPosition::new(7, 7);
        q.map.place(k, Entity::Hostile(Klingon::new(k)));
        q.hostiles = 1;
        assert_eq!(q.condition(&player), Condition::Red);
    }

    #[test]
    fn vacate_clears_player_and_panel() {
        let (mut q, _) = quadrant_with_player(SectorPosition::new(1, 1));
        q.panel.set_state(crate::models::input_state::InputState::Shields);
        q.vacate();
        assert_eq!(q.map.find_player(), None);
        assert_eq!(q.panel, InputPanel::new());
    }

    #[test]
    fn summary_encodes_counts() {
        let mut q = Quadrant::new(QuadrantPosition::new(0, 0), SectorMap::new(), 3, 6, 1);
        q.scanned = true;
        let s = q.summary(false);
        assert_eq!(s.encoded(), "316");
        assert!(s.scanned && !s.is_active);
    }
}
