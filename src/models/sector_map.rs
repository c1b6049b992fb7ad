use rand::Rng;

use super::constants::SECTOR_SIZE;
use super::enterprise::Enterprise;
use super::entity::{Entity, EntityKind};
use super::position::SectorPosition;
use super::torpedo::Torpedo;

/// The 10x10 sector grid of one quadrant.
///
/// Holds at most one entity per cell plus an independent layer of torpedoes
/// in flight. Internal 0-based indexing: grid[y][x].
#[derive(Debug, Clone, PartialEq)]
pub struct SectorMap {
    grid: [[Option<Entity>; SECTOR_SIZE]; SECTOR_SIZE],
    torpedoes: [[Option<Torpedo>; SECTOR_SIZE]; SECTOR_SIZE],
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[None; SECTOR_SIZE]; SECTOR_SIZE],
            torpedoes: [[None; SECTOR_SIZE]; SECTOR_SIZE],
        }
    }

    fn index(pos: SectorPosition) -> Option<(usize, usize)> {
        if pos.in_bounds() {
            Some((pos.y as usize, pos.x as usize))
        } else {
            None
        }
    }

    /// Get the entity at a sector. Out-of-bounds positions hold nothing.
    pub fn get(&self, pos: SectorPosition) -> Option<&Entity> {
        let (y, x) = Self::index(pos)?;
        self.grid[y][x].as_ref()
    }

    pub fn get_mut(&mut self, pos: SectorPosition) -> Option<&mut Entity> {
        let (y, x) = Self::index(pos)?;
        self.grid[y][x].as_mut()
    }

    /// True for an in-bounds cell with no entity in it.
    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        matches!(Self::index(pos), Some((y, x)) if self.grid[y][x].is_none())
    }

    /// Put an entity into an empty cell. Returns false when the cell is
    /// occupied or out of bounds.
    pub fn place(&mut self, pos: SectorPosition, entity: Entity) -> bool {
        match Self::index(pos) {
            Some((y, x)) if self.grid[y][x].is_none() => {
                self.grid[y][x] = Some(entity);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, pos: SectorPosition) -> Option<Entity> {
        let (y, x) = Self::index(pos)?;
        self.grid[y][x].take()
    }

    /// Move a ship from `from` to `to`, keeping the grid and the ship's own
    /// coordinates in step. Rejected (nothing changes) when `from` holds no
    /// movable entity or `to` is occupied or out of bounds.
    pub fn move_entity(
        &mut self,
        from: SectorPosition,
        to: SectorPosition,
        player: &mut Enterprise,
    ) -> bool {
        let movable = matches!(self.get(from), Some(Entity::Player | Entity::Hostile(_)));
        if !movable || !self.is_empty(to) {
            return false;
        }
        let (Some((fy, fx)), Some((ty, tx))) = (Self::index(from), Self::index(to)) else {
            return false;
        };
        let Some(mut entity) = self.grid[fy][fx].take() else {
            return false;
        };
        if let Some(ship) = entity.movable_mut(player) {
            ship.move_to(to);
        }
        self.grid[ty][tx] = Some(entity);
        true
    }

    /// Occupied cells in row-major order.
    pub fn entities(&self) -> impl Iterator<Item = (SectorPosition, &Entity)> {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.as_ref()
                    .map(|e| (SectorPosition::new(x as i32, y as i32), e))
            })
        })
    }

    pub fn positions_of(&self, kind: EntityKind) -> Vec<SectorPosition> {
        self.entities()
            .filter(|(_, e)| e.kind() == kind)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities().filter(|(_, e)| e.kind() == kind).count()
    }

    pub fn find_player(&self) -> Option<SectorPosition> {
        self.entities()
            .find(|(_, e)| e.kind() == EntityKind::Player)
            .map(|(pos, _)| pos)
    }

    /// Pick random cells until an empty one turns up. The grid is never
    /// close to full, so this terminates quickly.
    pub fn random_empty_sector<R: Rng + ?Sized>(&self, rng: &mut R) -> SectorPosition {
        loop {
            let pos = SectorPosition::new(
                rng.gen_range(0..SECTOR_SIZE as i32),
                rng.gen_range(0..SECTOR_SIZE as i32),
            );
            if self.is_empty(pos) {
                return pos;
            }
        }
    }

    // ========== Torpedo layer ==========

    pub fn torpedo_at(&self, pos: SectorPosition) -> Option<&Torpedo> {
        let (y, x) = Self::index(pos)?;
        self.torpedoes[y][x].as_ref()
    }

    /// Put a torpedo at its current sector. If another torpedo is already
    /// there, both are destroyed and false is returned.
    pub fn put_torpedo(&mut self, torpedo: Torpedo) -> bool {
        let Some((y, x)) = Self::index(torpedo.sector) else {
            return false;
        };
        if self.torpedoes[y][x].take().is_some() {
            return false;
        }
        self.torpedoes[y][x] = Some(torpedo);
        true
    }

    /// Empty the torpedo layer, returning its contents in row-major order.
    pub fn take_torpedoes(&mut self) -> Vec<Torpedo> {
        self.torpedoes
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .filter_map(Option::take)
            .collect()
    }

    pub fn clear_torpedoes(&mut self) {
        self.torpedoes = [[None; SECTOR_SIZE]; SECTOR_SIZE];
    }

    pub fn torpedo_count(&self) -> usize {
        self.torpedoes
            .iter()
            .flat_map(|row| row.iter())
            .filter(|t| t.is_some())
            .count()
    }

    /// Render one row as 4-character cells: a space and the 3-character
    /// symbol. Entities draw over torpedoes.
    pub fn render_row(&self, y: i32) -> String {
        (0..SECTOR_SIZE as i32)
            .map(|x| {
                let pos = SectorPosition::new(x, y);
                let symbol = match (self.get(pos), self.torpedo_at(pos)) {
                    (Some(entity), _) => entity.kind().symbol(),
                    (None, Some(_)) => " @ ",
                    (None, None) => "   ",
                };
                format!(" {}", symbol)
            })
            .collect()
    }
}
