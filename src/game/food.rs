use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Position};

/// The set of food cells on the board.
///
/// Always disjoint from the snake body: `spawn` only picks from cells the
/// occupied set does not cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodField {
    positions: Vec<Position>,
}

impl FoodField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the food set with `count` cells drawn uniformly without
    /// replacement from the free cells of the grid.
    ///
    /// If fewer than `count` free cells exist, spawns as many as there are.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, grid: Grid, occupied: &[Position], count: usize) {
        let mut free: Vec<Position> = Vec::with_capacity(grid.cell_count());
        for r in 0..grid.rows as i32 {
            for c in 0..grid.cols as i32 {
                let pos = Position::new(r, c);
                if !occupied.contains(&pos) {
                    free.push(pos);
                }
            }
        }

        self.positions = free.choose_multiple(rng, count).copied().collect();
    }

    /// Remove the food item at `pos`, if present.
    pub fn consume(&mut self, pos: Position) {
        self.positions.retain(|p| *p != pos);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pin the food set to known cells for tests.
    #[cfg(test)]
    pub(crate) fn set_positions(&mut self, positions: Vec<Position>) {
        self.positions = positions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let grid = Grid::new(4, 4);
        let occupied: Vec<Position> = (0..4)
            .flat_map(|r| (0..3).map(move |c| Position::new(r, c)))
            .collect();

        let mut food = FoodField::new();
        let mut rng = rng();
        for _ in 0..20 {
            food.spawn(&mut rng, grid, &occupied, 2);
            assert_eq!(food.len(), 2);
            for pos in food.positions() {
                assert!(!occupied.contains(pos));
                assert_eq!(pos.c, 3);
            }
        }
    }

    #[test]
    fn test_spawn_items_are_distinct() {
        let grid = Grid::new(3, 3);
        let mut food = FoodField::new();
        let mut rng = rng();

        food.spawn(&mut rng, grid, &[], 9);

        assert_eq!(food.len(), 9);
        let mut seen = food.positions().to_vec();
        seen.sort_by_key(|p| (p.r, p.c));
        seen.dedup();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_spawn_degrades_when_board_is_nearly_full() {
        let grid = Grid::new(2, 2);
        let occupied = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
        ];

        let mut food = FoodField::new();
        let mut rng = rng();
        food.spawn(&mut rng, grid, &occupied, 3);

        assert_eq!(food.positions(), &[Position::new(1, 1)]);
    }

    #[test]
    fn test_spawn_replaces_previous_set() {
        let grid = Grid::new(5, 5);
        let mut food = FoodField::new();
        let mut rng = rng();

        food.spawn(&mut rng, grid, &[], 3);
        food.spawn(&mut rng, grid, &[], 1);

        assert_eq!(food.len(), 1);
    }

    #[test]
    fn test_consume_is_noop_when_absent() {
        let grid = Grid::new(5, 5);
        let mut food = FoodField::new();
        let mut rng = rng();
        food.spawn(&mut rng, grid, &[], 2);

        let present = food.positions()[0];
        food.consume(Position::new(-1, -1));
        assert_eq!(food.len(), 2);

        food.consume(present);
        assert_eq!(food.len(), 1);
        assert!(!food.contains(present));
    }

    #[test]
    fn test_seeded_spawn_is_deterministic() {
        let grid = Grid::new(10, 10);
        let mut a = FoodField::new();
        let mut b = FoodField::new();

        a.spawn(&mut StdRng::seed_from_u64(7), grid, &[], 3);
        b.spawn(&mut StdRng::seed_from_u64(7), grid, &[], 3);

        assert_eq!(a, b);
    }
}
