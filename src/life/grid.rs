use rand::Rng;

/// A bounded two-dimensional field of cells, stored row-major
///
/// Cells outside the grid are treated as permanently dead; there is no
/// wraparound at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl LifeGrid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from text rows, `#` or `O` marking live cells
    ///
    /// Rows shorter than the widest one are padded with dead cells.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len());

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set(x, y, matches!(ch, '#' | 'O'));
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell state; anything off the grid reads as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Give every cell an independent, uniform alive/dead state
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = rng.gen_bool(0.5);
        }
    }

    /// Count live cells among the in-bounds members of the 8-neighborhood
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }

                if self.get(nx as usize, ny as usize) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics, and a zero-width grid has no rows to show anyway
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}

/// The B3/S23 transition for a single cell
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Compute the whole next generation of `current` into `next`
///
/// Every cell of `next` is overwritten from `current` alone, so the two
/// buffers never mix within a generation.
pub fn next_generation(current: &LifeGrid, next: &mut LifeGrid) {
    assert_eq!(
        (current.width, current.height),
        (next.width, next.height),
        "generation buffers must share dimensions"
    );

    for y in 0..current.height {
        for x in 0..current.width {
            let alive = next_state(current.get(x, y), current.live_neighbors(x, y));
            next.set(x, y, alive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn step(grid: &LifeGrid) -> LifeGrid {
        let mut next = LifeGrid::new(grid.width(), grid.height());
        next_generation(grid, &mut next);
        next
    }

    #[test]
    fn test_lonely_center_dies() {
        let grid = LifeGrid::from_rows(&["...", ".#.", "..."]);
        let next = step(&grid);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_exactly_three_neighbors_means_alive() {
        // Dead center with three live neighbors is born
        let grid = LifeGrid::from_rows(&["#.#", "...", ".#."]);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        assert!(step(&grid).get(1, 1));

        // Live center with three live neighbors survives
        let grid = LifeGrid::from_rows(&["#.#", ".#.", ".#."]);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        assert!(step(&grid).get(1, 1));
    }

    #[test]
    fn test_transition_table() {
        for count in 0..=8u8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3);
            assert_eq!(next_state(false, count), count == 3);
        }
    }

    #[test]
    fn test_corner_sees_at_most_three_neighbors() {
        let mut grid = LifeGrid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, true);
            }
        }

        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(3, 3), 3);
        assert_eq!(grid.live_neighbors(0, 3), 3);
        assert_eq!(grid.live_neighbors(1, 0), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_no_wraparound() {
        // A vertical blinker against the left edge would gain a neighbor
        // from the right edge on a torus
        let grid = LifeGrid::from_rows(&["#...", "#...", "#..."]);
        let next = step(&grid);
        assert!(!next.get(3, 1));
        assert!(next.get(0, 1));
        assert!(next.get(1, 1));
        assert_eq!(next.population(), 2);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = LifeGrid::from_rows(&[".....", ".....", ".###.", ".....", "....."]);
        let vertical = LifeGrid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]);

        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = LifeGrid::from_rows(&["....", ".##.", ".##.", "...."]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_next_is_fully_overwritten() {
        let grid = LifeGrid::new(3, 3);
        let mut next = LifeGrid::from_rows(&["###", "###", "###"]);
        next_generation(&grid, &mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_randomize_is_seed_deterministic() {
        let mut a = LifeGrid::new(70, 45);
        let mut b = LifeGrid::new(70, 45);
        a.randomize(&mut StdRng::seed_from_u64(7));
        b.randomize(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        // Uniform coin flips over 3150 cells land well inside these bounds
        let pop = a.population();
        assert!(pop > 1200 && pop < 1950, "population {pop}");
    }

    #[test]
    fn test_get_off_grid_is_dead() {
        let grid = LifeGrid::from_rows(&["##", "##"]);
        assert!(!grid.get(2, 0));
        assert!(!grid.get(0, 2));
    }

    #[test]
    fn test_rows_cover_grid() {
        let grid = LifeGrid::from_rows(&["#..", "..#"]);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[true, false, false][..], &[false, false, true][..]]);
    }
}
