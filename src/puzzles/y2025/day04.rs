use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct PrintingDepartment;

impl Solution for PrintingDepartment {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 4)
    }

    fn title(&self) -> &'static str {
        "Printing Department"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let mut grid = Grid::parse(input)?;

        let accessible = grid.accessible();
        let removed = grid.remove_all_accessible();

        Ok(Answers::new()
            .part("The number of accessible paper rolls is", accessible)
            .part("The total number of removed paper rolls is", removed))
    }
}

/// Presence map of paper rolls, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Grid {
    const ROLL: char = '@';
    const CROWD: usize = 4;

    fn parse(input: &str) -> Result<Self, ParseError> {
        puzzle::non_empty(input)?;

        let rows: Vec<Vec<bool>> = puzzle::lines(input)
            .map(|(_, text)| text.chars().map(|c| c == Self::ROLL).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or_default();

        Ok(Self { rows, width })
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn is_roll(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    fn neighbors(&self, row: usize, col: usize) -> usize {
        let rows = row.saturating_sub(1)..=(row + 1).min(self.height().saturating_sub(1));

        rows.flat_map(|r| {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.width.saturating_sub(1));
            cols.map(move |c| (r, c))
        })
        .filter(|&(r, c)| (r, c) != (row, col) && self.is_roll(r, c))
        .count()
    }

    fn is_accessible(&self, row: usize, col: usize) -> bool {
        self.is_roll(row, col) && self.neighbors(row, col) < Self::CROWD
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    fn accessible(&self) -> usize {
        self.positions()
            .filter(|&(row, col)| self.is_accessible(row, col))
            .count()
    }

    /// One row-major sweep; rolls are removed as soon as they are found accessible.
    fn sweep(&mut self) -> usize {
        let mut removed = 0;

        for (row, col) in self.positions().collect::<Vec<_>>() {
            if self.is_accessible(row, col) {
                self.rows[row][col] = false;
                removed += 1;
            }
        }

        removed
    }

    fn remove_all_accessible(&mut self) -> usize {
        let mut total = 0;

        loop {
            let removed = self.sweep();
            tracing::trace!(removed, "finished sweep");

            if removed == 0 {
                return total;
            }

            total += removed;
        }
    }
}
