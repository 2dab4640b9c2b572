//! Level text parsing and validation.
//!
//! A level is plain text, one row per line, using the symbols
//! `x` (wall), `v` (vortex), `s` (star), `f` (finish), `1` (teleport
//! entry), `2` (teleport exit) and space (empty). There is no size header;
//! dimensions are inferred, and rows may have different widths.
//!
//! Level files are authored top-down but world space grows bottom-up, so
//! [`LevelGrid::parse`] reverses the line order: row index 0 is the lowest
//! row of the world. Trailing blank lines are dropped first so a final
//! newline cannot shift the whole level up by one row.
//!
//! Validation rejects unknown symbols and broken teleport pairings before
//! any entity is spawned. Both indicate a corrupt asset and are fatal for
//! the caller, not recoverable runtime conditions.

/// Symbols a level file may contain.
const KNOWN_SYMBOLS: &[char] = &['x', 'v', 's', 'f', '1', '2', ' '];

/// Parsed level rows, bottom row first.
#[derive(Debug, Clone)]
pub struct LevelGrid {
    rows: Vec<Vec<char>>,
}

impl LevelGrid {
    /// Split `text` on newlines, drop trailing blank lines, and reverse
    /// the order so row 0 is the bottom of the world.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let rows = lines
            .into_iter()
            .rev()
            .map(|line| line.chars().collect())
            .collect();
        LevelGrid { rows }
    }

    /// Rows in world order (index 0 = bottom).
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Iterate `(row, column, symbol)` over every cell, world order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, symbols)| {
            symbols
                .iter()
                .enumerate()
                .map(move |(column, &symbol)| (row, column, symbol))
        })
    }

    /// Check every symbol is known and teleport nodes pair up.
    ///
    /// A level must contain either no teleport nodes or exactly one entry
    /// and one exit; a contact-time lookup against a missing counterpart
    /// must be impossible by construction.
    pub fn validate(&self) -> Result<(), String> {
        let mut entries = 0usize;
        let mut exits = 0usize;
        for (row, column, symbol) in self.cells() {
            if !KNOWN_SYMBOLS.contains(&symbol) {
                return Err(format!(
                    "unknown symbol '{symbol}' at row {row}, column {column}"
                ));
            }
            match symbol {
                '1' => entries += 1,
                '2' => exits += 1,
                _ => {}
            }
        }
        match (entries, exits) {
            (0, 0) | (1, 1) => Ok(()),
            _ => Err(format!(
                "teleport nodes must pair up: found {entries} entries and {exits} exits"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== PARSE TESTS ====================

    #[test]
    fn test_row_zero_is_last_line() {
        let grid = LevelGrid::parse("xs\n  \nvf");
        assert_eq!(grid.rows()[0], vec!['v', 'f']);
        assert_eq!(grid.rows()[2], vec!['x', 's']);
    }

    #[test]
    fn test_trailing_newline_does_not_shift_rows() {
        let grid = LevelGrid::parse("xs\nvf\n");
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.rows()[0], vec!['v', 'f']);
    }

    #[test]
    fn test_rows_may_vary_in_width() {
        let grid = LevelGrid::parse("xxxx\nx\nxx");
        assert_eq!(grid.rows()[0].len(), 2);
        assert_eq!(grid.rows()[1].len(), 1);
        assert_eq!(grid.rows()[2].len(), 4);
    }

    #[test]
    fn test_corner_walls_scenario() {
        // "x x" / "   " / "x x": four walls at grid cells
        // (0,0), (0,2), (2,0), (2,2) after row reversal.
        let grid = LevelGrid::parse("x x\n   \nx x");
        let walls: Vec<(usize, usize)> = grid
            .cells()
            .filter(|&(_, _, s)| s == 'x')
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(walls, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_cells_cover_every_symbol() {
        let grid = LevelGrid::parse("sv\n1f");
        let symbols: Vec<char> = grid.cells().map(|(_, _, s)| s).collect();
        assert_eq!(symbols, vec!['1', 'f', 's', 'v']);
    }

    // ==================== VALIDATE TESTS ====================

    #[test]
    fn test_validate_accepts_all_known_symbols() {
        let grid = LevelGrid::parse("xvsf\n1 2 ");
        // unpaired teleports would fail, so this uses one of each
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_symbol() {
        let grid = LevelGrid::parse("x?x");
        let err = grid.validate().unwrap_err();
        assert!(err.contains('?'), "error should name the symbol: {err}");
    }

    #[test]
    fn test_validate_rejects_lone_teleport_entry() {
        let grid = LevelGrid::parse("x1x");
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_lone_teleport_exit() {
        let grid = LevelGrid::parse("x2x");
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_double_entries() {
        let grid = LevelGrid::parse("1 1\n2 2");
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_no_teleports() {
        let grid = LevelGrid::parse("xsx\nvfx");
        assert!(grid.validate().is_ok());
    }
}
