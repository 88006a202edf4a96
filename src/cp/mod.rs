//! Constraint-based sheet assignment.
//!
//! Places every week's matchups onto sheets so that no team plays on any
//! one sheet more than `cap` times over the whole schedule.
//!
//! # Algorithm
//!
//! Depth-first backtracking over a `(week, sheet)` grid, filled in
//! row-major order. For each cell, candidates are that week's matchups in
//! source order, skipping those already placed in the week. A candidate is
//! placed, the usage statistics of the whole partial grid are recomputed,
//! and the placement is rejected as soon as any team exceeds the cap.
//! Accepted placements recurse into the next cell; a rejected or
//! dead-ended candidate is unplaced before the next one is tried.
//!
//! When every candidate for a cell fails, the cell is marked with the
//! `(BYE, BYE)` placeholder and the search returns to the previous cell.
//! A placeholder is never revisited by the cell itself: it is only
//! replaced when an earlier cell's next candidate leads the search back
//! through it. If the first cell exhausts its candidates the search ends
//! and every unresolved cell is reported as a placeholder.
//!
//! # Complexity
//! Worst case `O((W·S)!)`; the per-placement cap check prunes almost all
//! of it for up to 13 teams.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6.3 (Backtracking Search for CSPs)

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DEFAULT_SHEET_CAP;
use crate::models::{Matchup, Schedule, Week};
use crate::scheduler::UsageStats;

/// Index of a grid cell: `week * sheets + sheet`.
pub type CellIndex = usize;

/// Partially filled `(week, sheet)` assignment grid.
///
/// Cells are stored in a flat arena indexed by [`CellIndex`]. An empty
/// cell contributes nothing to usage statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid {
    weeks: usize,
    sheets: usize,
    cells: Vec<Option<Matchup>>,
}

impl SheetGrid {
    /// Creates an empty grid.
    pub fn new(weeks: usize, sheets: usize) -> Self {
        Self {
            weeks,
            sheets,
            cells: vec![None; weeks * sheets],
        }
    }

    /// Number of weeks (rows).
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    /// Number of sheets (columns).
    pub fn sheets(&self) -> usize {
        self.sheets
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell index for `(week, sheet)`.
    #[inline]
    pub fn index(&self, week: usize, sheet: usize) -> CellIndex {
        week * self.sheets + sheet
    }

    /// `(week, sheet)` for a cell index.
    #[inline]
    pub fn position(&self, cell: CellIndex) -> (usize, usize) {
        (cell / self.sheets, cell % self.sheets)
    }

    /// Contents of a cell.
    pub fn get(&self, cell: CellIndex) -> Option<&Matchup> {
        self.cells.get(cell).and_then(Option::as_ref)
    }

    /// Puts `matchup` in `cell`, replacing whatever was there.
    pub fn place(&mut self, cell: CellIndex, matchup: Matchup) {
        self.cells[cell] = Some(matchup);
    }

    /// Empties `cell`.
    pub fn unplace(&mut self, cell: CellIndex) {
        self.cells[cell] = None;
    }

    /// Marks `cell` as unresolved.
    pub fn mark_unresolved(&mut self, cell: CellIndex) {
        self.cells[cell] = Some(Matchup::placeholder());
    }

    /// Whether `matchup` sits in any cell of `week`.
    pub fn week_contains(&self, week: usize, matchup: &Matchup) -> bool {
        let start = week * self.sheets;
        self.cells[start..start + self.sheets]
            .iter()
            .any(|c| c.as_ref() == Some(matchup))
    }

    /// Filled cells as `(sheet, matchup)`.
    pub fn filled(&self) -> impl Iterator<Item = (usize, &Matchup)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|m| (i % self.sheets, m)))
    }

    /// Usage statistics over the filled cells.
    pub fn stats(&self, team_count: usize) -> UsageStats {
        UsageStats::tally(team_count, self.sheets, self.filled())
    }

    /// Number of empty or placeholder cells.
    pub fn unresolved_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.map_or(true, |m| m.is_placeholder()))
            .count()
    }

    /// Converts to a schedule; empty cells become placeholders.
    pub fn into_schedule(self) -> Schedule {
        let sheets = self.sheets.max(1);
        Schedule::from_weeks(
            self.cells
                .chunks(sheets)
                .map(|row| {
                    Week::new(
                        row.iter()
                            .map(|c| c.unwrap_or_else(Matchup::placeholder))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Result of a sheet assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetAssignment {
    /// The assigned schedule. Position within a week is the sheet.
    pub schedule: Schedule,
    /// Whether every cell received a real matchup within the cap.
    pub solved: bool,
    /// Cells left as `(BYE, BYE)` placeholders.
    pub unresolved_cells: usize,
    /// Times the search gave up on a cell and marked it unresolved.
    pub fallbacks: usize,
    /// Tentative placements tried.
    pub nodes_explored: usize,
}

impl SheetAssignment {
    /// Whether the result contains unresolved cells.
    pub fn is_degraded(&self) -> bool {
        self.unresolved_cells > 0
    }
}

/// Backtracking sheet assignment solver.
///
/// # Example
///
/// ```
/// use u_roundrobin::cp::SheetAssignmentSolver;
/// use u_roundrobin::rotation::{balance_roles, CircleRotation};
///
/// let mut schedule = CircleRotation::new(6).generate();
/// balance_roles(&mut schedule, 6);
///
/// let result = SheetAssignmentSolver::new().solve(&schedule);
/// assert!(result.solved);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetAssignmentSolver {
    cap: u32,
}

impl Default for SheetAssignmentSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable state of one solver run.
struct Search<'a> {
    source: &'a [Week],
    grid: SheetGrid,
    team_count: usize,
    cap: u32,
    fallbacks: usize,
    nodes: usize,
}

impl SheetAssignmentSolver {
    /// Creates a solver with the default cap of 2.
    pub fn new() -> Self {
        Self {
            cap: DEFAULT_SHEET_CAP,
        }
    }

    /// Sets the per-team per-sheet cap.
    pub fn with_cap(mut self, cap: u32) -> Self {
        self.cap = cap;
        self
    }

    /// The configured cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Assigns sheets for `schedule`.
    ///
    /// Matchup order inside each source week is the candidate order.
    /// The returned schedule keeps the week order; every week is padded
    /// to the widest week's sheet count.
    pub fn solve(&self, schedule: &Schedule) -> SheetAssignment {
        let sheets = schedule.sheet_count();
        let mut search = Search {
            source: &schedule.weeks,
            grid: SheetGrid::new(schedule.week_count(), sheets),
            team_count: schedule.max_team_number(),
            cap: self.cap,
            fallbacks: 0,
            nodes: 0,
        };

        let solved = search.assign(0);
        let unresolved_cells = search.grid.unresolved_count();

        if solved {
            debug!(
                nodes = search.nodes,
                fallbacks = search.fallbacks,
                "sheet assignment solved"
            );
        } else {
            warn!(
                nodes = search.nodes,
                unresolved = unresolved_cells,
                "sheet assignment exhausted; leaving unresolved cells as byes"
            );
        }

        SheetAssignment {
            schedule: search.grid.into_schedule(),
            solved,
            unresolved_cells,
            fallbacks: search.fallbacks,
            nodes_explored: search.nodes,
        }
    }
}

impl Search<'_> {
    /// Fills `cell` and everything after it. Returns `true` on success.
    fn assign(&mut self, cell: CellIndex) -> bool {
        if cell == self.grid.len() {
            return true;
        }

        let (week, sheet) = self.grid.position(cell);
        let source = self.source;
        let candidates = source[week].matchups.as_slice();
        // narrower weeks leave their trailing cells empty
        if sheet >= candidates.len() {
            return self.assign(cell + 1);
        }

        for candidate in candidates {
            if self.grid.week_contains(week, candidate) {
                continue;
            }

            self.nodes += 1;
            self.grid.place(cell, *candidate);

            if self.grid.stats(self.team_count).within_sheet_cap(self.cap)
                && self.assign(cell + 1)
            {
                return true;
            }

            self.grid.unplace(cell);
        }

        self.fallbacks += 1;
        self.grid.mark_unresolved(cell);
        false
    }
}
