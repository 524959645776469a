//! Column sorting with a two-phase ascending/descending exchange sort.
//!
//! Rows are reordered by repeatedly scanning adjacent pairs from the top and
//! swapping the first pair found out of order, then restarting the scan. When
//! a call finishes its ascending phase without a single swap, the table was
//! already ascending, so the direction flips and the rows are sorted
//! descending instead. A call that starts descending never flips back.
//!
//! Two cells compare numerically only when both parse as finite numbers;
//! every other pair compares as lowercase-folded text under the Unicode root
//! collation, so `Éfaté` sorts beside `Fiji` rather than after `Zambia`.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use super::{Row, Table};
use crate::error::TableError;

/// Order in which a column is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Returns a lowercase label for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Result of a single [`sort_rows`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    /// Number of adjacent swaps performed.
    pub swaps: usize,
    /// Direction the table ended up sorted in.
    pub direction: SortDirection,
}

/// Parses cell text as a finite number.
///
/// Surrounding whitespace is ignored. Empty text, partial numbers such as
/// `10km`, and values that overflow to infinity are not numeric.
#[must_use]
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Compares two cell texts.
///
/// Numeric ordering applies only when both sides are numeric; a single
/// numeric side falls back to case-insensitive collated text ordering.
#[must_use]
pub fn compare_cells(x: &str, y: &str) -> Ordering {
    CellComparer::default().compare(x, y)
}

/// Returns true when `x` placed directly above `y` violates `direction`.
#[must_use]
pub fn is_out_of_order(x: &str, y: &str, direction: SortDirection) -> bool {
    CellComparer::default().is_out_of_order(x, y, direction)
}

/// Comparison state for one sort: the root collator plus scratch buffers
/// that hold the lowercase-folded cell text.
///
/// Cells are re-parsed and re-folded on every comparison; only the buffer
/// capacity is reused.
struct CellComparer {
    collator: Option<CollatorBorrowed<'static>>,
    left: String,
    right: String,
}

impl Default for CellComparer {
    fn default() -> Self {
        let collator =
            Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
                .inspect_err(|error| {
                    tracing::warn!(%error, "root collator unavailable, comparing by code point");
                })
                .ok();
        Self {
            collator,
            left: String::new(),
            right: String::new(),
        }
    }
}

impl CellComparer {
    fn compare(&mut self, x: &str, y: &str) -> Ordering {
        if let (Some(a), Some(b)) = (parse_numeric(x), parse_numeric(y)) {
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        fold_into(&mut self.left, x);
        fold_into(&mut self.right, y);
        match &self.collator {
            Some(collator) => collator.compare(&self.left, &self.right),
            None => self.left.cmp(&self.right),
        }
    }

    fn is_out_of_order(&mut self, x: &str, y: &str, direction: SortDirection) -> bool {
        let ordering = self.compare(x, y);
        match direction {
            SortDirection::Ascending => ordering == Ordering::Greater,
            SortDirection::Descending => ordering == Ordering::Less,
        }
    }
}

fn fold_into(buffer: &mut String, text: &str) {
    buffer.clear();
    buffer.extend(text.chars().flat_map(char::to_lowercase));
}

/// Sorts the data rows of `table` by `column`.
///
/// `direction` is read on entry and updated on exit. Entering with
/// [`SortDirection::Ascending`] sorts ascending, unless the rows were already
/// ascending, in which case they are sorted descending and `direction`
/// becomes [`SortDirection::Descending`]. Entering with
/// [`SortDirection::Descending`] sorts descending and leaves it there.
///
/// Hidden rows are sorted along with visible ones. The header is untouched.
///
/// # Errors
///
/// Returns [`TableError::ColumnOutOfRange`] before touching any row when a
/// data row has no cell at `column`.
pub fn sort_rows(
    table: &mut Table,
    column: usize,
    direction: &mut SortDirection,
) -> Result<SortOutcome, TableError> {
    ensure_column(table, column)?;

    let mut comparer = CellComparer::default();
    let mut swaps = 0_usize;
    loop {
        match find_inversion(table.rows(), column, *direction, &mut comparer) {
            Some(index) => {
                table.rows_mut().swap(index, index + 1);
                swaps += 1;
            }
            None if swaps == 0 && *direction == SortDirection::Ascending => {
                *direction = SortDirection::Descending;
            }
            None => break,
        }
    }

    tracing::debug!(column, swaps, direction = ?*direction, "sorted table rows");
    Ok(SortOutcome {
        swaps,
        direction: *direction,
    })
}

/// Returns the index of the first adjacent pair out of order, if any.
fn find_inversion(
    rows: &[Row],
    column: usize,
    direction: SortDirection,
    comparer: &mut CellComparer,
) -> Option<usize> {
    rows.windows(2).position(|pair| {
        let [upper, lower] = pair else {
            return false;
        };
        match (upper.cell(column), lower.cell(column)) {
            (Some(x), Some(y)) => comparer.is_out_of_order(x.text(), y.text(), direction),
            _ => false,
        }
    })
}

fn ensure_column(table: &Table, column: usize) -> Result<(), TableError> {
    let narrowest = table
        .rows()
        .iter()
        .map(|row| row.cells().len())
        .filter(|width| *width <= column)
        .min();
    match narrowest {
        Some(width) => Err(TableError::ColumnOutOfRange { column, width }),
        None => Ok(()),
    }
}

/// Caller-owned sort state for one table.
///
/// Clicking the same column again continues from the stored direction;
/// clicking a different column starts over in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSession {
    column: Option<usize>,
    direction: SortDirection,
}

impl SortSession {
    /// Creates a session with no column sorted yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            column: None,
            direction: SortDirection::Ascending,
        }
    }

    /// Returns the column sorted most recently.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        self.column
    }

    /// Returns the direction the next same-column sort starts from.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Sorts `table` by `column`, carrying the direction over from the
    /// previous call when the column is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`] when a data row is narrower
    /// than `column`; the session is left unchanged.
    pub fn sort(&mut self, table: &mut Table, column: usize) -> Result<SortOutcome, TableError> {
        let mut direction = if self.column == Some(column) {
            self.direction
        } else {
            SortDirection::Ascending
        };
        let outcome = sort_rows(table, column, &mut direction)?;
        self.column = Some(column);
        self.direction = direction;
        Ok(outcome)
    }

    /// Forgets the sorted column so the next sort starts ascending.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}
