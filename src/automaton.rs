use crate::cell::ACTIVE_THRESHOLD;
use crate::cell::Rgb;
use crate::rule_set::RuleTable;
use crate::rule_set::pattern;

/// One generation of cells.
pub type Row = Vec<Rgb>;

/// How a rule's output bit turns into a cell.
///
/// `Binary` renders the table output directly as black/white. `Colorized`
/// treats it as an "active" flag and blends the neighborhood's channels,
/// which shades each rule's pattern instead of stamping it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Binary,
    Colorized,
}

/// The starting row: all dead except a single live cell in the center.
pub fn seed_row(width: usize) -> Row {
    let mut row = vec![Rgb::BLACK; width];
    row[width / 2] = Rgb::WHITE;

    row
}

/// Compute the next generation of `row`.
///
/// Neighbor lookup is toroidal: the first and last cells are adjacent, and
/// a width-1 row is its own left and right neighbor. Pure function of its
/// inputs; the input row is left untouched.
pub fn next_row(row: &[Rgb], table: &RuleTable, mode: Mode) -> Row {
    let w = row.len();

    (0..w)
        .map(|i| {
            let left = row[(i + w - 1) % w];
            let mid = row[i];
            let right = row[(i + 1) % w];

            let out = table[pattern(left.is_active(), mid.is_active(), right.is_active())];

            match mode {
                Mode::Binary => {
                    if out {
                        Rgb::WHITE
                    } else {
                        Rgb::BLACK
                    }
                }
                Mode::Colorized => {
                    if out {
                        lit(left, mid, right)
                    } else {
                        shade(left, mid, right)
                    }
                }
            }
        })
        .collect()
}

/// Channel lift for active colorized cells. One above the activity
/// threshold, so a lit cell always reads back as active.
const LIFT: u8 = ACTIVE_THRESHOLD + 1;

// Each output channel tracks one neighbor: red follows the left cell,
// green the center, blue the right. Damping to a third keeps the doubled
// value within a byte; the lift saturates instead of wrapping.
fn lit(left: Rgb, mid: Rgb, right: Rgb) -> Rgb {
    Rgb::new(
        LIFT.saturating_add(2 * (left.r / 3)),
        LIFT.saturating_add(2 * (mid.g / 3)),
        LIFT.saturating_add(2 * (right.b / 3)),
    )
}

fn shade(left: Rgb, mid: Rgb, right: Rgb) -> Rgb {
    Rgb::new(left.r / 3, mid.g / 3, right.b / 3)
}
