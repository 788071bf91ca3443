/// Lookup table expanded from a rule code.
///
/// Indexing into this array with a neighborhood pattern yields the next
/// state of the center cell.
pub type RuleTable = [bool; 8];

/// # Representation
/// An elementary rule is its Wolfram number, one byte. Bit `p` is the
/// output for the 3-cell neighborhood pattern `p`:
/// ```notrust
/// p = left << 2 | mid << 1 | right
///
/// rule 90:   0b0101_1010
///              ^       ^
///              |       output for 000
///              output for 111
/// ```
///
/// Bits are taken least-significant first, so e.g. rule 2 turns a cell on
/// exactly when only its right neighbor is on.
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    rule: u8,
}

impl RuleSet {
    pub const fn new(rule: u8) -> Self {
        Self { rule }
    }

    /// The Wolfram number of this rule.
    pub fn code(&self) -> u8 {
        self.rule
    }

    /// The next rule up, stopping at 255.
    pub fn up(&self) -> RuleSet {
        RuleSet::new(self.rule.saturating_add(1))
    }

    /// The next rule down, stopping at 0.
    pub fn down(&self) -> RuleSet {
        RuleSet::new(self.rule.saturating_sub(1))
    }

    /// Expand the rule code into its per-pattern lookup table.
    ///
    /// The array is built so that indexing into it with a neighborhood
    /// pattern returns the result of that pattern.
    pub fn compute_table(&self) -> RuleTable {
        let mut table = [false; 8];

        for (pattern, out) in table.iter_mut().enumerate() {
            *out = (self.rule >> pattern) & 1 == 1;
        }

        table
    }
}

/// Pack three neighbor states into a table index.
pub fn pattern(left: bool, mid: bool, right: bool) -> usize {
    (left as usize) << 2 | (mid as usize) << 1 | (right as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_round_trips_every_rule() {
        for rule in 0..=u8::MAX {
            let table = RuleSet::new(rule).compute_table();

            let mut reassembled = 0u8;
            for (p, &out) in table.iter().enumerate() {
                reassembled |= (out as u8) << p;
            }

            assert_eq!(reassembled, rule);
        }
    }

    #[test]
    fn rule_2_only_fires_on_lone_right_neighbor() {
        let table = RuleSet::new(2).compute_table();

        for (p, &out) in table.iter().enumerate() {
            assert_eq!(out, p == pattern(false, false, true), "pattern {p:03b}");
        }
    }

    #[test]
    fn rule_90_is_left_xor_right() {
        let table = RuleSet::new(90).compute_table();

        for left in [false, true] {
            for mid in [false, true] {
                for right in [false, true] {
                    assert_eq!(table[pattern(left, mid, right)], left ^ right);
                }
            }
        }
    }

    #[test]
    fn stepping_saturates_at_the_bounds() {
        assert_eq!(RuleSet::new(255).up().code(), 255);
        assert_eq!(RuleSet::new(0).down().code(), 0);
        assert_eq!(RuleSet::new(128).up().code(), 129);
        assert_eq!(RuleSet::new(128).down().code(), 127);
    }
}
