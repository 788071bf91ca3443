use tracing::info;

use crate::automaton::Mode;
use crate::automaton::Row;
use crate::automaton::next_row;
use crate::automaton::seed_row;
use crate::cell::Rgb;
use crate::config::Config;
use crate::config::ConfigError;
use crate::rule_set::RuleSet;
use crate::rule_set::RuleTable;
use crate::scroll::ScrollBuffer;

/// The live simulation state, threaded by reference through the loop.
///
/// Owns the current generation, the expanded rule table, and the trailing
/// history window. Front-ends only read `history()` and call the mutators;
/// the history is never touched except through the scroll buffer's push.
pub struct World {
    mode: Mode,

    rule_set: RuleSet,

    /// Expanded from `rule_set`, rebuilt on every rule change.
    table: RuleTable,

    /// The newest generation.
    row: Row,

    history: ScrollBuffer,
}

impl World {
    /// Build a world from startup parameters.
    ///
    /// The history starts already holding the seed row, so the first frame
    /// shows it without stepping.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let rule_set = RuleSet::new(config.rule);
        let row = seed_row(config.width);

        let mut history = ScrollBuffer::new(config.height);
        history.push(row.clone());

        Ok(Self {
            mode: config.mode,
            rule_set,
            table: rule_set.compute_table(),
            row,
            history,
        })
    }

    pub fn width(&self) -> usize {
        self.row.len()
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn row(&self) -> &[Rgb] {
        &self.row
    }

    pub fn history(&self) -> &ScrollBuffer {
        &self.history
    }

    /// Advance one generation and scroll it into the history.
    pub fn tick(&mut self) {
        self.row = next_row(&self.row, &self.table, self.mode);
        self.history.push(self.row.clone());
    }

    pub fn rule_up(&mut self) {
        self.set_rule_set(self.rule_set.up());
    }

    pub fn rule_down(&mut self) {
        self.set_rule_set(self.rule_set.down());
    }

    fn set_rule_set(&mut self, rule_set: RuleSet) {
        self.rule_set = rule_set;
        self.table = rule_set.compute_table();

        info!(rule = rule_set.code(), "rule changed");
    }

    /// Reseed the row and restart the scroll from a one-row history.
    pub fn reset(&mut self) {
        self.row = seed_row(self.width());
        self.history.clear();
        self.history.push(self.row.clone());

        info!("reset");
    }
}
