/// Any channel strictly above this value counts as lit. A cell with all
/// three channels at or below it reads as dead for rule lookups.
pub const ACTIVE_THRESHOLD: u8 = 85;

/// A single automaton cell, stored as an RGB triple.
///
/// Binary rules only ever produce [`Rgb::BLACK`] and [`Rgb::WHITE`];
/// colorized rules use the full channel range. Either way the rule lookup
/// sees cells through [`Rgb::is_active`], so both modes share one stepper.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether this cell counts as alive for neighborhood lookups.
    pub fn is_active(&self) -> bool {
        self.r > ACTIVE_THRESHOLD || self.g > ACTIVE_THRESHOLD || self.b > ACTIVE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_inactive_white_is_active() {
        assert!(!Rgb::BLACK.is_active());
        assert!(Rgb::WHITE.is_active());
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!Rgb::new(ACTIVE_THRESHOLD, ACTIVE_THRESHOLD, ACTIVE_THRESHOLD).is_active());
        assert!(Rgb::new(ACTIVE_THRESHOLD + 1, 0, 0).is_active());
        assert!(Rgb::new(0, ACTIVE_THRESHOLD + 1, 0).is_active());
        assert!(Rgb::new(0, 0, ACTIVE_THRESHOLD + 1).is_active());
    }
}
