/// Control events delivered by a front-end and consumed by the loop.
///
/// This is the whole input surface: rule stepping, reseeding, and quitting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// Step to the next rule up, stopping at 255.
    RuleUp,

    /// Step to the next rule down, stopping at 0.
    RuleDown,

    /// Reseed the row and restart the scroll.
    Reset,

    /// Exit the application.
    Exit,
}
