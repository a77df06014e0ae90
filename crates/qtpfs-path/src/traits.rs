use crate::path::SearchTime;

/// Registry of movement profiles (move definitions). A path's type is an
/// index into it.
pub trait MoveDefRegistry {
    /// Number of valid profile indices; valid types are `0..num_move_defs()`.
    fn num_move_defs(&self) -> usize;
}

/// Source of search timestamps.
pub trait Clock {
    fn now(&self) -> SearchTime;
}

impl<F: Fn() -> SearchTime> Clock for F {
    fn now(&self) -> SearchTime {
        self()
    }
}
