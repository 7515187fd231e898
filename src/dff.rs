use crate::{Process, Reset};

/// Delay register with synchronous reset
///
/// * The output is the input of the previous cycle.
/// * A reset edge loads the configured reset value.
/// * There is no combinational path from input to output.
///
/// `[Dff<T>; N]` is an `N` cycle delay line.
///
/// ```
/// # use mash_dsm::{Dff, Process, Reset};
/// let mut d = Dff::new(7u8);
/// assert_eq!(d.process(1), 7);
/// assert_eq!(d.process(2), 1);
/// d.reset();
/// assert_eq!(d.q(), 7);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dff<T> {
    q: T,
    init: T,
}

impl<T: Copy + Default> Default for Dff<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy> Dff<T> {
    /// Create a register holding (and resetting to) `init`
    pub const fn new(init: T) -> Self {
        Self { q: init, init }
    }

    /// Current output
    pub fn q(&self) -> T {
        self.q
    }

    /// Reset value
    pub fn init(&self) -> T {
        self.init
    }
}

impl<T: Copy> Process<T> for Dff<T> {
    fn process(&mut self, d: T) -> T {
        core::mem::replace(&mut self.q, d)
    }
}

impl<T: Copy> Reset for Dff<T> {
    fn reset(&mut self) {
        self.q = self.init;
    }
}
