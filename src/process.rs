//! Clocked processing: one call is one clock cycle.

/// Synchronous clocked block
///
/// Single input, single output, one cycle per call.
///
/// An implementation computes its outputs from the register state it holds
/// at the start of the cycle and only then commits the new register values.
/// Chaining `process()` calls of different blocks within one cycle therefore
/// never exposes a register value of the current edge to another block.
///
/// Blocks can be chained in homogeneous `[P; N]` arrays where the output of
/// one block is the input of the next in the same cycle.
pub trait Process<X: Copy, Y = X> {
    /// Clock one cycle with input `x` and obtain the output of that cycle
    fn process(&mut self, x: X) -> Y;

    /// Clock a block of cycles
    ///
    /// Input and output must be of the same size.
    fn block(&mut self, x: &[X], y: &mut [Y]) {
        debug_assert_eq!(x.len(), y.len());
        for (x, y) in x.iter().zip(y) {
            *y = self.process(*x);
        }
    }
}

/// Synchronous reset
pub trait Reset {
    /// Clock one edge with reset asserted.
    ///
    /// Every register takes its reset value. Holding reset for several cycles
    /// is calling this repeatedly.
    fn reset(&mut self);
}

//////////// BLANKET ////////////

impl<X: Copy, Y, T: Process<X, Y>> Process<X, Y> for &mut T {
    fn process(&mut self, x: X) -> Y {
        (*self).process(x)
    }

    fn block(&mut self, x: &[X], y: &mut [Y]) {
        (*self).block(x, y)
    }
}

impl<T: Reset> Reset for &mut T {
    fn reset(&mut self) {
        (*self).reset()
    }
}

//////////// CHAIN ////////////

/// Chain of blocks of the same type
///
/// `X->X->X...`, an empty array is the identity.
impl<X: Copy, P: Process<X>, const N: usize> Process<X> for [P; N] {
    fn process(&mut self, x: X) -> X {
        self.iter_mut().fold(x, |x, p| p.process(x))
    }
}

impl<P: Reset, const N: usize> Reset for [P; N] {
    fn reset(&mut self) {
        for p in self.iter_mut() {
            p.reset();
        }
    }
}
