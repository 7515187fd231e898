use crate::{Dff, Process, Reset};

/// Wrap to a `bits` wide two's complement value
fn wrap(x: i8, bits: u32) -> i8 {
    (x << (8 - bits)) >> (8 - bits)
}

/// Noise cancellation logic
///
/// Recombines the aligned carries `y1, y2, y3` of a MASH 1-1-1 into
/// `y1 + (1 - z⁻¹) y2 + (1 - z⁻¹)² y3`:
///
/// * `c1 = y2 + y3 - y3[-1]` (3 bit),
/// * `c2 = y1 + c1 - c1[-1]` (4 bit),
/// * output `c2`, or `c2[-1]` with `out_reg`.
///
/// The output range is `-3..=4`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ncl {
    out_reg: bool,
    c0: Dff<bool>,
    c1: Dff<i8>,
    c2: Dff<i8>,
}

impl Ncl {
    /// Width of the first difference register
    pub const C1_BITS: u32 = 3;
    /// Width of the second difference and output register
    pub const C2_BITS: u32 = 4;

    /// Create a zero-initialized network
    pub fn new(out_reg: bool) -> Self {
        Self {
            out_reg,
            ..Default::default()
        }
    }

    /// Whether the output is registered
    pub fn out_reg(&self) -> bool {
        self.out_reg
    }

    /// Register contents `(c0, c1, c2)`
    pub fn registers(&self) -> (bool, i8, i8) {
        (self.c0.q(), self.c1.q(), self.c2.q())
    }
}

impl Process<[bool; 3], i8> for Ncl {
    fn process(&mut self, y: [bool; 3]) -> i8 {
        let [y1, y2, y3] = y.map(i8::from);
        let c1 = wrap(y2 + y3 - i8::from(self.c0.q()), Self::C1_BITS);
        let c2 = wrap(y1 + c1 - self.c1.q(), Self::C2_BITS);
        let y = if self.out_reg { self.c2.q() } else { c2 };
        self.c0.process(y3 != 0);
        self.c1.process(c1);
        self.c2.process(c2);
        y
    }
}

impl Reset for Ncl {
    fn reset(&mut self) {
        self.c0.reset();
        self.c1.reset();
        self.c2.reset();
    }
}
