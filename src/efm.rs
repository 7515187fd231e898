use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::{Dff, Error, Process, Reset};

/// Error feedback modulator stage configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Tree)]
pub struct EfmConfig {
    /// Word width `W`, `1..=32`
    ///
    /// The accumulator register has `W + 1` bits.
    pub width: u8,
    /// Carry feedback gain
    ///
    /// The previous carry is added to the accumulator with this weight.
    /// Must be below `1 << width`. `0` is the plain accumulator.
    pub gain: u32,
    /// Take the residue from the accumulator register instead of the sum
    ///
    /// This adds one cycle of latency to the residue path.
    pub out_reg: bool,
}

impl Default for EfmConfig {
    fn default() -> Self {
        Self {
            width: 24,
            gain: 1,
            out_reg: true,
        }
    }
}

impl EfmConfig {
    /// Largest supported word width
    pub const MAX_WIDTH: u8 = 32;

    /// Check width and gain
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=Self::MAX_WIDTH).contains(&self.width) {
            return Err(Error::Width(self.width));
        }
        if self.gain as u64 >= 1 << self.width {
            return Err(Error::Gain {
                gain: self.gain,
                width: self.width,
            });
        }
        Ok(())
    }

    /// `W` bit word mask
    ///
    /// Only meaningful for a validated configuration.
    pub(crate) fn mask(&self) -> u64 {
        (1 << self.width) - 1
    }

    /// Effective modulus `(1 << W) - gain`
    ///
    /// Given constant input `x`, the average carry is `x/modulus`.
    /// Only meaningful for a validated configuration.
    pub(crate) fn modulus(&self) -> u64 {
        (1 << self.width) - self.gain as u64
    }
}

/// First order error feedback modulator
///
/// Accumulates the input word, the low `W` bits of the register, and the
/// previous carry scaled by the feedback gain, modulo `1 << W + 1`.
///
/// * The carry output is bit `W` of the register, i.e. the carry of the
///   previous cycle's sum.
/// * The residue is the low `W` bits of the current sum, or of the register
///   if `out_reg` is set.
/// * Input bits above `W` are discarded.
///
/// ```
/// # use mash_dsm::{Efm, EfmConfig, Process};
/// let mut e = Efm::new(EfmConfig { width: 4, gain: 1, out_reg: false }).unwrap();
/// assert_eq!(e.process(9), (false, 9));
/// assert_eq!(e.process(9), (false, 2));
/// assert_eq!(e.process(9), (true, 12));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Efm {
    config: EfmConfig,
    acc: Dff<u64>,
}

impl Efm {
    /// Create a zero-initialized stage
    pub fn new(config: EfmConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            acc: Dff::default(),
        })
    }

    /// Stage configuration
    pub fn config(&self) -> &EfmConfig {
        &self.config
    }

    /// Accumulator register (`W + 1` bits)
    pub fn accumulator(&self) -> u64 {
        self.acc.q()
    }

    /// Current carry output
    pub fn carry(&self) -> bool {
        self.acc.q() >> self.config.width != 0
    }
}

impl Process<u32, (bool, u32)> for Efm {
    /// Clock one cycle.
    ///
    /// # Returns
    /// Carry and residue
    fn process(&mut self, x: u32) -> (bool, u32) {
        let mask = self.config.mask();
        let a = self.acc.q();
        let carry = self.carry();
        // x, a and gain are all below 1 << 32: no u64 overflow
        let sum = ((x as u64 & mask) + (a & mask) + self.config.gain as u64 * carry as u64)
            & ((mask << 1) | 1);
        let e = (if self.config.out_reg { a } else { sum }) & mask;
        self.acc.process(sum);
        (carry, e as u32)
    }
}

impl Reset for Efm {
    fn reset(&mut self) {
        self.acc.reset();
    }
}
