use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::{Align, Alignment, Cascade, EfmConfig, Error, Ncl, Process, Reset, cascade};

/// MASH 1-1-1 configuration
///
/// Fixed at construction. Use [`MashConfig::validate()`] or [`Mash::new()`]
/// to check consistency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Tree)]
pub struct MashConfig {
    /// Error feedback stages 1, 2, 3
    pub stages: [EfmConfig; 3],
    /// Carry retiming
    #[tree(with=miniconf::leaf)]
    pub alignment: Alignment,
    /// Register the noise cancellation output
    pub out_reg: bool,
}

impl Default for MashConfig {
    fn default() -> Self {
        Self::registered(24, 1)
    }
}

impl MashConfig {
    /// Fully pipelined reference configuration
    ///
    /// Registered residues, retimed carries, and registered output.
    pub fn registered(width: u8, gain: u32) -> Self {
        Self {
            stages: [EfmConfig {
                width,
                gain,
                out_reg: true,
            }; 3],
            alignment: Alignment::Retimed,
            out_reg: true,
        }
    }

    /// Configuration without any pipeline registers
    ///
    /// Combinational residues, direct carries, and combinational output.
    pub fn combinational(width: u8, gain: u32) -> Self {
        Self {
            stages: [EfmConfig {
                width,
                gain,
                out_reg: false,
            }; 3],
            alignment: Alignment::Direct,
            out_reg: false,
        }
    }

    /// Carry delays needed to align the stages
    ///
    /// A registered residue of stage `n` delays all carries of the later
    /// stages by one cycle. Stage 3's residue does not reach the carries.
    pub fn required_delays(&self) -> [usize; 3] {
        let [r1, r2, _] = self.stages.map(|s| s.out_reg as usize);
        [r1 + r2, r2, 0]
    }

    /// Check stages, widths, and alignment
    pub fn validate(&self) -> Result<(), Error> {
        cascade::validate_stages(&self.stages)?;
        let required = self.required_delays();
        let provided = self.alignment.delays();
        if required != provided {
            return Err(Error::Misaligned { required, provided });
        }
        Ok(())
    }

    /// Cycles from an input sample to the first output code that contains
    /// its stage 1 carry
    pub fn latency(&self) -> usize {
        1 + self.alignment.delays()[0] + self.out_reg as usize
    }

    /// Predicted long-run mean output code for a constant input `x`
    ///
    /// The configuration is validated first.
    pub fn dc_level(&self, x: u32) -> Result<f64, Error> {
        self.validate()?;
        let s = &self.stages[0];
        Ok((x as u64 & s.mask()) as f64 / s.modulus() as f64)
    }
}

/// MASH 1-1-1 delta-sigma modulator
///
/// * Three error feedback stages with carry feedback gain ([`Cascade`])
/// * Carry retiming ([`Align`])
/// * Noise cancellation logic ([`Ncl`])
/// * Output codes in `-3..=4`.
/// * Given constant input `x`, the average output is `x/((1 << W) - gain)`.
/// * The noise goes up as 60 dB/decade.
///
/// ```
/// # use mash_dsm::{Mash, MashConfig, Process};
/// let c = MashConfig::registered(20, 1);
/// let mut d = Mash::new(c.clone()).unwrap();
/// let x = 0x4_5678;
/// let n = 1 << 16;
/// let y = (0..n).map(|_| d.process(x) as f64).sum::<f64>() / n as f64;
/// let m = c.dc_level(x).unwrap();
/// assert!((y - m).abs() < 16.0 / n as f64, "{y} != {m}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mash {
    config: MashConfig,
    cascade: Cascade,
    align: Align,
    ncl: Ncl,
    residue: u32,
}

impl Mash {
    /// Create a zero-initialized modulator
    pub fn new(config: MashConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            cascade: Cascade::new(config.stages)?,
            align: Align::new(config.alignment),
            ncl: Ncl::new(config.out_reg),
            residue: 0,
            config,
        })
    }

    /// Configuration
    pub fn config(&self) -> &MashConfig {
        &self.config
    }

    /// Residue of the last stage in the most recent cycle
    pub fn residue(&self) -> u32 {
        self.residue
    }

    /// Error feedback cascade
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    /// Carry alignment network
    pub fn align(&self) -> &Align {
        &self.align
    }

    /// Noise cancellation logic
    pub fn ncl(&self) -> &Ncl {
        &self.ncl
    }
}

impl Process<u32, i8> for Mash {
    /// Clock one cycle.
    ///
    /// # Arguments
    /// * `x`: Input word, `W` bits
    ///
    /// # Returns
    /// Output code
    fn process(&mut self, x: u32) -> i8 {
        let (y, e) = self.cascade.process(x);
        self.residue = e;
        self.ncl.process(self.align.process(y))
    }
}

impl Reset for Mash {
    fn reset(&mut self) {
        self.cascade.reset();
        self.align.reset();
        self.ncl.reset();
        self.residue = 0;
    }
}
