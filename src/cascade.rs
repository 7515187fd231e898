use crate::{Efm, EfmConfig, Error, Process, Reset};

/// Check the stage configurations and that they agree on the word width.
pub(crate) fn validate_stages(stages: &[EfmConfig; 3]) -> Result<u8, Error> {
    for s in stages.iter() {
        s.validate()?;
    }
    let widths = stages.map(|s| s.width);
    if widths.iter().any(|w| *w != widths[0]) {
        return Err(Error::WidthMismatch(widths));
    }
    Ok(widths[0])
}

/// Three cascaded error feedback modulators
///
/// The residue of each stage is the input word of the next.
/// Only the first stage receives the external input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cascade {
    stages: [Efm; 3],
}

impl Cascade {
    /// Create a zero-initialized cascade
    pub fn new(stages: [EfmConfig; 3]) -> Result<Self, Error> {
        validate_stages(&stages)?;
        let [s0, s1, s2] = stages;
        Ok(Self {
            stages: [Efm::new(s0)?, Efm::new(s1)?, Efm::new(s2)?],
        })
    }

    /// The stages
    pub fn stages(&self) -> &[Efm; 3] {
        &self.stages
    }
}

impl Process<u32, ([bool; 3], u32)> for Cascade {
    /// Clock one cycle.
    ///
    /// # Returns
    /// Stage carries and the residue of the last stage
    fn process(&mut self, x: u32) -> ([bool; 3], u32) {
        let mut y = [false; 3];
        let e = self
            .stages
            .iter_mut()
            .zip(y.iter_mut())
            .fold(x, |x, (s, y)| {
                let (c, e) = s.process(x);
                *y = c;
                e
            });
        (y, e)
    }
}

impl Reset for Cascade {
    fn reset(&mut self) {
        self.stages.reset();
    }
}
