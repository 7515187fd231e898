use serde::{Deserialize, Serialize};

use crate::{Dff, Process, Reset};

/// Carry retiming between the cascade and the noise cancellation logic
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Alignment {
    /// Carries are passed through without delay
    #[default]
    Direct,
    /// Carry 1 is delayed by two cycles, carry 2 by one
    ///
    /// Matches stages with registered residue outputs.
    Retimed,
}

impl Alignment {
    /// Delays of carries 1, 2, 3 in cycles
    pub const fn delays(self) -> [usize; 3] {
        match self {
            Self::Direct => [0, 0, 0],
            Self::Retimed => [2, 1, 0],
        }
    }
}

/// Carry alignment network
///
/// Delays the stage carries such that all three carries presented to the
/// noise cancellation logic stem from the same input sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Align {
    alignment: Alignment,
    y1: [Dff<bool>; 2],
    y2: Dff<bool>,
}

impl Align {
    /// Create a zero-initialized network
    pub fn new(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Default::default()
        }
    }

    /// Selected alignment
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Delay register contents: carry 1 (two slots), carry 2
    pub fn registers(&self) -> [bool; 3] {
        [self.y1[0].q(), self.y1[1].q(), self.y2.q()]
    }
}

impl Process<[bool; 3]> for Align {
    fn process(&mut self, y: [bool; 3]) -> [bool; 3] {
        match self.alignment {
            Alignment::Direct => y,
            Alignment::Retimed => [self.y1.process(y[0]), self.y2.process(y[1]), y[2]],
        }
    }
}

impl Reset for Align {
    fn reset(&mut self) {
        self.y1.reset();
        self.y2.reset();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn delays() {
        for alignment in [Alignment::Direct, Alignment::Retimed] {
            let d = alignment.delays();
            let mut a = Align::new(alignment);
            // one-hot pulse per carry at cycle 0
            for k in 0..3 {
                a.reset();
                let mut y = [false; 3];
                y[k] = true;
                let t: Vec<usize> = (0..4)
                    .filter_map(|i| a.process(if i == 0 { y } else { [false; 3] })[k].then_some(i))
                    .collect();
                assert_eq!(t, [d[k]], "{alignment:?} carry {k}");
            }
        }
    }

    #[test]
    fn direct_is_stateless() {
        let mut a = Align::new(Alignment::Direct);
        assert_eq!(a.process([true, false, true]), [true, false, true]);
        assert_eq!(a.registers(), [false; 3]);
    }

    #[test]
    fn reset() {
        let mut a = Align::new(Alignment::Retimed);
        a.process([true; 3]);
        a.process([true; 3]);
        assert_eq!(a.registers(), [true; 3]);
        a.reset();
        assert_eq!(a.registers(), [false; 3]);
        assert_eq!(a.process([true; 3]), [false, false, true]);
    }

    #[test]
    fn names() {
        assert_eq!(Alignment::from_str("retimed"), Ok(Alignment::Retimed));
        assert_eq!("direct".parse::<Alignment>(), Ok(Alignment::Direct));
        assert!("skewed".parse::<Alignment>().is_err());
        assert_eq!(Alignment::Retimed.as_ref(), "retimed");
        let s: &'static str = Alignment::Direct.into();
        assert_eq!(s, "direct");
    }
}
