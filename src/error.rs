/// Modulator configuration error
///
/// Stepping a constructed modulator cannot fail, all checks happen at
/// construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Word width outside the supported range
    #[error("word width {0} outside 1..=32")]
    Width(u8),
    /// Feedback gain does not fit the word
    #[error("feedback gain {gain} must be below 1 << {width}")]
    Gain {
        /// Configured gain
        gain: u32,
        /// Configured width
        width: u8,
    },
    /// Cascaded stages disagree on the word width
    #[error("stage widths differ: {0:?}")]
    WidthMismatch([u8; 3]),
    /// Carry retiming does not match the stage latencies
    #[error("carry delays {provided:?} do not align stage latencies, need {required:?}")]
    Misaligned {
        /// Delays needed by the registered output flags of the stages
        required: [usize; 3],
        /// Delays of the selected alignment
        provided: [usize; 3],
    },
}
