//! Sample trace files
//!
//! Plain text, one signed decimal integer per line, one line per cycle,
//! no header.
use std::io::{BufRead, Write};

use crate::{Process, Reset};

/// Trace I/O error
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Reading or writing failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line is not a decimal integer
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Parser error
        #[source]
        source: core::num::ParseIntError,
    },
}

/// Write samples, one per line
pub fn write<W: Write>(
    mut w: W,
    samples: impl IntoIterator<Item = impl Into<i32>>,
) -> Result<(), TraceError> {
    for y in samples {
        writeln!(w, "{}", y.into())?;
    }
    w.flush()?;
    Ok(())
}

/// Read samples
///
/// Blank lines are skipped. Surrounding whitespace is ignored.
pub fn read<R: BufRead>(r: R) -> Result<Vec<i32>, TraceError> {
    let mut y = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        y.push(
            line.parse()
                .map_err(|source| TraceError::Parse { line: i + 1, source })?,
        );
    }
    Ok(y)
}

/// DC testbench
///
/// Clocks one reset edge, then `n` cycles with the constant input `x`,
/// writing every output code.
pub fn record_dc<P, W>(dut: &mut P, x: u32, n: usize, w: W) -> Result<(), TraceError>
where
    P: Process<u32, i8> + Reset,
    W: Write,
{
    dut.reset();
    write(w, (0..n).map(|_| dut.process(x)))
}
