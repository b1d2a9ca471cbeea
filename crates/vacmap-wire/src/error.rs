#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// A primitive read requested more bytes than remain in the frame.
    ///
    /// The cursor is left where it was — an underrun never advances it,
    /// so the caller can fall back to a different strategy over the
    /// same bytes.
    #[error("buffer underrun at offset {offset}: needed {needed} bytes, {remaining} remain")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A cursor reposition landed outside `0..=len`.
    #[error("seek to offset {offset} out of bounds for {len}-byte frame")]
    SeekOutOfBounds { offset: usize, len: usize },
}

// NOTE Summary
// #[derive(thiserror::Error)] — generates the std::error::Error and Display
// impls; each #[error("...")] attribute becomes the Display output.
// Every variant carries the cursor offset because that's the first thing
// you want when a reverse-engineered payload stops parsing: where in the
// byte stream did the read give up.
