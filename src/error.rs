use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("modulus must be at least 1")]
    ZeroModulus,
    #[error("decimal string has no digits")]
    EmptyDecimal,
    #[error("invalid decimal digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
    #[error("matrix rows do not form a non-empty square grid")]
    NotSquare,
    #[error("cannot multiply {left}x{left} matrix by {right}x{right} matrix")]
    DimensionMismatch { left: usize, right: usize },
    #[error("recurrence needs at least one coefficient")]
    EmptyRecurrence,
    #[error("initial window holds {found} values, recurrence order is {expected}")]
    InitialWindowLength { expected: usize, found: usize },
    #[error("profile width must be at least 1")]
    ZeroWidth,
    #[error("profile width {width} exceeds the supported maximum of {max}")]
    WidthTooLarge { width: u32, max: u32 },
    #[error("readout cell ({row}, {col}) lies outside a {size}x{size} matrix")]
    ReadoutOutOfRange { row: usize, col: usize, size: usize },
    #[error("index 0 lies before the recurrence anchor at index 1")]
    IndexBeforeAnchor,
}
