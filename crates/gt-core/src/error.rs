use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyImage { width: usize, height: usize },
    SizeMismatch { expected: usize, actual: usize },
    OutOfBounds,
    InvalidStride,
    OddFlatLength { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage { width, height } => {
                write!(f, "empty image: {width}x{height}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::OddFlatLength { len } => {
                write!(f, "flat contour array has odd length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
