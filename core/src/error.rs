#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    IoError(embedded_io::ErrorKind),
    FormatError,
    /// Pixel buffer length does not match `width * height`.
    DimensionMismatch { expected: usize, actual: usize },
    /// `width * height` does not fit in `usize`.
    TooLarge { width: usize, height: usize },
}

impl Error {
    pub fn from<E: embedded_io::Error>(err: E) -> Self {
        Self::IoError(embedded_io::Error::kind(&err))
    }

    pub(crate) fn from_fmt_error<E: embedded_io::Error>(err: embedded_io::WriteFmtError<E>) -> Self {
        match err {
            embedded_io::WriteFmtError::FmtError => Self::FormatError,
            embedded_io::WriteFmtError::Other(e) => Self::from(e),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IoError(kind) => write!(f, "I/O error: {:?}", kind),
            Error::FormatError => write!(f, "formatting error"),
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "expected {} pixels, got {}",
                expected, actual
            ),
            Error::TooLarge { width, height } => {
                write!(f, "{}x{} raster is too large", width, height)
            }
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
