use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while loading trickplay data
#[derive(Debug)]
pub enum TrickplayError {
    Bif(BifError),
    Stream(StreamError),
    Config(ConfigError),
    Other(io::Error),
}

/// BIF format specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BifError {
    /// The fixed header could not be accepted; the whole file is unusable.
    MalformedHeader(HeaderFault),
    /// A read ran past the end of the buffer.
    TruncatedInput {
        position: usize,
        needed: usize,
        available: usize,
    },
    /// A single embedded image could not be decoded.
    ImageDecode(String),
}

/// Reason a BIF header was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFault {
    BadMagic,
    UnsupportedVersion(u32),
    NoImages(u32),
}

/// Source (local file or HTTP) specific errors
#[derive(Debug)]
pub struct StreamError {
    pub message: String,
}

impl StreamError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Configuration errors
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TrickplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickplayError::Bif(err) => write!(f, "BIF error: {}", err),
            TrickplayError::Stream(err) => write!(f, "Stream error: {}", err),
            TrickplayError::Config(err) => write!(f, "Config error: {}", err),
            TrickplayError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for BifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BifError::MalformedHeader(fault) => write!(f, "malformed header: {}", fault),
            BifError::TruncatedInput {
                position,
                needed,
                available,
            } => write!(
                f,
                "truncated input: needed {} bytes at position {}, {} available",
                needed, position, available
            ),
            BifError::ImageDecode(message) => write!(f, "image decode failed: {}", message),
        }
    }
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderFault::BadMagic => write!(f, "invalid magic number"),
            HeaderFault::UnsupportedVersion(version) => {
                write!(f, "unsupported version {} (only 0 is supported)", version)
            }
            HeaderFault::NoImages(count) => write!(f, "file contains no images ({})", count),
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TrickplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrickplayError::Bif(err) => Some(err),
            TrickplayError::Stream(err) => Some(err),
            TrickplayError::Config(err) => Some(err),
            TrickplayError::Other(err) => Some(err),
        }
    }
}
impl Error for BifError {}
impl Error for StreamError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for TrickplayError {
    fn from(err: io::Error) -> Self {
        TrickplayError::Other(err)
    }
}

impl From<BifError> for TrickplayError {
    fn from(err: BifError) -> Self {
        TrickplayError::Bif(err)
    }
}

impl From<HeaderFault> for TrickplayError {
    fn from(fault: HeaderFault) -> Self {
        TrickplayError::Bif(BifError::MalformedHeader(fault))
    }
}

impl From<StreamError> for TrickplayError {
    fn from(err: StreamError) -> Self {
        TrickplayError::Stream(err)
    }
}

impl From<ConfigError> for TrickplayError {
    fn from(err: ConfigError) -> Self {
        TrickplayError::Config(err)
    }
}

impl From<reqwest::Error> for StreamError {
    fn from(err: reqwest::Error) -> Self {
        StreamError::new(err.to_string())
    }
}

impl From<reqwest::Error> for TrickplayError {
    fn from(err: reqwest::Error) -> Self {
        TrickplayError::Stream(err.into())
    }
}

// Conversion to io::Error for callers working with std I/O
impl From<TrickplayError> for io::Error {
    fn from(err: TrickplayError) -> Self {
        match err {
            TrickplayError::Other(err) => err,
            TrickplayError::Bif(err) => io::Error::new(io::ErrorKind::InvalidData, err),
            other => io::Error::other(other),
        }
    }
}

// Type alias for Result with TrickplayError
pub type TrickplayResult<T> = Result<T, TrickplayError>;
