pub mod zstd;

use std::fmt::Display;

pub const VERSION: [i32; 3] = [1, 0, 0];

pub const DEFAULT_LEVEL: i32 = 3;

#[must_use]
pub fn version_string() -> String {
    let [major, minor, patch] = VERSION;
    format!("{major}.{minor}.{patch}")
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    ZeroSize,
    Codec(&'static str),
    SizeMismatch(usize, usize),
    BadFrame,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::ZeroSize => write!(f, "zero decompressed size"),
            Self::Codec(e) => write!(f, "{e}"),
            Self::SizeMismatch(n, size) => write!(f, "decompressed size {n} != {size}"),
            Self::BadFrame => write!(f, "bad frame header"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Algorithm {
    #[default]
    Zstd,
}

/// # Errors
pub fn compress(data: &[u8], algorithm: Algorithm, level: i32) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Zstd => crate::zstd::compress(data, level),
    }
}

/// # Errors
pub fn decompress(compressed: &[u8], original_size: usize, algorithm: Algorithm) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Zstd => match crate::zstd::decompress(compressed, original_size) {
            Ok(v) => Ok(v),
            Err(e) => {
                log::error!("{e}: failed to decompress");
                Err(e)
            }
        },
    }
}

/// # Errors
pub fn decompress_auto(compressed: &[u8], algorithm: Algorithm) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Zstd => match crate::zstd::decompress_auto(compressed) {
            Ok(v) => Ok(v),
            Err(e) => {
                log::error!("{e}: failed to decompress");
                Err(e)
            }
        },
    }
}
