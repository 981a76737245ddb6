use thiserror::Error;

use crate::rfc::ical::core::ValueError;
use crate::rfc::ical::parse::ParseError;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Value error: {0}")]
    ValueError(#[from] ValueError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
