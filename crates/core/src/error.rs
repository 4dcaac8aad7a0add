use std::num::ParseIntError;

use thiserror::Error;

use crate::model::{MinutesError, ParseIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Minutes(#[from] MinutesError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
    #[error("not a number: {0}")]
    Number(#[from] ParseIntError),
}
