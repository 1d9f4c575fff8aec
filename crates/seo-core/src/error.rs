use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("body translation is not supported for `{construct}` declarations")]
    UnsupportedBody { construct: String },
}

pub type Result<T> = result::Result<T, Error>;
