use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);
