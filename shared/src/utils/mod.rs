//! Input normalization and validation helpers

pub mod validation;
