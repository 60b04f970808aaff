use core::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// An Error that can occur in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Raised when a pin cannot be acquired for this board. Construction is
    /// all-or-nothing, so nothing has been written to any line when this
    /// surfaces.
    #[error("failed to initialize GPIO: {0}")]
    GpioInit(#[from] rppal::gpio::Error),
}
