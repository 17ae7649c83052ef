//! # Error type of the driver
//!
//! There is exactly one thing that can fail in this crate: a transaction
//! on the two-wire bus. Out-of-bounds pixels and unsupported characters
//! are dropped silently by design, and the framebuffer lives inline in the
//! driver struct so there is no allocation to fail either.
//!
//! The driver has no retry or fallback policy; whatever the bus transport
//! reports is wrapped and handed back to the caller as-is.

/// Errors that can occur while talking to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A write on the two-wire bus failed. Carries the transport's own
    /// error value.
    Bus(E),
}

impl<E> Error<E> {
    /// Maps a bus transaction result into the driver error type, so the
    /// call sites can stay short and use `?`.
    pub(crate) fn bus(result: Result<(), E>) -> Result<(), Error<E>> {
        result.map_err(Error::Bus)
    }
}
