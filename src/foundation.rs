pub(crate) mod buffer;
pub(crate) mod channel;
pub(crate) mod error;
