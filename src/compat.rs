/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub(crate) use std::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};
