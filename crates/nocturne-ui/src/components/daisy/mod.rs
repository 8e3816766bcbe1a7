#![doc(hidden)]

//! DaisyUI-inspired control wrappers used by the panel.

pub(crate) mod atoms;
pub(crate) mod foundations;

pub(crate) use atoms::*;
pub(crate) use foundations::*;
