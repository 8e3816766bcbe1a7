//! Yew components for the preferences screen.

pub(crate) mod daisy;
pub(crate) mod preferences;
