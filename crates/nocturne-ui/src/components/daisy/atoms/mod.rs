mod button;
mod range;
mod select;
mod toggle;

pub(crate) use button::*;
pub(crate) use range::*;
pub(crate) use select::*;
pub(crate) use toggle::*;
