//! Small presentation helpers shared by the screens.

pub mod marquee;
pub mod price_fmt;
