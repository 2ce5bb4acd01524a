//! Font resolution, shaping and line wrapping.

pub(crate) mod font;
pub(crate) mod shape;
pub(crate) mod wrap;
