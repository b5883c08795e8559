pub mod assets;
pub mod catalog;
pub mod fiction;
pub mod geom;
pub mod glyph;
mod macros;
