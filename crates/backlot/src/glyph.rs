use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct Glyph(String);

crate::impl_string_newtype!(Glyph);

/// The glyph names the screen is allowed to ask for. Anything else resolves
/// to nothing.
const GLYPH_TABLE: &[(&str, &str)] = &[
    ("cast", "video-display"),
    ("add", "list-add"),
    ("thumb-up", "emblem-favorite"),
    ("share", "emblem-shared"),
];

fn icon_name(glyph: &Glyph) -> Option<&'static str> {
    GLYPH_TABLE
        .iter()
        .find(|(name, _)| *name == glyph.as_ref().as_str())
        .map(|(_, icon)| *icon)
}

/// Resolves a glyph to an icon file through the freedesktop icon theme.
/// Only the names in the contract table resolve; a theme miss is `None` and
/// the caller draws without the glyph.
pub fn find_glyph_path(glyph: &Glyph) -> Option<PathBuf> {
    lookup(icon_name(glyph)?).with_size(64).with_scale(1).find()
}
