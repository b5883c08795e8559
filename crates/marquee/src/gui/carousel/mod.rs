pub mod model;
pub mod view;

pub use model::{ActionKind, Card, CardFrame, CardVisual, Easing, State, Target, card_visual};
pub use view::draw;

pub const SCREEN_PADDING: f64 = 20.0; // top padding above the navbar
pub const NAVBAR_HEIGHT: f64 = 100.0;
pub const NAV_PADDING: f64 = 15.0; // horizontal navbar inset
pub const NAV_ICON_BOX: f64 = 40.0; // hit box around the cast glyph
pub const NAV_GLYPH_SIZE: f64 = 25.0;
pub const LOGO_ASPECT: f64 = 756.0 / 1800.0; // logo height per unit width

pub const SCALE_FLOOR: f64 = 0.85; // off-center card scale
pub const OPACITY_FLOOR: f64 = 0.5; // off-center card opacity
pub const PRESSED_ALPHA: f64 = 0.5;

pub const SCROLL_REPORT_INTERVAL_MS: u64 = 12; // min gap between accepted scroll reports

pub const POSTER_RADIUS: f64 = 6.0;
pub const ABOUT_GAP: f64 = 10.0;
pub const TITLE_FONT_SIZE: f64 = 20.0;
pub const BODY_FONT_SIZE: f64 = 18.0;
pub const BODY_LINE_HEIGHT: f64 = 24.0;
pub const CREDIT_FONT_SIZE: f64 = 16.0;
pub const CREDIT_LINE_HEIGHT: f64 = 25.0;
pub const DESCRIPTION_MAX_LINES: usize = 3;
pub const ABOUT_HEIGHT: f64 = 168.0; // title + capped description + credit lines

pub const ACTION_ROW_HEIGHT: f64 = 60.0;
pub const ACTION_GLYPH_SIZE: f64 = 30.0;
pub const ACTION_LABEL_SIZE: f64 = 13.0;
pub const ICON_SIZE: i32 = 64; // glyph pixbuf decode size
