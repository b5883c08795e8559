use gtk::prelude::*;
use gtk4 as gtk;

// Portrait phone proportions; both orientations work, the carousel
// re-derives its item width from whichever dimension is lesser.
const DEFAULT_WIDTH: i32 = 415;
const DEFAULT_HEIGHT: i32 = 900;

pub fn init_window(window: &gtk::ApplicationWindow) {
    window.set_default_size(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    window.set_resizable(true);
}
