use crate::config::{LayoutConfig, ScrollConfig};
use crate::gui::carousel::{
    ABOUT_HEIGHT, ACTION_ROW_HEIGHT, ICON_SIZE, NAV_ICON_BOX, NAV_PADDING, NAVBAR_HEIGHT,
    OPACITY_FLOOR, SCALE_FLOOR, SCREEN_PADDING, SCROLL_REPORT_INTERVAL_MS,
};
use backlot::catalog::CardItem;
use backlot::fiction::Blurb;
use backlot::geom::{Point, Rect};
use backlot::glyph::{self, Glyph};
use backlot::{assets, catalog};
use gdk_pixbuf::Pixbuf;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::time::{Duration, Instant};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Derived presentation values for one card at one scroll position.
/// Never stored; recomputed from `(offset, index, item width)` on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub scale: f64,
    pub opacity: f64,
}

/// Tent function over the breakpoints `(i-1)*w, i*w, (i+1)*w`: 1.0 when the
/// card is centered, falling linearly to 0.0 at either neighbor's centered
/// position, clamped outside.
pub fn emphasis(scroll_x: f64, index: usize, item_width: f64) -> f64 {
    if item_width <= 0.0 {
        return 0.0;
    }
    let pages_off = (scroll_x / item_width - index as f64).abs();
    (1.0 - pages_off).clamp(0.0, 1.0)
}

pub fn card_visual(scroll_x: f64, index: usize, item_width: f64) -> CardVisual {
    let e = emphasis(scroll_x, index, item_width);
    CardVisual {
        scale: SCALE_FLOOR + (1.0 - SCALE_FLOOR) * e,
        opacity: OPACITY_FLOOR + (1.0 - OPACITY_FLOOR) * e,
    }
}

/// One card width: the lesser viewport dimension minus the inset on both
/// sides, so a single card fills the page in either orientation.
pub fn item_width(viewport_w: f64, viewport_h: f64, inset: f64) -> f64 {
    viewport_w.min(viewport_h) - 2.0 * inset
}

/// Nearest settled position: an integer multiple of the item width within
/// the scrollable range.
pub fn snap_target(scroll_x: f64, item_width: f64, card_count: usize) -> f64 {
    if item_width <= 0.0 || card_count == 0 {
        return 0.0;
    }
    let last = (card_count - 1) as f64;
    (scroll_x / item_width).round().clamp(0.0, last) * item_width
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, DeserializeFromStr, EnumString, EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Easing {
    #[strum(serialize = "Linear", serialize = "linear")]
    Linear,
    #[strum(serialize = "OutQuad", serialize = "out-quad")]
    OutQuad,
    #[strum(serialize = "OutCubic", serialize = "out-cubic")]
    OutCubic,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::OutCubic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum ActionKind {
    #[strum(serialize = "My List")]
    MyList,
    #[strum(serialize = "Liked")]
    Liked,
    #[strum(serialize = "Share")]
    Share,
}

pub const ACTIONS: [ActionKind; 3] = [ActionKind::MyList, ActionKind::Liked, ActionKind::Share];

impl ActionKind {
    pub fn glyph(self) -> Glyph {
        Glyph::new(match self {
            Self::MyList => "add",
            Self::Liked => "thumb-up",
            Self::Share => "share",
        })
    }
}

/// What the pointer is currently held down on. Purely a visual dim; release
/// performs no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    NavCast,
    Action { card: usize, kind: ActionKind },
}

#[derive(Clone)]
pub struct Card {
    pub item: CardItem,
    pub blurb: Blurb,
    pub poster: Option<Pixbuf>,
}

impl Card {
    pub fn new(item: CardItem) -> Self {
        let poster = assets::find_poster(&item.asset).and_then(|p| Pixbuf::from_file(&p).ok());
        Self {
            blurb: Blurb::generate(),
            poster,
            item,
        }
    }
}

/// Static chrome imagery resolved once at startup. Misses degrade to text.
#[derive(Clone, Default)]
pub struct Chrome {
    pub logo: Option<Pixbuf>,
    pub cast: Option<Pixbuf>,
    pub add: Option<Pixbuf>,
    pub thumb_up: Option<Pixbuf>,
    pub share: Option<Pixbuf>,
}

impl Chrome {
    pub fn load() -> Self {
        Self {
            logo: assets::find_logo().and_then(|p| Pixbuf::from_file(&p).ok()),
            cast: load_glyph("cast"),
            add: load_glyph("add"),
            thumb_up: load_glyph("thumb-up"),
            share: load_glyph("share"),
        }
    }

    pub fn action_icon(&self, kind: ActionKind) -> Option<&Pixbuf> {
        match kind {
            ActionKind::MyList => self.add.as_ref(),
            ActionKind::Liked => self.thumb_up.as_ref(),
            ActionKind::Share => self.share.as_ref(),
        }
    }
}

fn load_glyph(name: &str) -> Option<Pixbuf> {
    glyph::find_glyph_path(&Glyph::new(name))
        .and_then(|p| Pixbuf::from_file_at_scale(&p, ICON_SIZE, ICON_SIZE, true).ok())
}

/// Layout of one card at the current scroll position. `index` doubles as the
/// stable key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    pub x: f64,
    pub width: f64,
    pub visual: CardVisual,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    origin: f64,
    start_page: usize,
}

#[derive(Debug, Clone, Copy)]
struct Settle {
    from: f64,
    to: f64,
    start_us: Option<i64>,
}

pub struct State {
    pub cards: Vec<Card>,
    pub chrome: Chrome,
    pub layout: LayoutConfig,
    pub scroll: ScrollConfig,
    pub scroll_x: f64,
    pub pressed: Option<Target>,
    viewport: (f64, f64),
    item_width: f64,
    drag: Option<Drag>,
    settle: Option<Settle>,
    last_report: Option<Instant>,
}

impl State {
    pub fn new(cards: Vec<Card>, layout: LayoutConfig, scroll: ScrollConfig) -> Self {
        Self {
            cards,
            chrome: Chrome::load(),
            layout,
            scroll,
            scroll_x: 0.0,
            pressed: None,
            viewport: (0.0, 0.0),
            item_width: 1.0,
            drag: None,
            settle: None,
            last_report: None,
        }
    }

    pub fn from_catalog(layout: LayoutConfig, scroll: ScrollConfig) -> Self {
        let cards = catalog::cards().into_iter().map(Card::new).collect();
        Self::new(cards, layout, scroll)
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn max_scroll(&self) -> f64 {
        (self.cards.len().saturating_sub(1)) as f64 * self.item_width
    }

    pub fn current_page(&self) -> usize {
        if self.item_width <= 0.0 || self.cards.is_empty() {
            return 0;
        }
        let last = self.cards.len() - 1;
        ((self.scroll_x / self.item_width).round().max(0.0) as usize).min(last)
    }

    /// Re-derives the item width for a new viewport, then settles instantly
    /// on the nearest page; in-flight gestures and animations are dropped.
    pub fn set_viewport(&mut self, w: f64, h: f64) {
        self.viewport = (w, h);
        self.relayout();
    }

    /// Live config swap (watcher reload). Same relayout rules as a resize.
    pub fn apply_config(&mut self, layout: LayoutConfig, scroll: ScrollConfig) {
        self.layout = layout;
        self.scroll = scroll;
        self.relayout();
    }

    fn relayout(&mut self) {
        let (w, h) = self.viewport;
        self.item_width = item_width(w, h, self.layout.inset).max(1.0);
        self.drag = None;
        self.settle = None;
        self.scroll_x = snap_target(
            self.scroll_x.clamp(0.0, self.max_scroll()),
            self.item_width,
            self.cards.len(),
        );
    }

    /// Accepts a scroll-position report unless one arrived within the
    /// throttle interval. The transform is stateless, so dropped
    /// intermediates cost nothing; gesture ends bypass the throttle.
    pub fn report_scroll(&mut self, x: f64, now: Instant) -> bool {
        if let Some(last) = self.last_report
            && now.duration_since(last) < Duration::from_millis(SCROLL_REPORT_INTERVAL_MS)
        {
            return false;
        }
        self.last_report = Some(now);
        self.scroll_x = x.clamp(0.0, self.max_scroll());
        true
    }

    pub fn begin_drag(&mut self) {
        self.settle = None;
        self.drag = Some(Drag {
            origin: self.scroll_x,
            start_page: self.current_page(),
        });
    }

    pub fn drag_update(&mut self, dx: f64, now: Instant) -> bool {
        match self.drag {
            Some(drag) => self.report_scroll(drag.origin - dx, now),
            None => false,
        }
    }

    /// Applies the final gesture position unthrottled, then settles on the
    /// nearest page, at most one page away from where the drag began (a
    /// single gesture never flings across multiple pages).
    pub fn end_drag(&mut self, dx: f64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.scroll_x = (drag.origin - dx).clamp(0.0, self.max_scroll());
        self.last_report = None;

        let nearest = (self.scroll_x / self.item_width).round() as i64;
        let start = drag.start_page as i64;
        let last = self.cards.len().saturating_sub(1) as i64;
        let page = nearest.clamp(start - 1, start + 1).clamp(0, last);
        self.begin_settle(page as f64 * self.item_width);
    }

    /// Pages by `delta` from the current page (wheel input).
    pub fn step_page(&mut self, delta: i64) {
        let last = self.cards.len().saturating_sub(1) as i64;
        let page = (self.current_page() as i64 + delta).clamp(0, last);
        self.begin_settle(page as f64 * self.item_width);
    }

    fn begin_settle(&mut self, target: f64) {
        if (self.scroll_x - target).abs() < f64::EPSILON {
            self.scroll_x = target;
            self.settle = None;
            return;
        }
        self.settle = Some(Settle {
            from: self.scroll_x,
            to: target,
            start_us: None,
        });
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Advances the settle animation for one frame-clock tick (microsecond
    /// timestamps). Returns whether the offset changed.
    pub fn tick(&mut self, frame_us: i64) -> bool {
        let Some(settle) = &mut self.settle else {
            return false;
        };
        let start = *settle.start_us.get_or_insert(frame_us);
        let duration_us = (self.scroll.settle_ms.max(1) * 1000) as i64;
        let t = (frame_us - start) as f64 / duration_us as f64;
        self.scroll_x = settle.from + (settle.to - settle.from) * self.scroll.easing.apply(t);
        if t >= 1.0 {
            self.scroll_x = settle.to;
            self.settle = None;
        }
        true
    }

    /// Per-card layout for the current offset. One frame per catalog entry,
    /// keyed by index.
    pub fn frames(&self) -> Vec<CardFrame> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, _)| CardFrame {
                index: i,
                x: self.layout.inset + i as f64 * self.item_width - self.scroll_x,
                width: self.item_width,
                visual: card_visual(self.scroll_x, i, self.item_width),
            })
            .collect()
    }

    /// Extra margin so the first card can center like interior ones.
    pub fn leading_margin(&self, index: usize) -> f64 {
        if index == 0 { self.layout.inset } else { 0.0 }
    }

    /// Symmetric extra margin on the last card.
    pub fn trailing_margin(&self, index: usize) -> f64 {
        if index + 1 == self.cards.len() {
            self.layout.inset
        } else {
            0.0
        }
    }

    pub fn content_width(&self) -> f64 {
        self.leading_margin(0)
            + self.cards.len() as f64 * self.item_width
            + self.trailing_margin(self.cards.len().saturating_sub(1))
    }

    pub fn press(&mut self, p: Point) -> bool {
        let target = self.hit_test(p);
        let changed = self.pressed != target;
        self.pressed = target;
        changed
    }

    pub fn release(&mut self) -> bool {
        // Inert affordances: releasing mutates nothing beyond the dim.
        self.pressed.take().is_some()
    }

    pub fn hit_test(&self, p: Point) -> Option<Target> {
        if nav_cast_rect(self.viewport.0).contains(p) {
            return Some(Target::NavCast);
        }
        self.frames().iter().find_map(|frame| {
            action_rects(frame, &self.layout)
                .into_iter()
                .find(|(_, rect)| rect.contains(p))
                .map(|(kind, _)| Target::Action {
                    card: frame.index,
                    kind,
                })
        })
    }
}

pub fn content_top() -> f64 {
    SCREEN_PADDING + NAVBAR_HEIGHT
}

pub fn actions_row_y(layout: &LayoutConfig) -> f64 {
    content_top() + layout.card_height + ABOUT_HEIGHT
}

pub fn card_block_height(layout: &LayoutConfig) -> f64 {
    layout.card_height + ABOUT_HEIGHT + ACTION_ROW_HEIGHT
}

/// Hit box around the navbar cast glyph, right-aligned.
pub fn nav_cast_rect(viewport_w: f64) -> Rect {
    Rect::new(
        viewport_w - NAV_PADDING - NAV_ICON_BOX,
        SCREEN_PADDING + (NAVBAR_HEIGHT - NAV_ICON_BOX) / 2.0,
        NAV_ICON_BOX,
        NAV_ICON_BOX,
    )
}

/// The three action hit boxes across the card's action row, in order.
pub fn action_rects(frame: &CardFrame, layout: &LayoutConfig) -> [(ActionKind, Rect); 3] {
    let y = actions_row_y(layout);
    let third = frame.width / 3.0;
    std::array::from_fn(|i| {
        (
            ACTIONS[i],
            Rect::new(frame.x + i as f64 * third, y, third, ACTION_ROW_HEIGHT),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const W: f64 = 335.0;

    fn test_cards(n: usize) -> Vec<Card> {
        catalog::cards()
            .into_iter()
            .cycle()
            .take(n)
            .map(|item| Card {
                blurb: Blurb::generate(),
                poster: None,
                item,
            })
            .collect()
    }

    fn test_state() -> State {
        let mut state = State::new(
            test_cards(9),
            LayoutConfig::default(),
            ScrollConfig::default(),
        );
        // portrait 415x900 with the default 40.0 inset gives W = 335
        state.set_viewport(415.0, 900.0);
        state
    }

    #[test]
    fn visual_peaks_at_center() {
        for i in 0..9 {
            let v = card_visual(i as f64 * W, i, W);
            assert_eq!(v.scale, 1.0);
            assert_eq!(v.opacity, 1.0);
        }
    }

    #[test]
    fn visual_stays_in_range_between_neighbors() {
        for i in 1..8usize {
            let lo = (i as f64 - 1.0) * W;
            let hi = (i as f64 + 1.0) * W;
            let mut x = lo;
            while x <= hi {
                let v = card_visual(x, i, W);
                assert!((0.85..=1.0).contains(&v.scale), "scale at {x}");
                assert!((0.5..=1.0).contains(&v.opacity), "opacity at {x}");
                x += W / 16.0;
            }
        }
    }

    #[test]
    fn visual_is_monotonic_toward_neighbor() {
        let mut prev = card_visual(2.0 * W, 2, W);
        let mut x = 2.0 * W;
        while x < 3.0 * W {
            x += W / 32.0;
            let v = card_visual(x, 2, W);
            assert!(v.scale <= prev.scale);
            assert!(v.opacity <= prev.opacity);
            prev = v;
        }
    }

    #[test]
    fn visual_clamps_outside_breakpoints() {
        let v = card_visual(0.0, 2, W);
        assert_eq!(v.scale, 0.85);
        assert_eq!(v.opacity, 0.5);
        let v = card_visual(5.0 * W, 2, W);
        assert_eq!(v.scale, 0.85);
        assert_eq!(v.opacity, 0.5);
    }

    #[test]
    fn neighboring_cards_swap_emphasis_at_page_boundaries() {
        let v = card_visual(670.0, 2, W);
        assert_eq!((v.scale, v.opacity), (1.0, 1.0));

        let v2 = card_visual(1005.0, 2, W);
        assert!((v2.scale - 0.85).abs() < 1e-9);
        assert!((v2.opacity - 0.5).abs() < 1e-9);
        let v3 = card_visual(1005.0, 3, W);
        assert_eq!((v3.scale, v3.opacity), (1.0, 1.0));
    }

    #[test]
    fn visual_is_continuous_across_breakpoints() {
        for x in [W - 0.001, W, W + 0.001] {
            let v = card_visual(x, 1, W);
            assert!((v.scale - 1.0).abs() < 0.001);
            assert!((v.opacity - 1.0).abs() < 0.002);
        }
    }

    #[test]
    fn item_width_uses_lesser_dimension() {
        assert_eq!(item_width(415.0, 900.0, 40.0), 335.0);
        assert_eq!(item_width(900.0, 415.0, 40.0), 335.0);
    }

    #[test]
    fn margins_only_on_first_and_last() {
        let state = test_state();
        assert_eq!(state.leading_margin(0), 40.0);
        assert_eq!(state.trailing_margin(8), 40.0);
        for i in 1..8 {
            assert_eq!(state.leading_margin(i), 0.0);
            assert_eq!(state.trailing_margin(i), 0.0);
        }
        assert_eq!(state.trailing_margin(0), 0.0);
        assert_eq!(state.leading_margin(8), 0.0);
        assert_eq!(state.content_width(), 80.0 + 9.0 * W);
    }

    #[test]
    fn nine_cards_produce_nine_keyed_frames() {
        let state = test_state();
        let frames = state.frames();
        assert_eq!(frames.len(), 9);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index, i);
        }
    }

    #[test]
    fn centered_frame_sits_at_the_inset() {
        let mut state = test_state();
        state.scroll_x = 2.0 * W;
        let frames = state.frames();
        assert_eq!(frames[2].x, 40.0);
        assert_eq!(frames[2].visual.scale, 1.0);
    }

    #[test]
    fn snap_targets_are_page_multiples() {
        assert_eq!(snap_target(0.4 * W, W, 9), 0.0);
        assert_eq!(snap_target(0.6 * W, W, 9), W);
        assert_eq!(snap_target(7.9 * W, W, 9), 8.0 * W);
        // clamped to the scrollable range
        assert_eq!(snap_target(-W, W, 9), 0.0);
        assert_eq!(snap_target(12.0 * W, W, 9), 8.0 * W);
    }

    #[test]
    fn drag_release_settles_on_a_page_multiple() {
        let mut state = test_state();
        state.begin_drag();
        state.end_drag(-0.7 * W);
        let mut t = 0;
        while state.is_settling() {
            state.tick(t);
            t += 8_000;
        }
        assert_eq!(state.scroll_x, W);
        assert_eq!(state.scroll_x % state.item_width(), 0.0);
    }

    #[test]
    fn fling_is_clamped_to_one_page() {
        let mut state = test_state();
        state.begin_drag();
        // dragged four pages' worth in one gesture
        state.end_drag(-4.0 * W);
        let mut t = 0;
        while state.is_settling() {
            state.tick(t);
            t += 50_000;
        }
        assert_eq!(state.scroll_x, W);

        state.begin_drag();
        state.end_drag(4.0 * W);
        let mut t = 0;
        while state.is_settling() {
            state.tick(t);
            t += 50_000;
        }
        assert_eq!(state.scroll_x, 0.0);
    }

    #[test]
    fn settle_lands_exactly_on_target() {
        let mut state = test_state();
        state.step_page(1);
        assert!(state.is_settling());
        state.tick(0);
        assert_eq!(state.scroll_x, 0.0);
        state.tick(125_000);
        assert!(state.scroll_x > 0.0 && state.scroll_x < W);
        state.tick(250_000);
        assert_eq!(state.scroll_x, W);
        assert!(!state.is_settling());
    }

    #[test]
    fn step_page_clamps_at_the_ends() {
        let mut state = test_state();
        state.step_page(-1);
        assert!(!state.is_settling());
        assert_eq!(state.scroll_x, 0.0);

        state.scroll_x = 8.0 * W;
        state.step_page(1);
        assert!(!state.is_settling());
        assert_eq!(state.scroll_x, 8.0 * W);
    }

    #[test]
    fn reports_inside_the_throttle_window_are_dropped() {
        let mut state = test_state();
        let t0 = Instant::now();
        assert!(state.report_scroll(10.0, t0));
        assert!(!state.report_scroll(20.0, t0 + Duration::from_millis(5)));
        assert_eq!(state.scroll_x, 10.0);
        assert!(state.report_scroll(20.0, t0 + Duration::from_millis(20)));
        assert_eq!(state.scroll_x, 20.0);
    }

    #[test]
    fn gesture_end_applies_final_position_past_throttle() {
        let mut state = test_state();
        let t0 = Instant::now();
        state.begin_drag();
        assert!(state.drag_update(-10.0, t0));
        // throttled away, but the release still lands on the true position
        assert!(!state.drag_update(-30.0, t0 + Duration::from_millis(2)));
        state.end_drag(-30.0);
        assert!(state.scroll_x == 30.0 || state.is_settling());
    }

    #[test]
    fn scroll_reports_clamp_to_range() {
        let mut state = test_state();
        state.report_scroll(-50.0, Instant::now());
        assert_eq!(state.scroll_x, 0.0);
        state.begin_drag();
        state.end_drag(50.0);
        assert_eq!(state.scroll_x, 0.0);
    }

    #[test]
    fn resize_resnaps_to_a_page() {
        let mut state = test_state();
        state.scroll_x = 2.3 * W;
        state.set_viewport(500.0, 1000.0);
        let w = state.item_width();
        assert_eq!(w, 420.0);
        assert_eq!(state.scroll_x % w, 0.0);
    }

    #[test]
    fn easing_endpoints_are_stable() {
        for easing in Easing::iter() {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn easing_is_monotonic() {
        for easing in Easing::iter() {
            let a = easing.apply(0.25);
            let b = easing.apply(0.5);
            let c = easing.apply(0.75);
            assert!(a < b && b < c);
        }
    }

    #[test]
    fn press_dims_only_known_targets() {
        let mut state = test_state();
        let y = actions_row_y(&state.layout) + 10.0;
        // centered card 0 spans x = 40..375; first third is "My List"
        assert!(state.press(Point::new(60.0, y)));
        assert_eq!(
            state.pressed,
            Some(Target::Action {
                card: 0,
                kind: ActionKind::MyList,
            })
        );
        assert!(state.release());
        assert_eq!(state.pressed, None);

        // empty space above the cards
        assert!(!state.press(Point::new(5.0, 5.0)));
        assert_eq!(state.pressed, None);
    }

    #[test]
    fn nav_cast_hit_box_sits_right_of_the_navbar() {
        let mut state = test_state();
        let rect = nav_cast_rect(415.0);
        assert!(state.press(rect.center()));
        assert_eq!(state.pressed, Some(Target::NavCast));
        state.release();
    }

    #[test]
    fn action_rects_tile_the_card() {
        let state = test_state();
        let frames = state.frames();
        let rects = action_rects(&frames[0], &state.layout);
        assert_eq!(rects[0].0, ActionKind::MyList);
        assert_eq!(rects[1].0, ActionKind::Liked);
        assert_eq!(rects[2].0, ActionKind::Share);
        let total: f64 = rects.iter().map(|(_, r)| r.width).sum();
        assert!((total - frames[0].width).abs() < 1e-9);
    }

    #[test]
    fn action_labels() {
        assert_eq!(ActionKind::MyList.to_string(), "My List");
        assert_eq!(ActionKind::Liked.to_string(), "Liked");
        assert_eq!(ActionKind::Share.to_string(), "Share");
    }
}
