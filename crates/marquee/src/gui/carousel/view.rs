use super::model::{self, ActionKind, Card, CardFrame, Chrome, State, Target};
use super::{
    ABOUT_GAP, ACTION_GLYPH_SIZE, ACTION_LABEL_SIZE, BODY_FONT_SIZE, BODY_LINE_HEIGHT,
    CREDIT_FONT_SIZE, CREDIT_LINE_HEIGHT, DESCRIPTION_MAX_LINES, LOGO_ASPECT, NAV_GLYPH_SIZE,
    POSTER_RADIUS, PRESSED_ALPHA, TITLE_FONT_SIZE,
};
use crate::config::LayoutConfig;
use crate::gui::theme::ThemeColors;
use backlot::geom::Rect;
use cairo::Context;
use gdk4::prelude::*;
use gdk_pixbuf::Pixbuf;
use palette::Srgba;
use std::f64::consts::PI;

struct CardRenderer<'a> {
    card: &'a Card,
    frame: &'a CardFrame,
    pressed: Option<ActionKind>,
    layout: &'a LayoutConfig,
    chrome: &'a Chrome,
}

impl<'a> CardRenderer<'a> {
    fn new(
        card: &'a Card,
        frame: &'a CardFrame,
        pressed: Option<ActionKind>,
        layout: &'a LayoutConfig,
        chrome: &'a Chrome,
    ) -> Self {
        Self {
            card,
            frame,
            pressed,
            layout,
            chrome,
        }
    }

    /// Scales the whole card block about its center, then paints it as one
    /// group so the opacity applies to poster and text alike.
    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        cr.save()?;
        let cx = self.frame.x + self.frame.width / 2.0;
        let cy = model::content_top() + model::card_block_height(self.layout) / 2.0;
        cr.translate(cx, cy);
        cr.scale(self.frame.visual.scale, self.frame.visual.scale);
        cr.translate(-cx, -cy);

        cr.push_group();
        self.draw_poster(cr, colors)?;
        self.draw_about(cr, colors)?;
        self.draw_actions(cr, colors)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(self.frame.visual.opacity)?;
        cr.restore()
    }

    fn draw_poster(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let rect = Rect::new(
            self.frame.x,
            model::content_top(),
            self.frame.width,
            self.layout.card_height,
        );

        if let Some(pixbuf) = &self.card.poster {
            cr.save()?;
            rounded_rect(cr, rect, POSTER_RADIUS);
            cr.clip();
            // cover: scale up until both dimensions fill the panel
            let scale = (rect.width / pixbuf.width() as f64)
                .max(rect.height / pixbuf.height() as f64);
            let (iw, ih) = (pixbuf.width() as f64 * scale, pixbuf.height() as f64 * scale);
            cr.translate(
                rect.x + (rect.width - iw) / 2.0,
                rect.y + (rect.height - ih) / 2.0,
            );
            cr.scale(scale, scale);
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
            cr.restore()
        } else {
            set_source(cr, colors.panel);
            rounded_rect(cr, rect, POSTER_RADIUS);
            cr.fill()?;
            // no poster art: name the title inside the panel
            set_source(cr, colors.text);
            cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
            cr.set_font_size(TITLE_FONT_SIZE);
            let title = self.card.item.title.as_ref();
            if let Ok(ext) = cr.text_extents(title) {
                let center = rect.center();
                cr.move_to(center.x - ext.width() / 2.0, center.y + ext.height() / 2.0);
                cr.show_text(title)?;
            }
            Ok(())
        }
    }

    fn draw_about(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let x = self.frame.x;
        let mut y = model::content_top() + self.layout.card_height + ABOUT_GAP + TITLE_FONT_SIZE;

        set_source(cr, colors.text);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(TITLE_FONT_SIZE);
        cr.move_to(x, y);
        cr.show_text(self.card.item.title.as_ref())?;
        y += ABOUT_GAP;

        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(BODY_FONT_SIZE);
        for line in wrap_text(cr, &self.card.blurb.description, self.frame.width)
            .iter()
            .take(DESCRIPTION_MAX_LINES)
        {
            y += BODY_LINE_HEIGHT;
            cr.move_to(x, y);
            cr.show_text(line)?;
        }
        y += ABOUT_GAP;

        set_source(cr, colors.muted);
        cr.set_font_size(CREDIT_FONT_SIZE);
        y += CREDIT_LINE_HEIGHT;
        cr.move_to(x, y);
        cr.show_text(&format!("Cast: {}", self.card.blurb.cast))?;
        y += CREDIT_LINE_HEIGHT;
        cr.move_to(x, y);
        cr.show_text(&format!("Creator: {}", self.card.blurb.creator))?;
        Ok(())
    }

    fn draw_actions(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        for (kind, rect) in model::action_rects(self.frame, self.layout) {
            let alpha = if self.pressed == Some(kind) {
                PRESSED_ALPHA
            } else {
                1.0
            };

            cr.push_group();
            if let Some(pixbuf) = self.chrome.action_icon(kind) {
                draw_glyph(cr, pixbuf, &rect, ACTION_GLYPH_SIZE)?;
            }
            set_source(cr, colors.muted);
            cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
            cr.set_font_size(ACTION_LABEL_SIZE);
            let label = kind.to_string();
            if let Ok(ext) = cr.text_extents(&label) {
                cr.move_to(
                    rect.center().x - ext.width() / 2.0,
                    rect.y + ACTION_GLYPH_SIZE + 18.0,
                );
                cr.show_text(&label)?;
            }
            cr.pop_group_to_source()?;
            cr.paint_with_alpha(alpha)?;
        }
        Ok(())
    }
}

pub fn draw(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (vw, vh) = state.viewport();

    set_source(cr, colors.background);
    cr.rectangle(0.0, 0.0, vw, vh);
    cr.fill()?;

    draw_navbar(cr, state, colors)?;

    for frame in state.frames() {
        // off-screen cards cost nothing to skip
        if frame.x + frame.width < 0.0 || frame.x > vw {
            continue;
        }
        let pressed = match state.pressed {
            Some(Target::Action { card, kind }) if card == frame.index => Some(kind),
            _ => None,
        };
        CardRenderer::new(
            &state.cards[frame.index],
            &frame,
            pressed,
            &state.layout,
            &state.chrome,
        )
        .draw(cr, colors)?;
    }
    Ok(())
}

fn draw_navbar(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (vw, _) = state.viewport();

    let logo_w = state.layout.logo_width;
    let logo_h = LOGO_ASPECT * logo_w;
    let logo_x = (vw - logo_w) / 2.0;
    let logo_y = super::SCREEN_PADDING + (super::NAVBAR_HEIGHT - logo_h) / 2.0;

    if let Some(pixbuf) = &state.chrome.logo {
        cr.save()?;
        cr.translate(logo_x, logo_y);
        cr.scale(
            logo_w / pixbuf.width() as f64,
            logo_h / pixbuf.height() as f64,
        );
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint()?;
        cr.restore()?;
    } else {
        set_source(cr, colors.accent);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(24.0);
        if let Ok(ext) = cr.text_extents("MARQUEE") {
            cr.move_to(
                (vw - ext.width()) / 2.0,
                logo_y + (logo_h + ext.height()) / 2.0,
            );
            cr.show_text("MARQUEE")?;
        }
    }

    let rect = model::nav_cast_rect(vw);
    let alpha = if state.pressed == Some(Target::NavCast) {
        PRESSED_ALPHA
    } else {
        1.0
    };
    cr.push_group();
    if let Some(pixbuf) = &state.chrome.cast {
        draw_glyph(cr, pixbuf, &rect, NAV_GLYPH_SIZE)?;
    } else {
        set_source(cr, colors.muted);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(ACTION_LABEL_SIZE);
        if let Ok(ext) = cr.text_extents("cast") {
            let c = rect.center();
            cr.move_to(c.x - ext.width() / 2.0, c.y + ext.height() / 2.0);
            cr.show_text("cast")?;
        }
    }
    cr.pop_group_to_source()?;
    cr.paint_with_alpha(alpha)
}

/// Fits a glyph pixbuf into the top of a hit box, horizontally centered.
fn draw_glyph(
    cr: &Context,
    pixbuf: &Pixbuf,
    rect: &Rect,
    size: f64,
) -> Result<(), cairo::Error> {
    let scale = size / pixbuf.width().max(pixbuf.height()) as f64;
    let (iw, ih) = (pixbuf.width() as f64 * scale, pixbuf.height() as f64 * scale);

    cr.save()?;
    cr.translate(rect.center().x - iw / 2.0, rect.y + (size - ih) / 2.0);
    cr.scale(scale, scale);
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    cr.restore()
}

fn rounded_rect(cr: &Context, rect: Rect, radius: f64) {
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    cr.new_sub_path();
    cr.arc(x + w - radius, y + radius, radius, -PI / 2.0, 0.0);
    cr.arc(x + w - radius, y + h - radius, radius, 0.0, PI / 2.0);
    cr.arc(x + radius, y + h - radius, radius, PI / 2.0, PI);
    cr.arc(x + radius, y + radius, radius, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn wrap_text(cr: &Context, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let width = cr
            .text_extents(&candidate)
            .map(|e| e.width())
            .unwrap_or(0.0);
        if width > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
