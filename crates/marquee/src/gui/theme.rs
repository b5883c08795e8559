use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub text: Srgba<f64>,
    pub muted: Srgba<f64>,
    pub accent: Srgba<f64>,
    pub panel: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            background: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                Some(1.0),
            ),
            text: Self::lookup_color(
                context,
                "theme_text_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                Some(1.0),
            ),
            // #747474, the credit/label grey
            muted: Self::lookup_color(
                context,
                "insensitive_fg_color",
                Srgba::new(0.455, 0.455, 0.455, 1.0),
                Some(1.0),
            ),
            accent: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.898, 0.035, 0.078, 1.0),
                Some(1.0),
            ),
            panel: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.15, 0.15, 0.15, 1.0),
                Some(1.0),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.marquee-window, .marquee-screen {
    background: none;
    background-color: #000000;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
