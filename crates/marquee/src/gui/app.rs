use crate::config;
use crate::events::AppEvent;
use crate::gui::carousel::{self, State};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use backlot::geom::Point;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    DragBegin,
    DragMoved(f64),
    DragEnd(f64),
    PageStep(i64),
    Press(Point),
    Release,
    Tick(i64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (State, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Marquee"),
            add_css_class: "marquee-window",

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "marquee-screen",

                connect_resize[sender] => move |_, w, h| {
                    sender.input(AppMsg::Resize(w, h));
                },

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, _, _| {
                        sender.input(AppMsg::DragBegin);
                    },
                    connect_drag_update[sender] => move |_, dx, _| {
                        sender.input(AppMsg::DragMoved(dx));
                    },
                    connect_drag_end[sender] => move |_, dx, _| {
                        sender.input(AppMsg::DragEnd(dx));
                    },
                },

                add_controller = gtk::GestureClick {
                    set_button: 0, // Listen to all buttons
                    connect_pressed[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Press(Point::new(x, y)));
                    },
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Release);
                    },
                },

                add_controller = gtk::EventControllerScroll::new(
                    gtk::EventControllerScrollFlags::BOTH_AXES,
                ) {
                    connect_scroll[sender] => move |_, dx, dy| {
                        // wheel input pages one card at a time
                        let delta = if dx.abs() > dy.abs() { dx } else { dy };
                        if delta != 0.0 {
                            sender.input(AppMsg::PageStep(delta.signum() as i64));
                        }
                        glib::Propagation::Claimed
                    },
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (state, config_path, rx) = init;

        theme::load_css();
        window::init_window(&root);

        let state = Rc::new(RefCell::new(state));

        let model = AppModel {
            state: state.clone(),
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = carousel::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // the settle animation rides the frame clock
        let tick_sender = sender.clone();
        widgets.drawing_area.add_tick_callback(move |_, clock| {
            tick_sender.input(AppMsg::Tick(clock.frame_time()));
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(w, h) => {
                self.state.borrow_mut().set_viewport(w as f64, h as f64);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragBegin => {
                let mut state = self.state.borrow_mut();
                state.begin_drag();
                // a drag cancels any held press dim
                state.release();
                drop(state);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragMoved(dx) => {
                if self.state.borrow_mut().drag_update(dx, Instant::now()) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::DragEnd(dx) => {
                self.state.borrow_mut().end_drag(dx);
                self.drawing_area.queue_draw();
            }
            AppMsg::PageStep(delta) => {
                self.state.borrow_mut().step_page(delta);
            }
            AppMsg::Press(point) => {
                if self.state.borrow_mut().press(point) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Release => {
                if self.state.borrow_mut().release() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::Tick(frame_us) => {
                if self.state.borrow_mut().tick(frame_us) {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.state
                        .borrow_mut()
                        .apply_config(new_config.layout, new_config.scroll);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
