use crate::clock::{ClockTime, TimeAngle};
use crate::config::SketchConfig;
use crate::document::{Document, EventOutcome};
use crate::hud;
use crate::input::InputHandler;
use crate::renderer::{BACKGROUND_COLOR, CanvasView, Renderer};

/// View toggles restored between runs. The drawing itself is never saved.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ViewPreferences {
    pub show_help: bool,
    pub show_control_points: bool,
}

impl ViewPreferences {
    fn of(document: &Document) -> Self {
        Self {
            show_help: document.show_help(),
            show_control_points: document.show_control_points(),
        }
    }
}

/// The windowed sketch pad: owns the document and feeds it one frame of input at a time.
#[derive(Debug)]
pub struct SketchApp {
    document: Document,
    renderer: Renderer,
    input: InputHandler,
    utc_offset_minutes: Option<i32>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, mut config: SketchConfig) -> Self {
        if let Some(prefs) = cc
            .storage
            .and_then(|storage| eframe::get_value::<ViewPreferences>(storage, eframe::APP_KEY))
        {
            log::debug!("Restored view preferences: {prefs:?}");
            config.show_help = prefs.show_help;
            config.show_control_points = prefs.show_control_points;
        }
        Self::from_config(&config)
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            document: Document::from_config(config),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            utc_offset_minutes: config.utc_offset_minutes,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &ViewPreferences::of(&self.document));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut quit = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let view = CanvasView::new(response.rect, self.document.canvas());

                for event in self.input.process_input(ctx, &view) {
                    if self.document.handle_event(event) == EventOutcome::Quit {
                        quit = true;
                    }
                }

                // one time reading per refresh, shared by every clock
                let angle = TimeAngle::new(ClockTime::now(self.utc_offset_minutes));
                let scene = self.document.scene(&angle);
                self.renderer.render(
                    &painter,
                    &view,
                    &scene,
                    &hud::menu_lines(&self.document),
                    &hud::status_line(&self.document),
                );
            });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Clock hands move on their own
        ctx.request_repaint();
    }
}
