#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod clock;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod hud;
pub mod input;
pub mod mode;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod shape;

pub use app::SketchApp;
pub use clock::{ClockTime, TimeAngle};
pub use config::SketchConfig;
pub use document::{Document, EventOutcome};
pub use error::{SketchError, SketchResult};
pub use geometry::{CanvasSize, Point};
pub use input::{InputEvent, KeyCommand};
pub use mode::Mode;
pub use raster::Rasterizer;
pub use renderer::Renderer;
pub use scene::Scene;
pub use shape::Shape;
