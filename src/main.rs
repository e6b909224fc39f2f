use winit::event_loop::{ControlFlow, EventLoop};

mod animation;
mod app;
mod card;
mod error;
mod model;
mod renderer;
mod settings;
mod texture;
mod ui;

use crate::app::AppHandler;
use crate::error::CardError;
use crate::model::Student;
use crate::settings::Settings;

pub const CONFY_APP_NAME: &str = "ctu-idcard";

fn main() -> Result<(), CardError> {
    env_logger::init();

    let settings = Settings::load();
    log::info!("Images from {}", settings.display.asset_dir);

    let event_loop = EventLoop::new()?;
    // Frames are only drawn on demand; the app asks for more while the card moves.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = AppHandler::new(tokio::runtime::Runtime::new()?, Student::sample(), settings);

    event_loop.run_app(&mut handler)?;

    Ok(())
}
