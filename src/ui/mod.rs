pub mod app;
pub mod app_context;
pub mod components;

pub use app::*;
pub use app_context::{use_app_context, AppContext};
pub use components::*;

pub use app::{MAIN_CSS, TAILWIND_CSS};
