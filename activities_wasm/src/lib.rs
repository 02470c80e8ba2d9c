pub mod escape;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod handlers;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use app::start_app;
#[cfg(target_arch = "wasm32")]
pub use dom::{AppView, StatusKind};
#[cfg(target_arch = "wasm32")]
pub use error::AppError;
#[cfg(target_arch = "wasm32")]
pub use handlers::{apply_signup_outcome, apply_unregister_outcome};
#[cfg(target_arch = "wasm32")]
pub use logging::LogLevel;
