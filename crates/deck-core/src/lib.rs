pub mod camera;
pub mod config;
pub mod constants;
pub mod content;
pub mod controls;
pub mod easing;
pub mod error;
pub mod hover;
pub mod interaction;
pub mod picking;
pub mod presenter;
pub mod scene;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use content::*;
pub use controls::*;
pub use easing::*;
pub use error::*;
pub use hover::*;
pub use interaction::*;
pub use picking::*;
pub use presenter::*;
pub use scene::*;
