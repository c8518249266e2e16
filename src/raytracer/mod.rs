pub mod camera;
pub mod error;
pub mod frame;
pub mod image;
pub mod light;
pub mod ray;
pub mod reflection;
pub mod render_backend;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod shading;

pub use camera::*;
pub use error::*;
pub use frame::*;
pub use image::*;
pub use light::*;
pub use ray::*;
pub use reflection::*;
pub use render_backend::*;
pub use renderer::*;
pub use scene::*;
pub use settings::*;
