pub mod application_renderers;
pub mod buffer;
pub mod data;
pub mod geometry;
pub mod pipeline;
pub mod point_renderer;
pub mod render_engine;
pub mod sphere_renderer;
pub mod texture;
