mod app;
mod dom;
mod panel;
mod render;

pub use app::run;
