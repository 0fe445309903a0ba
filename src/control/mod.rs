pub mod app;
pub mod location;
pub mod session;
