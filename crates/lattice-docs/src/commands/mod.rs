pub mod build;
pub mod clean;
pub mod styles;
pub mod watch;
