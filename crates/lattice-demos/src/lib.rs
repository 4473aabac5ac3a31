//! Demo components embedded in the Lattice documentation site.
//!
//! Each demo is a small view-model illustrating one framework capability:
//! writing to a caller-owned observable ([`LikeWidget`]), timer-driven replay
//! of a CSS entrance animation ([`AnimationShowcase`]), clearing and
//! refilling an observable sequence to drive staggered list entrances
//! ([`SequenceDemo`]/[`PersonCard`]), and displaying a library version from
//! the shared lookup table ([`VersionDisplay`]).
//!
//! [`install::register_demo_components`] registers all of them, with their
//! inline templates, against a [`lattice_registry::ComponentRegistry`].

pub mod animation_showcase;
pub mod install;
pub mod like_widget;
pub mod sequence_demo;
pub mod version_display;

pub use animation_showcase::{AnimationShowcase, ANIMATIONS};
pub use install::register_demo_components;
pub use like_widget::LikeWidget;
pub use sequence_demo::{MountOptions, PersonCard, SequenceDemo, PEOPLE};
pub use version_display::VersionDisplay;
