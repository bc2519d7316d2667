//! Single-page portfolio site built with Dioxus.
//!
//! Most of the crate is presentation. The behaviour worth testing lives in
//! [`tracker`] (which section is in view) and [`loading_gate`] (one-shot
//! entrance delay), with [`subscription`] and [`timer`] giving host callbacks a
//! scoped lifetime.

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod loading_gate;
pub mod pages;
pub mod subscription;
pub mod theme;
pub mod timer;
pub mod tracker;
pub mod types;

pub use content::Content;
pub use error::{ContentError, ContentResult, DomError};
pub use loading_gate::LoadingGate;
pub use subscription::Subscription;
pub use tracker::{ActiveSectionTracker, LayoutProbe, LayoutSnapshot, SectionExtent};
