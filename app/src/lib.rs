//! Comments list client built on `comments-core`.
//!
//! # Overview
//! `CommentsApiService` executes the core's request over ureq,
//! `CommentsRepositoryImpl` runs it on a dispatcher and normalizes the
//! outcome into a `NetworkResult`, and `CommentsViewModel` publishes that
//! result for the screen. `AppModules` wires the graph by hand.

pub mod config;
pub mod modules;
pub mod repository;
pub mod screen;
pub mod transport;

pub use config::{AppConfig, Cli, ConfigError};
pub use modules::AppModules;
pub use repository::{CommentsRepository, CommentsRepositoryImpl};
pub use screen::{render, CommentsViewModel, ScreenState};
pub use transport::{CommentsApiService, CommentsTransport};
