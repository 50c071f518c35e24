pub mod api;
pub mod app;
pub mod board;
pub mod config;
pub mod format;
pub mod model;
pub mod surface;

pub use api::{ActivityApi, ApiError, GlooApi};
pub use board::{ActivityBoard, RemovalOutcome};
pub use config::BoardConfig;
pub use model::{Activity, ActivityCollection};
pub use surface::{
    ActivityCard, BoardSurface, ListView, ParticipantItem, StatusKind, StatusMessage,
};
