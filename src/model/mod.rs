//! Typed models

mod app;
mod app_user;
mod auth;
mod group;
mod links;

pub use app::*;
pub use app_user::*;
pub use auth::*;
pub use group::*;
pub use links::*;
