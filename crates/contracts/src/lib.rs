//! Wire types shared between the menu frontend and the remote REST API.

pub mod domain;
pub mod shared;
pub mod system;
