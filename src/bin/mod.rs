pub mod ascii_utils;
pub mod cell;
pub mod description;
pub mod direction;
pub mod error;
pub mod json_utils;
pub mod map;
pub mod maze;
pub mod network;
pub mod session;
pub mod walls;
