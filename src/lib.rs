#![allow(clippy::many_single_char_names)]

pub mod app;
pub mod camera;
pub mod controls;
pub mod error;
pub mod frame;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod scene;
pub mod skybox;

#[cfg(feature = "preview")]
pub mod preview;
