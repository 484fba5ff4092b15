//! Camera-guided Rubik's cube scanning core
//!
//! Guides a user through scanning all six faces of a physical cube, keeps a
//! canonical model of the sticker colors, animates a 3D proxy of the scanned
//! state, and hands the completed cube to an external solver. The camera,
//! the real 3D pipeline, and the solving algorithm are collaborators behind
//! trait boundaries; everything here runs synchronously inside one tick loop.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod solver;
pub mod ui;
