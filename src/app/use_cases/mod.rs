//! Use-Cases der Application-Layer-Orchestrierung.

pub mod annotation;
pub mod camera;
pub mod file_io;
pub mod markers;
pub mod session;
pub mod viewport;
