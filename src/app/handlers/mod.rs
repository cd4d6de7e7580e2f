//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod annotation;
pub mod dialog;
pub mod file_io;
pub mod markers;
pub mod session;
pub mod view;
