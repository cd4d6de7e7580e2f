//! JSON Import/Export für Walkmap-Karten.
//!
//! Eine Datei enthält die Karten-ID (falls bekannt) und alle Marker in
//! Listenreihenfolge samt Sortierschlüssel und Notiz.

mod format;
pub mod parser;
pub mod writer;

pub use format::{MapDocument, MarkerRecord, DOCUMENT_VERSION};
pub use parser::{parse_map_document, LoadedMap};
pub use writer::write_map_document;
