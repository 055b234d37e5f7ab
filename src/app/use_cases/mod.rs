//! Use-Case-Funktionen: die eigentliche Anwendungslogik pro Feature.

pub mod camera;
pub mod drawing;
pub mod fields;
pub mod import;
pub mod overlay;
pub mod viewport;
