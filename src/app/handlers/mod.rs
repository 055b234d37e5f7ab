//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und
//! Use-Cases.

pub mod dialog;
pub mod drawing;
pub mod fields;
pub mod import;
pub mod overlay;
pub mod view;
