//! Manga Slayer Services Layer
//!
//! Pluggable services the HTTP handlers depend on through traits: searching a
//! source's catalog, probing a source URL before it is saved, and translating
//! chapter titles. The shipped implementations are placeholders that return
//! synthetic data without scraping or calling a translation API.

pub mod services;

pub use services::catalog::{MangaCatalog, SampleCatalog};
pub use services::probe::{HttpSourceProbe, ProbeOutcome, SourceProbe};
pub use services::translation::{translate_or_original, MarkerTranslator, Translator};
