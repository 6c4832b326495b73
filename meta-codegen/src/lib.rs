// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Reflection glue emitter.
//!
//! Turns the [`ScanResult`](cavemeta_scan::ScanResult) of one header into a
//! `<stem>.meta.cpp` translation unit that specializes
//! `MetaDataTable<Class>::GetFields()`, and drives that process for every
//! input listed in a manifest.

pub mod builder;
mod cpp;
mod error;
mod generator;
mod settings;

pub use cpp::{MetaFile, Namespace, RegistrationEntry, RegistrationTable};
pub use error::{GenerateError, Result};
pub use generator::{FileReport, FileStatus, GenerateResult, Generator, Mode};
pub use settings::EmitSettings;
