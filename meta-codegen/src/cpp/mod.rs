//! C++ reflection glue.

mod meta_file;
mod registration;

pub use meta_file::MetaFile;
pub use registration::{Namespace, RegistrationEntry, RegistrationTable};
