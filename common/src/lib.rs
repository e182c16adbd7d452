#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains everything which is shared between the crates of this workspace.

mod error;

pub use error::{TreeError, TreeResult};

pub mod logging;
