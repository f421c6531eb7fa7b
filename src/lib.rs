//! genrsrc: build-time resource compiler
//!
//! Embeds resource files into a program through two generated artifacts: an
//! assembly file that `.incbin`s every file under a global symbol, and a C++
//! header exposing each resource as a `constexpr` object in a namespace tree
//! that mirrors the resources' directories.

pub mod bundle;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod logging;
pub mod resource;
pub mod symbol;
pub mod tooling;
pub mod tree;

pub use bundle::Bundle;
pub use error::{GenError, Result};
pub use generate::{generate, GenerateRequest, GenerationReport};
pub use resource::Resource;
