#![warn(missing_docs)]

//! # stems-demucs: Demucs stem separation from Rust
//!
//! Runs the [Demucs](https://github.com/facebookresearch/demucs) command line
//! tool on an audio file and locates the stems it writes.
//!
//! ## Features
//!
//! - **Models** - `htdemucs`, `htdemucs_ft`, `mdx_extra`, `mdx_extra_q`
//! - **Separate** - run demucs into a chosen or temporary directory
//! - **Stems** - map `drums`, `bass`, `other`, `vocals` to their WAV files
//! - **CLI** - `stems-demucs separate song.mp3`
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use stems_demucs::{Separator, Stem};
//!
//! let separator = Separator::new("htdemucs_ft", "cpu")?;
//! let separated = separator.separate("song.mp3", Some(Path::new("out")), None)?;
//! let stems = separator.get_stems(&separated);
//! if let Some(vocals) = stems.get(&Stem::Vocals) {
//!     println!("vocals: {}", vocals.display());
//! }
//! # Ok::<(), stems_demucs::DemucsError>(())
//! ```

// Declare modules
/// Models, stems and configuration
pub mod core;
/// Error types for separation
pub mod error;
/// External command execution
pub mod runner;
/// Demucs orchestration
pub mod separator;

// Export public types
pub use core::{Model, SeparationConfig, Stem, StemInfo, StemMap};
pub use error::{DemucsError, DemucsResult};
pub use runner::{CommandOutput, CommandRunner, Invocation, SystemRunner};
pub use separator::{DemucsCommand, Separator, get_stems, quick_separate, quick_separate_with};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
