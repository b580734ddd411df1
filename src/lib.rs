//! # WonderGame
//!
//! A terminal-haunted narrative game: a text scene that opens into 2D
//! walkable rooms, with an embedded scene editor for building them.
//!
//! ## Architecture
//!
//! The workspace is organized as four library crates plus this binary:
//!
//! 1. **wondergame-core** - room data model, geometry, label metrics,
//!    and the shared JSON room file format
//! 2. **wondergame-editor** - the embedded room editor: selection,
//!    grouped drag/resize, property inspector, save/revert
//! 3. **wondergame-explore** - the walkable mode over the same room files
//! 4. **wondergame-script** - the text command interpreter behind the
//!    terminal scenes
//!
//! The binary wires the script interpreter to stdin/stdout and follows
//! its transitions into rooms.

pub use wondergame_core as core;
pub use wondergame_editor as editor;
pub use wondergame_explore as explore;
pub use wondergame_script as script;

/// Initializes tracing for the binary: `RUST_LOG`-filtered, defaulting
/// to INFO, written to stderr so log lines never interleave with game
/// text on stdout.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
