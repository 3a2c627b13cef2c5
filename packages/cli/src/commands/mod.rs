pub mod entries;
pub mod init;
pub mod lines;
pub mod map;

pub use entries::{entries, EntriesArgs};
pub use init::{init, InitArgs};
pub use lines::{lines, LinesArgs};
pub use map::{map, MapArgs};

use anyhow::{anyhow, Context, Result};
use apparatus_typesetting::{build_line_map, parse_tokens, LineMapOptions, TypesettingInfo};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON token file and compute its typesetting info
fn load_typesetting(path: &Path, options: &LineMapOptions) -> Result<TypesettingInfo> {
    if !path.is_file() {
        return Err(anyhow!("Token file does not exist: {}", path.display()));
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let tokens =
        parse_tokens(&content).with_context(|| format!("Invalid token file {}", path.display()))?;
    debug!(path = %path.display(), tokens = tokens.len(), "Loaded tokens");

    Ok(build_line_map(&tokens, options))
}
