/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{find_glyph_config, load_glyph_config};
pub use types::GlyphConfig;
pub(crate) use types::{default_interface, default_model_file};
