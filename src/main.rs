//! theme-resolve: resolve utility-CSS theme settings per build target
//!
//! Reads a project's settings files, validates them and prints the merged
//! configuration an external style generator consumes.

use anyhow::Result;

fn main() -> Result<()> {
    theme_resolve::cli::run()
}
