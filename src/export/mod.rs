pub mod obj;
pub mod text;

use log::warn;
use std::fs;
use std::path::Path;

use crate::engines::flora::Tree;
use crate::error::{ArboretumError, Result};

/// Writes the full dump of one tree under `outdir`: genome rules, raw and
/// translated body, and OBJ meshes for the skeleton and the seeds.
///
/// Fails if the directory already exists and `overwrite` is not set.
pub fn write_tree(outdir: &Path, overwrite: bool, tree: &Tree) -> Result<()> {
    if outdir.exists() {
        if !overwrite {
            return Err(ArboretumError::Configuration(format!(
                "Directory {} already exists",
                outdir.display()
            )));
        }
        warn!("replacing files in output directory {}", outdir.display());
    } else {
        fs::create_dir_all(outdir)?;
    }

    let precision = tree.growth.collision_precision;
    fs::write(outdir.join("genome.txt"), text::genome_as_text(&tree.genome))?;
    fs::write(outdir.join("body.txt"), text::body_as_text(tree))?;
    fs::write(
        outdir.join("body_translated.txt"),
        text::translated_body_as_text(tree),
    )?;
    fs::write(
        outdir.join("skeleton.obj"),
        obj::segments_as_obj(&tree.segments, precision),
    )?;
    fs::write(
        outdir.join("seeds.obj"),
        obj::seeds_as_obj(&tree.seeds, precision),
    )?;
    Ok(())
}
