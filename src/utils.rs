use std::{
    num::NonZero,
    path::{Path, PathBuf},
    thread,
};

use chrono::Local;

/// Number of render tasks worth spawning on this machine.
pub fn ideal_processors() -> usize {
    thread::available_parallelism()
        .map(NonZero::get)
        .unwrap_or(1)
}

/// `render_YYYYmmdd_HHMMSS.png` in the current directory.
pub fn timestamped_render_path() -> PathBuf {
    PathBuf::from(format!(
        "render_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Path of frame `index` in a numbered sequence derived from `base`, e.g.
/// `out.png` becomes `out_003.png`.
pub fn sequence_path(base: &Path, index: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "render".into());
    let extension = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".into());
    base.with_file_name(format!("{}_{:03}.{}", stem, index, extension))
}
