//! Utility functions

use crate::constants::APP_NAME;
use std::path::{Path, PathBuf};

// Three columns with cards; square viewBox so it doubles as the window icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="10" fill="#18181b"/><rect x="8" y="10" width="14" height="44" rx="3" fill="#27272a"/><rect x="25" y="10" width="14" height="44" rx="3" fill="#27272a"/><rect x="42" y="10" width="14" height="44" rx="3" fill="#27272a"/><rect x="10" y="13" width="10" height="8" rx="2" fill="#a1a1aa"/><rect x="10" y="24" width="10" height="8" rx="2" fill="#a1a1aa"/><rect x="27" y="13" width="10" height="8" rx="2" fill="#fbbf24"/><rect x="44" y="13" width="10" height="8" rx="2" fill="#34d399"/><rect x="44" y="24" width="10" height="8" rx="2" fill="#34d399"/><rect x="44" y="35" width="10" height="8" rx="2" fill="#34d399"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image.
/// Returns `None` if the size is zero or the SVG fails to parse.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let unmul = |c: u8| (c as u16 * 255 / a as u16) as u8;
                [unmul(p.red()), unmul(p.green()), unmul(p.blue()), a]
            }
        })
        .collect()
}

/// Directory holding settings.json and logs/
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Log directory under the data dir
pub fn logs_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Create the data dir and its logs/ subdirectory. Runs before logging is up,
/// so failures are returned for the caller to report afterwards.
pub fn ensure_data_dirs(data_dir: &Path) -> Vec<(PathBuf, std::io::Error)> {
    [data_dir.to_path_buf(), logs_dir(data_dir)]
        .into_iter()
        .filter_map(|dir| std::fs::create_dir_all(&dir).err().map(|e| (dir, e)))
        .collect()
}
