//! Desktop stand-in for a share sheet: the shared photos are written as PNG
//! files into a new folder, which is then handed to the OS to open.

use photo_search_core::{PhotoImage, ShareError};
use std::{fs, path};

pub fn export_images(
    images: &[PhotoImage],
    share_dir: &path::Path,
    now: chrono::DateTime<chrono::Local>,
) -> Result<path::PathBuf, ShareError> {
    if images.is_empty() {
        return Err(ShareError::NothingToShare);
    }

    let folder = unique_folder(share_dir, &format!("shared-{}", now.format("%Y%m%d-%H%M%S")));
    fs::create_dir_all(&folder)?;

    for (i, image) in images.iter().enumerate() {
        let file = folder.join(format!("photo-{:02}.png", i + 1));
        image.save_with_format(&file, image::ImageFormat::Png)?;
    }

    tracing::info!("Exported {} photos to {}", images.len(), folder.display());
    Ok(folder)
}

fn unique_folder(share_dir: &path::Path, name: &str) -> path::PathBuf {
    let mut folder = share_dir.join(name);
    let mut n = 1;
    while folder.exists() {
        n += 1;
        folder = share_dir.join(format!("{name}-{n}"));
    }
    folder
}
