use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::{
    file_util::check_file_exists,
    kperr,
    result::{to_kp, KpResult},
};

pub fn read_image(path: &Path) -> KpResult<DynamicImage> {
    check_file_exists(path)?;
    image::io::Reader::open(path)
        .map_err(to_kp)?
        .with_guessed_format()
        .map_err(to_kp)?
        .decode()
        .map_err(|e| kperr!("could not decode image {:?}. {:?}", path, e))
}

/// Reads the image in color mode, i.e., 8 bits per channel, 3 channels, alpha dropped.
pub fn load_rgb(path: &Path) -> KpResult<RgbImage> {
    let im = read_image(path)?;
    info!(
        "loaded {:?} with shape {}x{} and color type {:?}",
        path,
        im.width(),
        im.height(),
        im.color()
    );
    Ok(im.into_rgb8())
}

pub fn bgr_to_rgb(bgr: [u8; 3]) -> [u8; 3] {
    let [b, g, r] = bgr;
    [r, g, b]
}
