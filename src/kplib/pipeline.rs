use image::RgbImage;
use tracing::{debug, info};

use crate::{
    annotations::{AnnoReader, AnnoRecord},
    cfg::Cfg,
    drawme::{DrawMarker, MarkerStyle},
    image_util::load_rgb,
    result::KpResult,
    view::DisplaySink,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    pub n_markers: usize,
}

/// Draws one marker per record in the given order and returns how many were drawn.
/// The first failing record aborts, markers drawn until then stay on the canvas.
pub fn annotate<D, I>(canvas: &mut D, records: I, style: &MarkerStyle) -> KpResult<usize>
where
    D: DrawMarker + ?Sized,
    I: IntoIterator<Item = KpResult<AnnoRecord>>,
{
    let mut n_markers = 0;
    for record in records {
        let record = record?;
        debug!("marker '{}' at {:?}", record.label, record.center());
        canvas.draw_marker(record.center(), style);
        n_markers += 1;
    }
    Ok(n_markers)
}

/// Loads the image and draws all annotations onto it. The image is loaded before the
/// annotation file is opened.
pub fn render(cfg: &Cfg) -> KpResult<(RgbImage, usize)> {
    let mut im = load_rgb(&cfg.image_path)?;
    let n_markers = {
        let reader = AnnoReader::open(&cfg.anno_path)?;
        annotate(&mut im, reader, &cfg.marker_style())?
    };
    info!("drew {n_markers} markers from {:?}", cfg.anno_path);
    Ok((im, n_markers))
}

pub fn run<S: DisplaySink + ?Sized>(cfg: &Cfg, sink: &mut S) -> KpResult<RunSummary> {
    let (im, n_markers) = render(cfg)?;
    sink.show(&cfg.window_title, &im)?;
    Ok(RunSummary {
        width: im.width(),
        height: im.height(),
        n_markers,
    })
}
