pub mod annotations;
pub mod cfg;
pub mod drawme;
pub mod file_util;
pub mod image_util;
pub mod pipeline;
pub mod result;
pub mod tracing_setup;
pub mod view;
pub use annotations::{parse_line, read_annotations, AnnoReader, AnnoRecord};
pub use cfg::{Cfg, CfgOverrides};
pub use drawme::{DrawMarker, MarkerStyle};
pub use pipeline::{annotate, render, run, RunSummary};
pub use result::{KpError, KpResult};
pub use view::{DisplaySink, EguiDisplay};
