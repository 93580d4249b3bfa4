use crate::{
    drawme::MarkerStyle,
    file_util::DEFAULT_HOMEDIR,
    image_util::bgr_to_rgb,
    kperr,
    result::{to_kp, KpResult},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub const CFG_FILENAME: &str = "kpview_cfg.toml";

fn get_default_image_path() -> PathBuf {
    PathBuf::from("test/1.bmp")
}
fn get_default_anno_path() -> PathBuf {
    PathBuf::from("out.txt")
}
fn get_default_window_title() -> String {
    "image".to_string()
}
fn get_default_radius() -> u32 {
    2
}
fn get_default_color_bgr() -> [u8; 3] {
    [0, 255, 255]
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MarkerCfg {
    #[serde(default = "get_default_radius")]
    pub radius: u32,
    /// Blue, green, red. Kept in this order so colors from OpenCV-style tooling can be pasted.
    #[serde(default = "get_default_color_bgr")]
    pub color_bgr: [u8; 3],
}
impl Default for MarkerCfg {
    fn default() -> Self {
        MarkerCfg {
            radius: get_default_radius(),
            color_bgr: get_default_color_bgr(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    #[serde(default = "get_default_image_path")]
    pub image_path: PathBuf,
    #[serde(default = "get_default_anno_path")]
    pub anno_path: PathBuf,
    #[serde(default = "get_default_window_title")]
    pub window_title: String,
    #[serde(default)]
    pub marker: MarkerCfg,
}
impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            image_path: get_default_image_path(),
            anno_path: get_default_anno_path(),
            window_title: get_default_window_title(),
            marker: MarkerCfg::default(),
        }
    }
}

/// Values passed on the command line take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CfgOverrides {
    pub image_path: Option<PathBuf>,
    pub anno_path: Option<PathBuf>,
    pub radius: Option<u32>,
}

impl Cfg {
    pub fn with_overrides(mut self, overrides: CfgOverrides) -> Self {
        if let Some(image_path) = overrides.image_path {
            self.image_path = image_path;
        }
        if let Some(anno_path) = overrides.anno_path {
            self.anno_path = anno_path;
        }
        if let Some(radius) = overrides.radius {
            self.marker.radius = radius;
        }
        self
    }
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            radius: self.marker.radius,
            color: bgr_to_rgb(self.marker.color_bgr),
        }
    }
}

pub fn get_cfg_path() -> PathBuf {
    DEFAULT_HOMEDIR.join(CFG_FILENAME)
}

pub fn get_log_folder(home_folder: &Path) -> PathBuf {
    home_folder.join("logs")
}

pub fn read_cfg_from_path(cfg_path: &Path) -> KpResult<Cfg> {
    if cfg_path.exists() {
        let cfg_str = fs::read_to_string(cfg_path)
            .map_err(|e| kperr!("could not read cfg {:?}, {:?}", cfg_path, e))?;
        let cfg = toml::from_str(&cfg_str)
            .map_err(|e| kperr!("could not parse cfg {:?}, {}", cfg_path, e))?;
        info!("read cfg from {cfg_path:?}");
        Ok(cfg)
    } else {
        info!("no cfg found at {cfg_path:?}, using defaults");
        Ok(Cfg::default())
    }
}

pub fn write_cfg_to_path(cfg: &Cfg, cfg_path: &Path) -> KpResult<()> {
    if let Some(cfg_parent) = cfg_path.parent() {
        fs::create_dir_all(cfg_parent).map_err(to_kp)?;
    }
    let cfg_str = toml::to_string_pretty(cfg).map_err(to_kp)?;
    fs::write(cfg_path, cfg_str).map_err(|e| kperr!("could not write {:?}, {:?}", cfg_path, e))?;
    info!("wrote cfg to {cfg_path:?}");
    Ok(())
}
