use crate::{kperr, result::KpResult};
use lazy_static::lazy_static;
use std::{
    fmt::Debug,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{error, info};

lazy_static! {
    pub static ref DEFAULT_TMPDIR: PathBuf = std::env::temp_dir().join("kpview");
}
lazy_static! {
    pub static ref DEFAULT_HOMEDIR: PathBuf = match dirs::home_dir() {
        Some(p) => p.join(".kpview"),
        _ => std::env::temp_dir().join("kpview"),
    };
}

/// Fails with a readable message if `path` does not point to a file.
pub fn check_file_exists(path: &Path) -> KpResult<()> {
    match fs::metadata(path) {
        Ok(md) if md.is_file() => Ok(()),
        Ok(_) => Err(kperr!("{path:?} is not a file")),
        Err(e) => Err(kperr!("could not access {path:?}, {e}")),
    }
}

pub fn get_test_folder() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/test_data")
}

pub struct Defer<F: FnMut()> {
    pub func: F,
}
impl<F: FnMut()> Drop for Defer<F> {
    fn drop(&mut self) {
        (self.func)();
    }
}
#[macro_export]
macro_rules! defer {
    ($f:expr) => {
        let _dfr = $crate::file_util::Defer { func: $f };
    };
}
pub fn checked_remove<'a, P: AsRef<Path> + Debug>(
    path: &'a P,
    func: fn(p: &'a P) -> io::Result<()>,
) {
    match func(path) {
        Ok(_) => info!("removed {path:?}"),
        Err(e) => error!("could not remove {path:?} due to {e:?}"),
    }
}
#[macro_export]
macro_rules! defer_file_removal {
    ($path:expr) => {
        let func = || $crate::file_util::checked_remove($path, std::fs::remove_file);
        $crate::defer!(func);
    };
}

#[test]
fn test_default_paths() {
    assert!(DEFAULT_HOMEDIR.ends_with(".kpview"));
    assert!(DEFAULT_TMPDIR.ends_with("kpview"));
}

#[test]
fn test_check_file_exists() {
    let folder = get_test_folder();
    assert!(check_file_exists(&folder.join("out.txt")).is_ok());
    assert!(check_file_exists(&folder).is_err());
    assert!(check_file_exists(&folder.join("doesnotexist.txt")).is_err());
}
