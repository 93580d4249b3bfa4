use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};

/// Everything that can go wrong while loading, parsing, drawing or showing ends up here.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct KpError {
    msg: String,
}
impl KpError {
    pub fn new(msg: &str) -> KpError {
        KpError {
            msg: msg.to_string(),
        }
    }
    pub fn msg(&self) -> &str {
        &self.msg
    }
}
impl Display for KpError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for KpError {}
/// kpview's result type with [`KpError`](KpError) as error type.
pub type KpResult<U> = Result<U, KpError>;

/// Creates a [`KpError`](KpError) with a formatted message.
/// ```rust
/// # use std::error::Error;
/// use kplib::{kperr, result::KpError};
/// # fn main() -> Result<(), Box<dyn Error>> {
/// assert_eq!(kperr!("some error {}", 1), KpError::new(format!("some error {}", 1).as_str()));
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! kperr {
    ($s:literal) => {
        $crate::result::KpError::new(format!($s).as_str())
    };
    ($s:literal, $( $exps:expr ),*) => {
        $crate::result::KpError::new(format!($s, $($exps,)*).as_str())
    }
}

pub fn to_kp<E: Debug>(e: E) -> KpError {
    kperr!(
        "wrapped error type is '{:?}', error message is '{:?}'",
        std::any::type_name::<E>(),
        e
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kp() {
        let e = to_kp(std::io::Error::new(std::io::ErrorKind::NotFound, "nope"));
        assert!(e.msg().contains("nope"));
        assert!(e.msg().contains("std::io::error::Error"));
    }
}
