//! The Gilbert-Johnson-Keerthi intersection test.

pub use self::gjk::*;

mod gjk;
