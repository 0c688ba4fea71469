#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod collision;
pub mod geometry;
pub mod mask;
pub mod pbm;

pub use collision::{collision, within};
pub use mask::{BitmapMask, BoxMask, Grid, InvertMask, Mask};
pub use pbm::DecodeError;

#[cfg(test)]
pub(crate) mod test_data {
    pub const BULLET_ASCII: &[u8] = include_bytes!("../test-data/bullet-ascii.pbm");
    pub const BULLET_BINARY: &[u8] = include_bytes!("../test-data/bullet-binary.pbm");
    pub const FRAME_ASCII: &[u8] = include_bytes!("../test-data/frame-ascii.pbm");
    pub const FRAME_BINARY: &[u8] = include_bytes!("../test-data/frame-binary.pbm");
    pub const SOLID_ASCII: &[u8] = include_bytes!("../test-data/solid-ascii.pbm");
    pub const SOLID_BINARY: &[u8] = include_bytes!("../test-data/solid-binary.pbm");
    pub const DOT_ASCII: &[u8] = include_bytes!("../test-data/dot-ascii.pbm");
    pub const DOT_BINARY: &[u8] = include_bytes!("../test-data/dot-binary.pbm");
    pub const COMMENTED_ASCII: &[u8] = include_bytes!("../test-data/commented-ascii.pbm");
}
