//! Frame and plane buffers used by the pipeline stages.
//!
//! - [`ColorFrame`] owns an interleaved RGB frame; [`ColorView`] borrows a band
//!   of its rows.
//! - [`GrayImageU8`] holds grayscale planes and binary edge masks.
//! - [`ImageF32`] is the floating-point working buffer of the filters.
pub mod color;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::color::{ColorFrame, ColorView};
pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::GrayImageU8;
