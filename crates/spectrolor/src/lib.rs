//! # Spectrolor
//!
//! Spectrolor turns measured reflectance spectra into display-ready colors.
//! It implements the two classic colorimetric transforms:
//!
//!   * [`spectrum_to_xyz`] integrates a [`SampleSpectrum`] against a CIE
//!     standard observer and reference illuminant, producing [`Tristimulus`]
//!     values normalized so that a perfect white reflector has Y = 100.
//!   * [`xyz_to_srgb`] applies the fixed XYZ→linear-RGB matrix followed by
//!     the piecewise sRGB gamma encoding, clipping the result to the unit
//!     cube as an [`RgbColor`].
//!
//! Reference data lives in the [`cie`] module: the 1931 2º and 1964 10º
//! standard observers and the D65, D50, and A illuminants, each tabulated on
//! its own wavelength grid. [`resample`] aligns any of those grids with a
//! sample's grid through piecewise-linear interpolation, clamping to the
//! boundary value outside a curve's domain.
//!
//! All transforms are pure functions over immutable inputs. The reference
//! tables are `'static` and may be shared freely across threads; converting
//! many spectra in parallel requires no coordination.
//!
//! ```
//! use spectrolor::cie::{Illuminant, Observer};
//! use spectrolor::{spectrum_to_xyz, xyz_to_srgb, SampleSpectrum};
//!
//! # fn main() -> Result<(), spectrolor::error::SpectrumError> {
//! let sample = SampleSpectrum::new(
//!     vec![400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0],
//!     vec![0.08, 0.12, 0.35, 0.62, 0.48, 0.21, 0.10],
//! )?;
//!
//! let xyz = spectrum_to_xyz(&sample, Illuminant::D65, Observer::TwoDegree1931)?;
//! let rgb = xyz_to_srgb(&xyz)?;
//!
//! assert!((0.0..=1.0).contains(&rgb.red()));
//! assert!((0.0..=1.0).contains(&rgb.green()));
//! assert!((0.0..=1.0).contains(&rgb.blue()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Optional Features
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** provides `Serialize`/`Deserialize` for [`Tristimulus`]
//!     and [`RgbColor`]. This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

pub mod cie;
mod core;
pub mod error;
mod integrate;
#[cfg(feature = "serde")]
mod serde;
mod spectrum;
mod srgb;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use integrate::{spectrum_to_xyz, tristimulus, Tristimulus};
pub use spectrum::{resample, SampleSpectrum};
pub use srgb::{xyz_to_srgb, RgbColor};
