//! Integration of sample spectra into tristimulus values.

use crate::cie::{Illuminant, IlluminantTable, Observer, ObserverTable};
use crate::core::Accumulator;
use crate::error::SpectrumError;
use crate::spectrum::{resample, SampleSpectrum};
use crate::Float;

/// The smallest magnitude still accepted for the normalizing sum. Below it,
/// the illuminant, observer, and sample effectively do not overlap.
const MIN_NORMALIZATION: Float = 1e-12;

/// CIE XYZ tristimulus values.
///
/// The components are normalized such that Y = 100 corresponds to a perfect
/// white reflector under the chosen illuminant. A tristimulus is a plain
/// value; it carries no identity beyond its three components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tristimulus([Float; 3]);

impl Tristimulus {
    /// Create a new tristimulus from its X, Y, and Z components.
    #[allow(clippy::min_ident_chars)]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Get the X component.
    #[inline]
    pub fn x(&self) -> Float {
        self.0[0]
    }

    /// Get the Y component, i.e., the luminance.
    #[inline]
    pub fn y(&self) -> Float {
        self.0[1]
    }

    /// Get the Z component.
    #[inline]
    pub fn z(&self) -> Float {
        self.0[2]
    }
}

impl AsRef<[Float; 3]> for Tristimulus {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl From<[Float; 3]> for Tristimulus {
    fn from(components: [Float; 3]) -> Self {
        Self(components)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a reflectance spectrum to tristimulus values under the given
/// illuminant and observer.
///
/// This function resolves the two variant tags to their reference tables and
/// delegates to [`tristimulus`]. Passing `Illuminant::default()` and
/// `Observer::default()` reproduces the conventional D65 / 2º setup.
///
/// # Errors
///
/// Propagates the resampling errors of [`resample`] and
/// [`SpectrumError::DegenerateNormalization`] from [`tristimulus`].
pub fn spectrum_to_xyz(
    sample: &SampleSpectrum,
    illuminant: Illuminant,
    observer: Observer,
) -> Result<Tristimulus, SpectrumError> {
    tristimulus(sample, illuminant.table(), observer.table())
}

/// Integrate a reflectance spectrum against an illuminant and observer
/// table.
///
/// The observer's three curves and the illuminant's power curve are
/// resampled onto the sample's wavelength grid. With all curves aligned, the
/// normalizing sum `n = Σ power·ybar` scales the three weighted sums so that
/// a perfect white reflector comes out at Y = 100:
///
/// ```text
/// X = 100 · Σ(xbar·reflectance·power) / n
/// ```
///
/// and likewise for Y and Z. All sums accumulate in ascending wavelength
/// order, so results are reproducible for identical inputs.
///
/// # Errors
///
/// Fails with [`SpectrumError::DegenerateNormalization`] if `|n|` is below
/// 1e-12, which signals an illuminant/observer/sample mismatch such as
/// non-overlapping wavelength ranges. Resampling errors propagate as-is.
pub fn tristimulus(
    sample: &SampleSpectrum,
    illuminant: &IlluminantTable,
    observer: &ObserverTable,
) -> Result<Tristimulus, SpectrumError> {
    let grid = sample.wavelengths();
    let xbar = resample(observer.wavelengths(), observer.xbar(), grid)?;
    let ybar = resample(observer.wavelengths(), observer.ybar(), grid)?;
    let zbar = resample(observer.wavelengths(), observer.zbar(), grid)?;
    let power = resample(illuminant.wavelengths(), illuminant.power(), grid)?;

    let mut normalization = Accumulator::default();
    for (&watts, &luminosity) in power.iter().zip(ybar.iter()) {
        normalization += watts * luminosity;
    }
    let normalization = normalization.total();
    if normalization.abs() < MIN_NORMALIZATION {
        return Err(SpectrumError::DegenerateNormalization);
    }

    let mut sum_x = Accumulator::default();
    let mut sum_y = Accumulator::default();
    let mut sum_z = Accumulator::default();
    for (index, &reflectance) in sample.reflectances().iter().enumerate() {
        let stimulus = power[index] * reflectance;
        sum_x += stimulus * xbar[index];
        sum_y += stimulus * ybar[index];
        sum_z += stimulus * zbar[index];
    }

    let scale = 100.0 / normalization;
    Ok(Tristimulus::new(
        scale * sum_x.total(),
        scale * sum_y.total(),
        scale * sum_z.total(),
    ))
}

// --------------------------------------------------------------------------------------------------------------------
