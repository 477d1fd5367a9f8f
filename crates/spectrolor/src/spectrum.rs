//! The sample data model and the spectral resampler.

use crate::error::SpectrumError;
use crate::Float;

/// Determine whether the wavelengths form a valid interpolation grid, i.e.,
/// are finite and strictly increasing.
fn is_valid_grid(wavelengths: &[Float]) -> bool {
    wavelengths.iter().all(|w| w.is_finite())
        && wavelengths.windows(2).all(|pair| pair[0] < pair[1])
}

// --------------------------------------------------------------------------------------------------------------------

/// A measured reflectance spectrum.
///
/// A sample spectrum pairs a strictly increasing wavelength grid with one
/// reflectance per wavelength. Reflectances are expected in `0..=1` but not
/// enforced; out-of-range values pass through the pipeline arithmetically.
/// The constructor rejects malformed inputs, so every instance is safe to
/// feed to [`spectrum_to_xyz`](crate::spectrum_to_xyz).
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSpectrum {
    wavelengths: Vec<Float>,
    reflectances: Vec<Float>,
}

impl SampleSpectrum {
    /// Create a new sample spectrum.
    ///
    /// # Errors
    ///
    /// Fails with [`SpectrumError::LengthMismatch`] if the two arrays differ
    /// in length, and with [`SpectrumError::InvalidSpectrum`] if the spectrum
    /// is empty, a wavelength or reflectance is not finite, or the
    /// wavelengths are not strictly increasing.
    pub fn new(
        wavelengths: Vec<Float>,
        reflectances: Vec<Float>,
    ) -> Result<Self, SpectrumError> {
        if wavelengths.len() != reflectances.len() {
            return Err(SpectrumError::LengthMismatch {
                expected: wavelengths.len(),
                actual: reflectances.len(),
            });
        }
        if wavelengths.is_empty()
            || !is_valid_grid(&wavelengths)
            || !reflectances.iter().all(|r| r.is_finite())
        {
            return Err(SpectrumError::InvalidSpectrum);
        }

        Ok(Self {
            wavelengths,
            reflectances,
        })
    }

    /// Get this spectrum's wavelengths in nanometers.
    #[inline]
    pub fn wavelengths(&self) -> &[Float] {
        &self.wavelengths
    }

    /// Get this spectrum's reflectances.
    #[inline]
    pub fn reflectances(&self) -> &[Float] {
        &self.reflectances
    }

    /// Determine the number of samples in this spectrum.
    #[inline]
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Determine whether this spectrum is empty. The constructor rejects
    /// empty spectra, so this method always returns `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Resample a curve onto new target wavelengths.
///
/// For each target wavelength, this function linearly interpolates between
/// the two bracketing source samples. A target that hits a source wavelength
/// exactly yields that source value without interpolation error. Targets
/// below the source's minimum or above its maximum clamp to the boundary
/// value; linear extrapolation would produce unphysical negative or runaway
/// values for CIE curves. Targets may come in any order, and an empty target
/// list yields an empty result.
///
/// # Errors
///
/// Fails with [`SpectrumError::LengthMismatch`] if the source arrays differ
/// in length, with [`SpectrumError::InvalidCurve`] if the source has fewer
/// than two samples or its wavelengths are not finite and strictly
/// increasing, and with [`SpectrumError::InvalidSpectrum`] if a target
/// wavelength is not finite.
pub fn resample(
    source_wavelengths: &[Float],
    source_values: &[Float],
    targets: &[Float],
) -> Result<Vec<Float>, SpectrumError> {
    if source_wavelengths.len() != source_values.len() {
        return Err(SpectrumError::LengthMismatch {
            expected: source_wavelengths.len(),
            actual: source_values.len(),
        });
    }
    if source_wavelengths.len() < 2 || !is_valid_grid(source_wavelengths) {
        return Err(SpectrumError::InvalidCurve);
    }

    let mut values = Vec::with_capacity(targets.len());
    for &target in targets {
        if !target.is_finite() {
            return Err(SpectrumError::InvalidSpectrum);
        }
        values.push(interpolate(source_wavelengths, source_values, target));
    }

    Ok(values)
}

/// Interpolate the curve's value at the given wavelength. The wavelengths
/// must be a valid grid of at least two samples and the target must be
/// finite.
fn interpolate(wavelengths: &[Float], values: &[Float], target: Float) -> Float {
    let last = wavelengths.len() - 1;
    if target <= wavelengths[0] {
        return values[0];
    }
    if target >= wavelengths[last] {
        return values[last];
    }

    // First index with wavelengths[index] >= target; in 1..=last here.
    let index = wavelengths.partition_point(|&w| w < target);
    if wavelengths[index] == target {
        return values[index];
    }

    let span = wavelengths[index] - wavelengths[index - 1];
    let fraction = (target - wavelengths[index - 1]) / span;
    fraction.mul_add(values[index] - values[index - 1], values[index - 1])
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{resample, SampleSpectrum};
    use crate::assert_close_enough;
    use crate::error::SpectrumError;

    const WAVELENGTHS: [crate::Float; 4] = [400.0, 500.0, 600.0, 700.0];
    const VALUES: [crate::Float; 4] = [0.1, 0.5, 0.3, 0.9];

    #[test]
    fn test_exact_hits() -> Result<(), SpectrumError> {
        let resampled = resample(&WAVELENGTHS, &VALUES, &WAVELENGTHS)?;
        assert_eq!(resampled, VALUES);
        Ok(())
    }

    #[test]
    fn test_interpolation() -> Result<(), SpectrumError> {
        let resampled = resample(&WAVELENGTHS, &VALUES, &[450.0, 550.0, 675.0])?;
        assert_close_enough!(resampled[0], 0.3);
        assert_close_enough!(resampled[1], 0.4);
        assert_close_enough!(resampled[2], 0.75);
        Ok(())
    }

    #[test]
    fn test_boundary_clamp() -> Result<(), SpectrumError> {
        let resampled = resample(&WAVELENGTHS, &VALUES, &[250.0, 399.9, 700.1, 1_000.0])?;
        assert_eq!(resampled, vec![0.1, 0.1, 0.9, 0.9]);
        Ok(())
    }

    #[test]
    fn test_empty_targets() -> Result<(), SpectrumError> {
        assert!(resample(&WAVELENGTHS, &VALUES, &[])?.is_empty());
        Ok(())
    }

    #[test]
    fn test_unordered_targets() -> Result<(), SpectrumError> {
        let resampled = resample(&WAVELENGTHS, &VALUES, &[700.0, 400.0])?;
        assert_eq!(resampled, vec![0.9, 0.1]);
        Ok(())
    }

    #[test]
    fn test_invalid_curves() {
        assert_eq!(
            resample(&[500.0], &[1.0], &[500.0]),
            Err(SpectrumError::InvalidCurve)
        );
        assert_eq!(
            resample(&[500.0, 500.0], &[1.0, 2.0], &[500.0]),
            Err(SpectrumError::InvalidCurve)
        );
        assert_eq!(
            resample(&[600.0, 500.0], &[1.0, 2.0], &[550.0]),
            Err(SpectrumError::InvalidCurve)
        );
        assert_eq!(
            resample(&WAVELENGTHS, &VALUES[..3], &[500.0]),
            Err(SpectrumError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            resample(&WAVELENGTHS, &VALUES, &[crate::Float::NAN]),
            Err(SpectrumError::InvalidSpectrum)
        );
    }

    #[test]
    fn test_sample_spectrum() {
        let sample = SampleSpectrum::new(vec![400.0, 500.0], vec![0.25, 0.75]).unwrap();
        assert_eq!(sample.len(), 2);
        assert!(!sample.is_empty());
        assert_eq!(sample.wavelengths(), &[400.0, 500.0]);
        assert_eq!(sample.reflectances(), &[0.25, 0.75]);

        assert_eq!(
            SampleSpectrum::new(vec![400.0, 500.0], vec![0.25]),
            Err(SpectrumError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            SampleSpectrum::new(vec![], vec![]),
            Err(SpectrumError::InvalidSpectrum)
        );
        assert_eq!(
            SampleSpectrum::new(vec![500.0, 400.0], vec![0.1, 0.2]),
            Err(SpectrumError::InvalidSpectrum)
        );
        assert_eq!(
            SampleSpectrum::new(vec![400.0, 500.0], vec![0.1, crate::Float::NAN]),
            Err(SpectrumError::InvalidSpectrum)
        );
    }
}
