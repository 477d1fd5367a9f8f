//! Utility module with spectrolor's errors.

/// An erroneous spectral conversion input.
///
/// Every conversion entry point validates its inputs eagerly and surfaces the
/// first offending input as one of these variants. There are no partial
/// results and no fallbacks to defaults: all errors are caller-input
/// problems, detected synchronously in otherwise pure computations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpectrumError {
    /// A reference curve that cannot be interpolated. A curve needs at least
    /// two samples, and its wavelengths must be finite and strictly
    /// increasing.
    InvalidCurve,

    /// Parallel arrays of differing lengths. For example, a curve with five
    /// wavelengths but four values cannot be paired up.
    LengthMismatch {
        /// The length of the wavelength grid.
        expected: usize,
        /// The length of the value array.
        actual: usize,
    },

    /// A sample spectrum whose wavelengths are empty, not finite, or not
    /// strictly increasing, or whose reflectances are not finite.
    InvalidSpectrum,

    /// A normalizing sum too close to zero, usually because the sample's
    /// wavelength range does not overlap the illuminant's and observer's.
    DegenerateNormalization,

    /// A tristimulus triple with non-finite components.
    InvalidTristimulus,
}

impl std::fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use SpectrumError::*;

        match *self {
            InvalidCurve => f.write_str(
                "curve should have at least 2 finite, strictly increasing wavelengths",
            ),
            LengthMismatch { expected, actual } => f.write_fmt(format_args!(
                "curve should have {} values to match its wavelengths but has {}",
                expected, actual
            )),
            InvalidSpectrum => f.write_str(
                "sample spectrum should have finite, strictly increasing wavelengths \
                 and finite reflectances",
            ),
            DegenerateNormalization => f.write_str(
                "illuminant and observer should overlap the sample's wavelengths \
                 but their normalizing sum is zero",
            ),
            InvalidTristimulus => f.write_str("tristimulus should have 3 finite components"),
        }
    }
}

impl std::error::Error for SpectrumError {}
