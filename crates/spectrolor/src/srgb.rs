//! Conversion of tristimulus values into display-ready sRGB.

use crate::error::SpectrumError;
use crate::integrate::Tristimulus;
use crate::Float;

/// The linear transformation from XYZ on a 0..=1 scale to linear sRGB. The
/// matrix assumes a D65 white point.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// The largest linear value still encoded with the linear segment of the
/// sRGB transfer function.
const LINEAR_CUTOFF: Float = 0.003_130_8;

/// A gamma-encoded sRGB color.
///
/// All three coordinates are clipped to the unit range, so every instance
/// is directly displayable. Out-of-gamut tristimuli lose information on the
/// way in; that loss is not recoverable from the color itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbColor([Float; 3]);

impl RgbColor {
    /// Get the red coordinate.
    #[inline]
    pub fn red(&self) -> Float {
        self.0[0]
    }

    /// Get the green coordinate.
    #[inline]
    pub fn green(&self) -> Float {
        self.0[1]
    }

    /// Get the blue coordinate.
    #[inline]
    pub fn blue(&self) -> Float {
        self.0[2]
    }

    /// Convert this color to three 8-bit channels, rounding to nearest.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_24bit(&self) -> [u8; 3] {
        let [red, green, blue] = self.0;
        [
            (255.0 * red).round() as u8,
            (255.0 * green).round() as u8,
            (255.0 * blue).round() as u8,
        ]
    }
}

impl AsRef<[Float; 3]> for RgbColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3x3 matrix by the 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[2].mul_add(vector[2], row1[0].mul_add(vector[0], row1[1] * vector[1])),
        row2[2].mul_add(vector[2], row2[0].mul_add(vector[0], row2[1] * vector[1])),
        row3[2].mul_add(vector[2], row3[0].mul_add(vector[0], row3[1] * vector[1])),
    ]
}

/// Apply the sRGB transfer function to one linear channel. Values at or
/// below the cutoff take the linear segment, including all negative values.
fn encode_channel(linear: Float) -> Float {
    if linear <= LINEAR_CUTOFF {
        12.92 * linear
    } else {
        Float::mul_add(1.055, linear.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert tristimulus values to a gamma-encoded sRGB color.
///
/// The conversion scales the tristimulus from its 0..=100 range down to
/// 0..=1, applies the linear XYZ to sRGB matrix, gamma-encodes each channel,
/// and finally clips each channel to the unit range. Thanks to the clipping,
/// out-of-gamut tristimuli produce the closest representable channel values
/// instead of failing.
///
/// # Errors
///
/// Fails with [`SpectrumError::InvalidTristimulus`] if any component is not
/// a finite number.
pub fn xyz_to_srgb(xyz: &Tristimulus) -> Result<RgbColor, SpectrumError> {
    let components = xyz.as_ref();
    if components.iter().any(|component| !component.is_finite()) {
        return Err(SpectrumError::InvalidTristimulus);
    }

    let scaled = [
        components[0] / 100.0,
        components[1] / 100.0,
        components[2] / 100.0,
    ];
    let linear = multiply(&XYZ_TO_LINEAR_SRGB, &scaled);
    Ok(RgbColor([
        encode_channel(linear[0]).clamp(0.0, 1.0),
        encode_channel(linear[1]).clamp(0.0, 1.0),
        encode_channel(linear[2]).clamp(0.0, 1.0),
    ]))
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{encode_channel, xyz_to_srgb, RgbColor, LINEAR_CUTOFF};
    use crate::error::SpectrumError;
    use crate::{assert_close_enough, Float, Tristimulus};

    #[test]
    fn test_white_point() {
        let white = Tristimulus::new(95.047, 100.0, 108.883);
        let srgb = xyz_to_srgb(&white).unwrap();

        for channel in srgb.as_ref() {
            assert!((channel - 1.0).abs() < 1e-3, "channel = {}", channel);
        }
        assert_eq!(srgb.to_24bit(), [255, 255, 255]);
    }

    #[test]
    fn test_black() {
        let black = Tristimulus::new(0.0, 0.0, 0.0);
        let srgb = xyz_to_srgb(&black).unwrap();
        assert_eq!(srgb, RgbColor([0.0, 0.0, 0.0]));
        assert_eq!(srgb.to_24bit(), [0, 0, 0]);
    }

    #[test]
    fn test_transfer_function_cutoff() {
        // The cutoff itself belongs to the linear segment.
        assert_close_enough!(encode_channel(LINEAR_CUTOFF), 12.92 * LINEAR_CUTOFF);
        // The two segments agree to about four decimal places at the cutoff.
        let above = encode_channel(LINEAR_CUTOFF + 1e-9);
        assert!((above - 12.92 * LINEAR_CUTOFF).abs() < 1e-4);
    }

    #[test]
    fn test_transfer_function_monotonic() {
        let mut previous = encode_channel(0.0);
        for step in 1..=1_000_u16 {
            let encoded = encode_channel(Float::from(step) / 1_000.0);
            assert!(
                previous < encoded,
                "not monotonic at step {}: {} >= {}",
                step,
                previous,
                encoded
            );
            previous = encoded;
        }
    }

    #[test]
    fn test_out_of_gamut_clipping() {
        // An imaginary pure-green stimulus clips to the gamut boundary.
        let green = Tristimulus::new(0.0, 100.0, 0.0);
        let srgb = xyz_to_srgb(&green).unwrap();
        assert_eq!(srgb, RgbColor([0.0, 1.0, 0.0]));

        // Clipping already clipped channels changes nothing.
        for channel in srgb.as_ref() {
            assert_eq!(channel.clamp(0.0, 1.0), *channel);
        }
    }

    #[test]
    fn test_non_finite_components() {
        let inputs = [
            Tristimulus::new(Float::NAN, 50.0, 50.0),
            Tristimulus::new(50.0, Float::INFINITY, 50.0),
            Tristimulus::new(50.0, 50.0, Float::NEG_INFINITY),
        ];
        for xyz in inputs {
            assert_eq!(xyz_to_srgb(&xyz), Err(SpectrumError::InvalidTristimulus));
        }
    }

    #[test]
    fn test_mid_gray() {
        // An 18% gray card under D65 encodes to roughly 0.46 per channel.
        let gray = Tristimulus::new(17.109, 18.0, 19.599);
        let srgb = xyz_to_srgb(&gray).unwrap();

        assert!((srgb.red() - 0.46).abs() < 0.02, "red = {}", srgb.red());
        assert!((srgb.green() - 0.46).abs() < 0.02, "green = {}", srgb.green());
        assert!((srgb.blue() - 0.46).abs() < 0.02, "blue = {}", srgb.blue());
    }
}
