//! Reference data sourced from the CIE.
//!
//! This module provides the standard observers and reference illuminants as
//! static, immutable tables, together with the closed [`Observer`] and
//! [`Illuminant`] variant tags that look them up. Each table carries its own
//! wavelength grid; the 1931 2º observer and D65 are tabulated at 5nm, the
//! 1964 10º observer, D50, and illuminant A at 10nm. The resampler aligns
//! any of these grids with a sample's grid.

mod d_series;
mod incandescent;
mod ten_deg;
mod two_deg;

pub use d_series::{CIE_ILLUMINANT_D50, CIE_ILLUMINANT_D65};
pub use incandescent::CIE_ILLUMINANT_A;
pub use ten_deg::CIE_OBSERVER_10DEG_1964;
pub use two_deg::CIE_OBSERVER_2DEG_1931;

use crate::Float;

/// The 380–780nm wavelength grid at 5nm resolution.
#[rustfmt::skip]
pub(crate) static GRID_380_780_5NM: [Float; 81] = [
    380.0, 385.0, 390.0, 395.0, 400.0, 405.0, 410.0, 415.0, 420.0, 425.0,
    430.0, 435.0, 440.0, 445.0, 450.0, 455.0, 460.0, 465.0, 470.0, 475.0,
    480.0, 485.0, 490.0, 495.0, 500.0, 505.0, 510.0, 515.0, 520.0, 525.0,
    530.0, 535.0, 540.0, 545.0, 550.0, 555.0, 560.0, 565.0, 570.0, 575.0,
    580.0, 585.0, 590.0, 595.0, 600.0, 605.0, 610.0, 615.0, 620.0, 625.0,
    630.0, 635.0, 640.0, 645.0, 650.0, 655.0, 660.0, 665.0, 670.0, 675.0,
    680.0, 685.0, 690.0, 695.0, 700.0, 705.0, 710.0, 715.0, 720.0, 725.0,
    730.0, 735.0, 740.0, 745.0, 750.0, 755.0, 760.0, 765.0, 770.0, 775.0,
    780.0,
];

/// The 380–780nm wavelength grid at 10nm resolution.
#[rustfmt::skip]
pub(crate) static GRID_380_780_10NM: [Float; 41] = [
    380.0, 390.0, 400.0, 410.0, 420.0, 430.0, 440.0, 450.0, 460.0, 470.0,
    480.0, 490.0, 500.0, 510.0, 520.0, 530.0, 540.0, 550.0, 560.0, 570.0,
    580.0, 590.0, 600.0, 610.0, 620.0, 630.0, 640.0, 650.0, 660.0, 670.0,
    680.0, 690.0, 700.0, 710.0, 720.0, 730.0, 740.0, 750.0, 760.0, 770.0,
    780.0,
];

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven standard observer.
///
/// The CIE's standard observers, or color matching functions, model human
/// color perception. Since humans are trichromatic, an observer comprises
/// three curves, xbar, ybar, and zbar, tabulated over one shared wavelength
/// grid. Tables are constructed once from static reference data and never
/// mutated.
#[derive(Clone, Debug)]
pub struct ObserverTable {
    label: &'static str,
    wavelengths: &'static [Float],
    xbar: &'static [Float],
    ybar: &'static [Float],
    zbar: &'static [Float],
}

impl ObserverTable {
    /// Create a new observer table. The three curves must have one value per
    /// wavelength.
    pub const fn new(
        label: &'static str,
        wavelengths: &'static [Float],
        xbar: &'static [Float],
        ybar: &'static [Float],
        zbar: &'static [Float],
    ) -> Self {
        Self {
            label,
            wavelengths,
            xbar,
            ybar,
            zbar,
        }
    }

    /// Get a descriptive label for this observer.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get this observer's wavelength grid.
    #[inline]
    pub fn wavelengths(&self) -> &'static [Float] {
        self.wavelengths
    }

    /// Get this observer's xbar curve.
    #[inline]
    pub fn xbar(&self) -> &'static [Float] {
        self.xbar
    }

    /// Get this observer's ybar curve.
    #[inline]
    pub fn ybar(&self) -> &'static [Float] {
        self.ybar
    }

    /// Get this observer's zbar curve.
    #[inline]
    pub fn zbar(&self) -> &'static [Float] {
        self.zbar
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A table-driven reference illuminant.
///
/// An illuminant is the relative spectral power distribution of a
/// standardized light source, tabulated over its own wavelength grid and
/// scaled to 100 at 560nm per CIE convention. Tables are constructed once
/// from static reference data and never mutated.
#[derive(Clone, Debug)]
pub struct IlluminantTable {
    label: &'static str,
    wavelengths: &'static [Float],
    power: &'static [Float],
}

impl IlluminantTable {
    /// Create a new illuminant table with one power value per wavelength.
    pub const fn new(
        label: &'static str,
        wavelengths: &'static [Float],
        power: &'static [Float],
    ) -> Self {
        Self {
            label,
            wavelengths,
            power,
        }
    }

    /// Get a descriptive label for this illuminant.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get this illuminant's wavelength grid.
    #[inline]
    pub fn wavelengths(&self) -> &'static [Float] {
        self.wavelengths
    }

    /// Get this illuminant's spectral power curve.
    #[inline]
    pub fn power(&self) -> &'static [Float] {
        self.power
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The choice of standard observer.
///
/// The default is the 1931 2º observer, which also is the default of most
/// colorimetric software.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Observer {
    /// The CIE 1931 2º standard observer.
    #[default]
    TwoDegree1931,
    /// The CIE 1964 10º standard observer.
    TenDegree1964,
}

impl Observer {
    /// Look up the reference table for this observer.
    pub fn table(self) -> &'static ObserverTable {
        match self {
            Self::TwoDegree1931 => &CIE_OBSERVER_2DEG_1931,
            Self::TenDegree1964 => &CIE_OBSERVER_10DEG_1964,
        }
    }
}

/// The choice of reference illuminant.
///
/// The default is D65, i.e., average daylight around noon, which also is the
/// reference white of sRGB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// The CIE standard illuminant D65, approximating daylight around noon.
    #[default]
    D65,
    /// The CIE standard illuminant A, i.e., incandescent tungsten light.
    A,
    /// The CIE standard illuminant D50, approximating daylight near sunrise
    /// and sunset.
    D50,
}

impl Illuminant {
    /// Look up the reference table for this illuminant.
    pub fn table(self) -> &'static IlluminantTable {
        match self {
            Self::D65 => &CIE_ILLUMINANT_D65,
            Self::A => &CIE_ILLUMINANT_A,
            Self::D50 => &CIE_ILLUMINANT_D50,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::{Illuminant, Observer};
    use crate::{assert_close_enough, tristimulus, SampleSpectrum};

    #[test]
    fn test_table_shapes() {
        for observer in [Observer::TwoDegree1931, Observer::TenDegree1964] {
            let table = observer.table();
            let grid = table.wavelengths();
            assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(table.xbar().len(), grid.len());
            assert_eq!(table.ybar().len(), grid.len());
            assert_eq!(table.zbar().len(), grid.len());
        }

        for illuminant in [Illuminant::D65, Illuminant::A, Illuminant::D50] {
            let table = illuminant.table();
            let grid = table.wavelengths();
            assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(table.power().len(), grid.len());
        }
    }

    #[test]
    fn test_white_points() {
        // Published white points, Y normalized to 100. See
        // https://en.wikipedia.org/wiki/Standard_illuminant
        for (illuminant, observer, white_point) in [
            (Illuminant::D65, Observer::TwoDegree1931, [95.047, 100.0, 108.883]),
            (Illuminant::D65, Observer::TenDegree1964, [94.811, 100.0, 107.304]),
            (Illuminant::D50, Observer::TwoDegree1931, [96.422, 100.0, 82.521]),
            (Illuminant::A, Observer::TwoDegree1931, [109.850, 100.0, 35.585]),
        ] {
            let grid = observer.table().wavelengths();
            let perfect_reflector = SampleSpectrum::new(
                grid.to_vec(),
                vec![1.0; grid.len()],
            )
            .unwrap();

            let xyz = tristimulus(
                &perfect_reflector,
                illuminant.table(),
                observer.table(),
            )
            .unwrap();

            // The normalizing sum and the Y sum accumulate the very same
            // terms for a perfect reflector, so Y is 100 exactly.
            assert_close_enough!(xyz.y(), 100.0);
            // Tables on coarser grids pick up a little interpolation error,
            // so allow 1.5 units around the published values.
            assert!(
                (xyz.x() - white_point[0]).abs() < 1.5,
                "{} / {}: X = {}",
                illuminant.table().label(),
                observer.table().label(),
                xyz.x()
            );
            assert!(
                (xyz.z() - white_point[2]).abs() < 1.5,
                "{} / {}: Z = {}",
                illuminant.table().label(),
                observer.table().label(),
                xyz.z()
            );
        }
    }
}
