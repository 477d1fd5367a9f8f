use spectrolor::cie::{Illuminant, Observer};
use spectrolor::error::SpectrumError;
use spectrolor::{spectrum_to_xyz, xyz_to_srgb, SampleSpectrum};

fn main() -> Result<(), SpectrumError> {
    // 1. Describe the measurement, here a reddish paint chip sampled every
    //    20nm across the visible range.
    let wavelengths: Vec<f64> = (0..21).map(|step| 380.0 + 20.0 * f64::from(step)).collect();
    let reflectances = vec![
        0.05, 0.05, 0.06, 0.06, 0.07, 0.07, 0.08, 0.09, 0.10, 0.12, 0.16, 0.26, 0.46, 0.66, 0.76,
        0.79, 0.80, 0.80, 0.81, 0.81, 0.82,
    ];
    let sample = SampleSpectrum::new(wavelengths, reflectances)?;

    // 2. Integrate under daylight as seen by the 1931 observer.
    let xyz = spectrum_to_xyz(&sample, Illuminant::D65, Observer::TwoDegree1931)?;

    // 3. Encode for display.
    let srgb = xyz_to_srgb(&xyz)?;
    let [red, green, blue] = srgb.to_24bit();

    println!(
        "XYZ  = ({:.3}, {:.3}, {:.3})",
        xyz.x(),
        xyz.y(),
        xyz.z()
    );
    println!(
        "sRGB = ({:.4}, {:.4}, {:.4})",
        srgb.red(),
        srgb.green(),
        srgb.blue()
    );
    println!("hex  = #{red:02x}{green:02x}{blue:02x}");

    Ok(())
}
