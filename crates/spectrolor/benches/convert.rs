use criterion::{criterion_group, criterion_main, Criterion};
use spectrolor::{spectrum_to_xyz, xyz_to_srgb, SampleSpectrum};

fn synthetic_spectrum(count: usize) -> SampleSpectrum {
    let span = 400.0 / (count - 1) as f64;
    let wavelengths: Vec<f64> = (0..count).map(|index| 380.0 + span * index as f64).collect();
    let reflectances: Vec<f64> = wavelengths
        .iter()
        .map(|nm| 0.5 + 0.4 * ((nm - 380.0) / 400.0 * std::f64::consts::TAU).sin())
        .collect();
    SampleSpectrum::new(wavelengths, reflectances).expect("synthetic grid is strictly increasing")
}

pub fn run_benchmarks(c: &mut Criterion) {
    let coarse = synthetic_spectrum(41);
    let fine = synthetic_spectrum(401);

    let mut group = c.benchmark_group("spectrum-to-srgb");

    group.bench_function("41-samples", |b| {
        b.iter(|| {
            let xyz = spectrum_to_xyz(&coarse, Default::default(), Default::default())
                .expect("coarse spectrum converts");
            xyz_to_srgb(&xyz).expect("tristimulus is finite")
        })
    });

    group.bench_function("401-samples", |b| {
        b.iter(|| {
            let xyz = spectrum_to_xyz(&fine, Default::default(), Default::default())
                .expect("fine spectrum converts");
            xyz_to_srgb(&xyz).expect("tristimulus is finite")
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
