use super::{IlluminantTable, GRID_380_780_10NM, GRID_380_780_5NM};
use crate::Float;

/// The CIE standard illuminant D65, tabulated from 380nm to 780nm at 5nm
/// resolution and scaled to 100 at 560nm.
pub static CIE_ILLUMINANT_D65: IlluminantTable = IlluminantTable::new(
    "Illuminant D65",
    &GRID_380_780_5NM,
    &POWER_D65,
);

/// The CIE standard illuminant D50, tabulated from 380nm to 780nm at 10nm
/// resolution and scaled to 100 at 560nm.
pub static CIE_ILLUMINANT_D50: IlluminantTable = IlluminantTable::new(
    "Illuminant D50",
    &GRID_380_780_10NM,
    &POWER_D50,
);

#[rustfmt::skip]
static POWER_D65: [Float; 81] = [
     49.9755,  52.3118,  54.6482,  68.7015,  82.7549,  87.1204,  91.4860,  92.4589,  93.4318,
     90.0570,  86.6823,  95.7736, 104.8650, 110.9360, 117.0080, 117.4100, 117.8120, 116.3360,
    114.8610, 115.3920, 115.9230, 112.3670, 108.8110, 109.0820, 109.3540, 108.5780, 107.8020,
    106.2960, 104.7900, 106.2390, 107.6890, 106.0470, 104.4050, 104.2250, 104.0460, 102.0230,
    100.0000,  98.1671,  96.3342,  96.0611,  95.7880,  92.2368,  88.6856,  89.3459,  90.0062,
     89.8026,  89.5991,  88.6489,  87.6987,  85.4936,  83.2886,  83.4939,  83.6992,  81.8630,
     80.0268,  80.1207,  80.2146,  81.2462,  82.2778,  80.2810,  78.2842,  74.0027,  69.7213,
     70.6652,  71.6091,  72.9790,  74.3490,  67.9765,  61.6040,  65.7448,  69.8856,  72.4863,
     75.0870,  69.3398,  63.5927,  55.0054,  46.4182,  56.6118,  66.8054,  65.0941,  63.3828,
];

#[rustfmt::skip]
static POWER_D50: [Float; 41] = [
     24.4880,  29.8710,  49.3080,  56.5060,  60.0340,  57.8180,  74.8250,  87.2470,  90.6120,
     91.3680,  95.1090,  91.9630,  95.7240,  96.6130,  97.1290, 102.0990, 100.7550, 102.3170,
    100.0000,  97.7350,  98.9180,  93.4990,  97.6880,  99.2690,  99.0420,  95.7220,  98.8570,
     95.6670,  98.1900, 103.0030,  99.1330,  87.3810,  91.6040,  92.8890,  76.8540,  86.5110,
     92.5800,  78.2300,  57.6920,  82.9230,  78.2740,
];
