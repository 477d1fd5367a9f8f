use super::{IlluminantTable, GRID_380_780_10NM};
use crate::Float;

/// The CIE standard illuminant A, i.e., a Planckian radiator at roughly
/// 2856K, tabulated from 380nm to 780nm at 10nm resolution and scaled to 100
/// at 560nm.
pub static CIE_ILLUMINANT_A: IlluminantTable = IlluminantTable::new(
    "Illuminant A",
    &GRID_380_780_10NM,
    &POWER_A,
);

#[rustfmt::skip]
static POWER_A: [Float; 41] = [
      9.7951,  12.0853,  14.7080,  17.6753,  20.9950,  24.6709,  28.7027,  33.0859,  37.8121,
     42.8693,  48.2423,  53.9132,  59.8611,  66.0635,  72.4959,  79.1326,  85.9470,  92.9120,
    100.0000, 107.1840, 114.4360, 121.7310, 129.0430, 136.3460, 143.6180, 150.8360, 157.9790,
    165.0280, 171.9630, 178.7690, 185.4290, 191.9310, 198.2610, 204.4090, 210.3650, 216.1200,
    221.6670, 227.0000, 232.1150, 237.0080, 241.6750,
];
