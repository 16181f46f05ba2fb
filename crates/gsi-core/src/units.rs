// gsi-core/src/units.rs

use uom::si::f64::Pressure as UomPressure;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

pub mod constants {
    /// Avogadro constant [1/mol] (exact, SI 2019).
    pub const AVOGADRO: f64 = 6.022_140_76e23;
}
