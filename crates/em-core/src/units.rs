// em-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

/// Offset between the Celsius and Kelvin scales.
pub const ZERO_C_IN_K: f64 = 273.15;

/// Pascals per hectopascal.
pub const PA_PER_HPA: f64 = 100.0;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn hpa(v: f64) -> Pressure {
    use uom::si::pressure::hectopascal;
    Pressure::new::<hectopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Raw value of a pressure in Pa.
#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Raw value of a temperature in K.
#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_unitless(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

// Plain-f64 conversions for the hPa / degC public boundary.

#[inline]
pub fn hpa_to_pa(p_hpa: f64) -> f64 {
    p_hpa * PA_PER_HPA
}

#[inline]
pub fn c_to_k(t_c: f64) -> f64 {
    t_c + ZERO_C_IN_K
}

#[inline]
pub fn k_to_c(t_k: f64) -> f64 {
    t_k - ZERO_C_IN_K
}
