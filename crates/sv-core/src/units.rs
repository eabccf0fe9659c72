// sv-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

/// Minutes to seconds.
#[inline]
pub fn minutes_to_s(v: f64) -> f64 {
    use uom::si::time::second;
    minutes(v).get::<second>()
}

/// Seconds to minutes, for chart axes.
#[inline]
pub fn s_to_minutes(v: f64) -> f64 {
    use uom::si::time::minute;
    s(v).get::<minute>()
}

/// Pascal to kilopascal.
#[inline]
pub fn pa_to_kpa(v: f64) -> f64 {
    use uom::si::pressure::kilopascal;
    pa(v).get::<kilopascal>()
}

/// Celsius to Kelvin (absolute temperature for the gas law).
#[inline]
pub fn c_to_k(v: f64) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    degc(v).get::<kelvin>()
}
