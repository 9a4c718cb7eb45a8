// cre-core/src/units.rs

use uom::si::f64::{
    Mass as UomMass, MassDensity as UomMassDensity, MolarConcentration as UomMolarConcentration,
    MolarEnergy as UomMolarEnergy, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Concentration = UomMolarConcentration;
pub type Density = UomMassDensity;
pub type Mass = UomMass;
pub type MolarEnergy = UomMolarEnergy;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn mol_per_m3(v: f64) -> Concentration {
    use uom::si::molar_concentration::mole_per_cubic_meter;
    Concentration::new::<mole_per_cubic_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_per_mol(v: f64) -> MolarEnergy {
    use uom::si::molar_energy::joule_per_mole;
    MolarEnergy::new::<joule_per_mole>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Conversions between the caller's units (litres, hours, kJ) and SI.
///
/// These are plain multiplications and divisions by exact constants rather than
/// uom unit factors, so a value entered at the boundary maps to the same bits
/// every time.
pub mod boundary {
    use super::*;

    pub const LITERS_PER_M3: f64 = 1000.0;
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const J_PER_KJ: f64 = 1000.0;

    /// mol/L → mol/m³ (×1000)
    #[inline]
    pub fn concentration_from_mol_per_l(v: f64) -> Concentration {
        mol_per_m3(v * LITERS_PER_M3)
    }

    /// L/hr → m³/s (÷3,600,000)
    #[inline]
    pub fn flow_from_l_per_hr(v: f64) -> VolumeRate {
        m3ps(v / (LITERS_PER_M3 * SECONDS_PER_HOUR))
    }

    /// kJ/mol → J/mol (×1000)
    #[inline]
    pub fn energy_from_kj_per_mol(v: f64) -> MolarEnergy {
        j_per_mol(v * J_PER_KJ)
    }

    /// kg/L → kg/m³ (×1000)
    #[inline]
    pub fn density_from_kg_per_l(v: f64) -> Density {
        kg_per_m3(v * LITERS_PER_M3)
    }

    #[inline]
    pub fn concentration_to_mol_per_l(c: Concentration) -> f64 {
        c.value / LITERS_PER_M3
    }

    #[inline]
    pub fn volume_to_liters(v: Volume) -> f64 {
        v.value * LITERS_PER_M3
    }
}

#[cfg(test)]
mod tests {
    use super::boundary::*;
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _c = mol_per_m3(1000.0);
        let _q = m3ps(1e-6);
        let _v = m3(0.5);
        let _w = kg(2.0);
        let _rho = kg_per_m3(800.0);
        let _ea = j_per_mol(50_000.0);
        let _t = k(300.0);
        let _dt = s(0.1);
        let _r = unitless(0.5);
    }

    #[test]
    fn boundary_conversions_are_exact() {
        assert_eq!(concentration_from_mol_per_l(1.5).value, 1500.0);
        assert_eq!(flow_from_l_per_hr(36.0).value, 36.0 / 3_600_000.0);
        assert_eq!(energy_from_kj_per_mol(42.0).value, 42_000.0);
        assert_eq!(density_from_kg_per_l(0.8).value, 800.0);
        assert_eq!(volume_to_liters(m3(0.25)), 250.0);
        assert_eq!(concentration_to_mol_per_l(mol_per_m3(500.0)), 0.5);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn concentration_scale_preserves_ordering(a in 1e-6_f64..1e3, b in 1e-6_f64..1e3) {
                let ca = concentration_from_mol_per_l(a).value;
                let cb = concentration_from_mol_per_l(b).value;
                prop_assert_eq!(a < b, ca < cb);
            }
        }
    }
}
