//! # Junior-High Mechanics Formulas
//!
//! One pure function per physical formula. Inputs are already-validated SI
//! quantities; outputs are SI quantities. Functions with a divisor guard it
//! and return [`CalcError::DivisionByZero`] instead of computing.
//!
//! ## Notation
//!
//! - `s` = Displacement (m)
//! - `t` = Time (s)
//! - `m` = Mass (kg)
//! - `a` = Acceleration (m/s²)
//! - `F` = Force (N)
//! - `A` = Area (m²)
//! - `V` = Volume (m³)
//! - `v` = Velocity (m/s)
//! - `h` = Height (m)
//! - `g` = Gravitational acceleration (m/s²)
//! - `θ` = Angle between force and displacement (degrees)
//!
//! ## Numeric Semantics
//!
//! All arithmetic is IEEE-754 double precision. Nothing is clamped: an
//! overflow to infinity is returned as-is and rendered by the formatter.

use crate::errors::{CalcError, CalcResult};

/// Default gravitational acceleration at Earth's surface (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.8;

#[inline]
fn guard_nonzero(divisor: f64, name: &str) -> CalcResult<()> {
    if divisor == 0.0 {
        return Err(CalcError::division_by_zero(name));
    }
    Ok(())
}

// =============================================================================
// KINEMATICS
// =============================================================================

/// Calculate average velocity from displacement and elapsed time
///
/// # Formula
/// v = s / t
///
/// # Errors
/// `DivisionByZero` when `time` is zero
///
/// # Example
/// ```rust
/// use rumus_core::formulas::mechanics::velocity;
///
/// assert_eq!(velocity(100.0, 5.0).unwrap(), 20.0);
/// assert!(velocity(100.0, 0.0).is_err());
/// ```
#[inline]
pub fn velocity(displacement: f64, time: f64) -> CalcResult<f64> {
    guard_nonzero(time, "time")?;
    Ok(displacement / time)
}

/// Calculate average acceleration from a change in velocity
///
/// # Formula
/// a = (v₂ - v₁) / t
///
/// # Arguments
/// * `initial_velocity` - v₁ (m/s)
/// * `final_velocity` - v₂ (m/s)
/// * `time` - Elapsed time (s)
#[inline]
pub fn acceleration(initial_velocity: f64, final_velocity: f64, time: f64) -> CalcResult<f64> {
    guard_nonzero(time, "time")?;
    Ok((final_velocity - initial_velocity) / time)
}

// =============================================================================
// DYNAMICS
// =============================================================================

/// Newton's second law
///
/// # Formula
/// F = m × a
#[inline]
pub fn force(mass: f64, acceleration: f64) -> CalcResult<f64> {
    Ok(mass * acceleration)
}

/// Linear momentum
///
/// # Formula
/// p = m × v
#[inline]
pub fn momentum(mass: f64, velocity: f64) -> CalcResult<f64> {
    Ok(mass * velocity)
}

// =============================================================================
// FLUIDS & MATTER
// =============================================================================

/// Pressure exerted by a force spread over an area
///
/// # Formula
/// P = F / A
///
/// # Errors
/// `DivisionByZero` when `area` is zero
#[inline]
pub fn pressure(force: f64, area: f64) -> CalcResult<f64> {
    guard_nonzero(area, "area")?;
    Ok(force / area)
}

/// Mass per unit volume
///
/// # Formula
/// ρ = m / V
///
/// # Errors
/// `DivisionByZero` when `volume` is zero
#[inline]
pub fn density(mass: f64, volume: f64) -> CalcResult<f64> {
    guard_nonzero(volume, "volume")?;
    Ok(mass / volume)
}

// =============================================================================
// ENERGY
// =============================================================================

/// Work done by a constant force along a straight displacement
///
/// ```text
///          F
///         ↗
///        / θ
///    ───●──────────→ s
/// ```
///
/// # Formula
/// W = F × s × cos(θ)
///
/// # Arguments
/// * `force` - Force magnitude (N)
/// * `displacement` - Displacement magnitude (m)
/// * `angle_deg` - Angle between force and displacement, in degrees.
///   Converted with `θ_rad = θ_deg × π / 180`.
#[inline]
pub fn work(force: f64, displacement: f64, angle_deg: f64) -> CalcResult<f64> {
    let radians = angle_deg * std::f64::consts::PI / 180.0;
    Ok(force * displacement * radians.cos())
}

/// Energy of motion
///
/// # Formula
/// Ek = ½ × m × v²
#[inline]
pub fn kinetic_energy(mass: f64, velocity: f64) -> CalcResult<f64> {
    Ok(0.5 * mass * velocity * velocity)
}

/// Gravitational potential energy relative to the reference height
///
/// # Formula
/// Ep = m × g × h
///
/// Pass [`STANDARD_GRAVITY`] for `gravity` unless the problem states otherwise.
#[inline]
pub fn potential_energy(mass: f64, height: f64, gravity: f64) -> CalcResult<f64> {
    Ok(mass * gravity * height)
}

/// Rate of doing work
///
/// # Formula
/// P = W / t
///
/// # Errors
/// `DivisionByZero` when `time` is zero
#[inline]
pub fn power(work: f64, time: f64) -> CalcResult<f64> {
    guard_nonzero(time, "time")?;
    Ok(work / time)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_velocity() {
        assert_eq!(velocity(100.0, 5.0).unwrap(), 20.0);
        assert_eq!(velocity(-30.0, 3.0).unwrap(), -10.0);
    }

    #[test]
    fn test_force() {
        assert_eq!(force(5.0, 3.0).unwrap(), 15.0);
    }

    #[test]
    fn test_pressure() {
        assert_eq!(pressure(500.0, 2.0).unwrap(), 250.0);
    }

    #[test]
    fn test_guarded_divisors() {
        assert_eq!(velocity(1.0, 0.0), Err(CalcError::division_by_zero("time")));
        assert_eq!(pressure(500.0, 0.0), Err(CalcError::division_by_zero("area")));
        assert_eq!(density(1.0, 0.0), Err(CalcError::division_by_zero("volume")));
        assert_eq!(power(1.0, 0.0), Err(CalcError::division_by_zero("time")));
        assert_eq!(acceleration(0.0, 10.0, 0.0), Err(CalcError::division_by_zero("time")));
        // -0.0 compares equal to zero
        assert!(velocity(1.0, -0.0).is_err());
    }

    #[test]
    fn test_work_angles() {
        assert_eq!(work(20.0, 5.0, 0.0).unwrap(), 100.0);
        assert!(work(20.0, 5.0, 90.0).unwrap().abs() < TOL);
        assert!((work(20.0, 5.0, 60.0).unwrap() - 50.0).abs() < TOL);
        assert!((work(20.0, 5.0, 180.0).unwrap() + 100.0).abs() < TOL);
    }

    #[test]
    fn test_kinetic_energy() {
        assert_eq!(kinetic_energy(2.0, 4.0).unwrap(), 16.0);
        assert_eq!(kinetic_energy(2.0, -4.0).unwrap(), 16.0);
    }

    #[test]
    fn test_potential_energy() {
        let ep = potential_energy(3.0, 2.0, STANDARD_GRAVITY).unwrap();
        assert!((ep - 58.8).abs() < TOL);
    }

    #[test]
    fn test_density() {
        assert!((density(10.0, 0.002).unwrap() - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(200.0, 4.0).unwrap(), 50.0);
    }

    #[test]
    fn test_acceleration() {
        assert_eq!(acceleration(0.0, 20.0, 4.0).unwrap(), 5.0);
        assert_eq!(acceleration(20.0, 0.0, 4.0).unwrap(), -5.0);
    }

    #[test]
    fn test_momentum() {
        assert_eq!(momentum(1500.0, 20.0).unwrap(), 30000.0);
    }

    #[test]
    fn test_overflow_is_not_clamped() {
        let f = force(f64::MAX, 10.0).unwrap();
        assert!(f.is_infinite());
    }
}
