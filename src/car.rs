// 🚗 Car Record - Shared vs per-record state
// Lesson: type-wide fields, validated accessors, type-level operations
//
// Two kinds of data live here:
// - Type-wide: wheel count (constant) and manufacturer (one cell for every car)
// - Per-record: make, model, year, odometer

use serde::Serialize;
use std::borrow::Cow;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// SHARED STATE
// ============================================================================

/// Manufacturer every car starts with
pub const DEFAULT_MANUFACTURER: &str = "AutoCorp";

/// Earliest accepted model year (first production automobile)
pub const FIRST_MODEL_YEAR: i32 = 1886;

/// Latest accepted model year
pub const LAST_MODEL_YEAR: i32 = 2100;

/// The one manufacturer cell. Owned by the `Car` type, never by an instance.
static MANUFACTURER: RwLock<Cow<'static, str>> =
    RwLock::new(Cow::Borrowed(DEFAULT_MANUFACTURER));

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OdometerError {
    /// Odometers only roll forward
    #[error("Mileage cannot decrease! (current {current}, attempted {attempted})")]
    Decrease { current: u64, attempted: u64 },
}

// ============================================================================
// CAR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: i32,

    /// Only reachable through `odometer()` / `set_odometer()` / `drive()`
    odometer: u64,
}

impl Car {
    /// Every car has four wheels
    pub const WHEELS: u32 = 4;

    /// Create a car with a zero odometer
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self::with_odometer(make, model, year, 0)
    }

    /// Create a car with a starting odometer reading
    ///
    /// No validation of make/model/year happens here; see `is_valid_year`.
    pub fn with_odometer(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        odometer: u64,
    ) -> Self {
        Car {
            make: make.into(),
            model: model.into(),
            year,
            odometer,
        }
    }

    /// Add `miles` to the odometer and print a confirmation
    ///
    /// Returns the new total.
    pub fn drive(&mut self, miles: u64) -> u64 {
        self.odometer = self.odometer.saturating_add(miles);
        println!("Drove {} miles. Total mileage now: {}", miles, self.odometer);
        debug!(make = %self.make, miles, total = self.odometer, "drove");
        self.odometer
    }

    /// Current odometer reading
    pub fn odometer(&self) -> u64 {
        self.odometer
    }

    /// Set the odometer, refusing to roll it back
    pub fn set_odometer(&mut self, value: u64) -> Result<(), OdometerError> {
        if value < self.odometer {
            debug!(current = self.odometer, attempted = value, "rejected odometer rollback");
            return Err(OdometerError::Decrease {
                current: self.odometer,
                attempted: value,
            });
        }

        self.odometer = value;
        println!("Mileage updated to: {}", value);
        Ok(())
    }

    /// Manufacturer, read through to the shared cell
    pub fn manufacturer(&self) -> String {
        Car::current_manufacturer()
    }

    /// Manufacturer without needing an instance
    pub fn current_manufacturer() -> String {
        MANUFACTURER
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .to_string()
    }

    /// Change the manufacturer of every car, existing and future
    pub fn change_manufacturer(new_name: impl Into<String>) {
        let new_name = new_name.into();
        {
            let mut manufacturer = MANUFACTURER.write().unwrap_or_else(PoisonError::into_inner);
            *manufacturer = Cow::Owned(new_name.clone());
        }
        info!(manufacturer = %new_name, "manufacturer changed");
        println!("All cars now made by: {}", new_name);
    }

    /// True iff `year` is between 1886 and 2100 inclusive
    pub fn is_valid_year(year: i32) -> bool {
        (FIRST_MODEL_YEAR..=LAST_MODEL_YEAR).contains(&year)
    }

    /// Per-record fields plus the shared ones, frozen at this instant
    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            car: self.clone(),
            wheels: Car::WHEELS,
            manufacturer: self.manufacturer(),
        }
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// A car together with the type-wide values it reads through to
#[derive(Debug, Clone, Serialize)]
pub struct CarSnapshot {
    #[serde(flatten)]
    pub car: Car,
    pub wheels: u32,
    pub manufacturer: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_creation() {
        let car = Car::new("Toyota", "Camry", 2020);

        assert_eq!(car.make, "Toyota");
        assert_eq!(car.model, "Camry");
        assert_eq!(car.year, 2020);
        assert_eq!(car.odometer(), 0);

        let used = Car::with_odometer("Honda", "Civic", 2022, 50000);
        assert_eq!(used.odometer(), 50000);
    }

    #[test]
    fn test_drive_then_set_odometer() {
        let mut car = Car::new("Toyota", "Camry", 2020);

        assert_eq!(car.drive(100), 100);
        assert_eq!(car.odometer(), 100);

        car.set_odometer(200).unwrap();
        assert_eq!(car.odometer(), 200);
    }

    #[test]
    fn test_odometer_cannot_decrease() {
        let mut car = Car::with_odometer("Honda", "Civic", 2022, 50000);

        let err = car.set_odometer(50).unwrap_err();
        assert_eq!(
            err,
            OdometerError::Decrease {
                current: 50000,
                attempted: 50,
            }
        );
        assert!(err.to_string().starts_with("Mileage cannot decrease!"));

        // Unchanged after the failed write
        assert_eq!(car.odometer(), 50000);
    }

    #[test]
    fn test_odometer_same_value_allowed() {
        let mut car = Car::with_odometer("Honda", "Civic", 2022, 300);
        assert!(car.set_odometer(300).is_ok());
        assert_eq!(car.odometer(), 300);
    }

    #[test]
    fn test_odometer_never_goes_backwards() {
        let mut car = Car::new("Ford", "Model T", 1908);
        let mut last = car.odometer();

        for (step, value) in [5u64, 3, 40, 40, 12, 90, 0, 1000].into_iter().enumerate() {
            if step % 2 == 0 {
                car.drive(value);
            } else {
                let _ = car.set_odometer(value);
            }
            assert!(car.odometer() >= last);
            last = car.odometer();
        }
    }

    #[test]
    fn test_drive_saturates() {
        let mut car = Car::with_odometer("Ford", "Model T", 1908, u64::MAX - 1);
        assert_eq!(car.drive(10), u64::MAX);
    }

    #[test]
    fn test_is_valid_year_bounds() {
        assert!(Car::is_valid_year(1886));
        assert!(Car::is_valid_year(2100));
        assert!(Car::is_valid_year(2025));
        assert!(!Car::is_valid_year(1885));
        assert!(!Car::is_valid_year(2101));
        assert!(!Car::is_valid_year(1800));
    }

    // The only test that touches the shared manufacturer cell;
    // other tests running in parallel must not depend on its value.
    #[test]
    fn test_manufacturer_is_shared() {
        let car1 = Car::new("Toyota", "Camry", 2020);
        let car2 = Car::with_odometer("Honda", "Civic", 2022, 50000);
        assert_eq!(car1.manufacturer(), car2.manufacturer());

        Car::change_manufacturer("FutureMotors");
        assert_eq!(car1.manufacturer(), "FutureMotors");
        assert_eq!(car2.manufacturer(), "FutureMotors");

        let car3 = Car::new("Kia", "Rio", 2024);
        assert_eq!(car3.manufacturer(), "FutureMotors");
        assert_eq!(car3.snapshot().manufacturer, "FutureMotors");

        Car::change_manufacturer(DEFAULT_MANUFACTURER);
        assert_eq!(Car::current_manufacturer(), DEFAULT_MANUFACTURER);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let car = Car::with_odometer("Honda", "Civic", 2022, 50000);
        let json = serde_json::to_value(car.snapshot()).unwrap();

        assert_eq!(json["make"], "Honda");
        assert_eq!(json["odometer"], 50000);
        assert_eq!(json["wheels"], 4);
        assert!(json["manufacturer"].is_string());
    }
}
