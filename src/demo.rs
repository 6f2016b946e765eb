// 🎬 Car Demo - the fixed example walkthrough
// Prints the same transcript every run (given a fresh process).

use anyhow::Result;

use crate::car::{Car, CarSnapshot};

/// Walk through every `Car` feature in order
///
/// Returns both cars so callers can inspect or serialize the end state.
pub fn run_car_demo() -> Result<(Car, Car)> {
    let mut car1 = Car::new("Toyota", "Camry", 2020);
    let car2 = Car::with_odometer("Honda", "Civic", 2022, 50000);

    // Per-record
    println!("Car1: {} {}, Year: {}", car1.make, car1.model, car1.year);
    println!("Car2: {} {}, Year: {}", car2.make, car2.model, car2.year);

    // Type-wide
    println!("All cars have {} wheels", Car::WHEELS);
    println!("Car1 manufacturer: {}", car1.manufacturer());
    println!("Car2 manufacturer: {}", car2.manufacturer());

    car1.drive(100);
    println!("Car1 mileage (via accessor): {}", car1.odometer());

    car1.set_odometer(200)?;
    // car1.set_odometer(50) would fail with OdometerError::Decrease

    Car::change_manufacturer("FutureMotors");
    println!("{}", car1.manufacturer());
    println!("{}", car2.manufacturer());

    println!("{}", Car::is_valid_year(2025));
    println!("{}", Car::is_valid_year(1800));

    Ok((car1, car2))
}

/// JSON view of the demo's end state
pub fn snapshots_json(cars: &[&Car]) -> Result<String> {
    let snapshots: Vec<CarSnapshot> = cars.iter().map(|car| car.snapshot()).collect();
    Ok(serde_json::to_string_pretty(&snapshots)?)
}
