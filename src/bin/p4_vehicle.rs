//! Pattern 4: Composition Over Inheritance
//! Example: A wrapping entity that honors the base entity's contract
//!
//! Run with: cargo run --bin p4_vehicle

use fundamentals_patterns::vehicle::{Car, Vehicle, VehicleInfo};

fn main() {
    println!("=== Base entity ===");
    let vehicle = Vehicle::new("Honda", 2018);
    println!("{}", vehicle.info());

    println!("\n=== Specialized entity ===");
    let car = Car::new("Toyota", 2020, "Corolla");
    println!("{}", car.info()); // Same contract as the base entity
    println!("{}", car.model_info());

    // Both entities behind the same trait object.
    println!("\n=== Dynamic dispatch ===");
    let fleet: Vec<Box<dyn VehicleInfo>> = vec![Box::new(vehicle), Box::new(car)];
    for entity in &fleet {
        println!("{}", entity.info());
    }
}
