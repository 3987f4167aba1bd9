//! Pattern 4: Composition Over Inheritance
//!
//! A base entity (`Vehicle`) and a specialized entity (`Car`) that holds
//! one. `Car` satisfies the base contract unchanged by delegating to its
//! inner `Vehicle`, and adds its own model operation independently.

use std::fmt;

/// The base display contract: one descriptive line per entity.
pub trait VehicleInfo {
    fn info(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    make: String,
    year: u32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: u32) -> Self {
        Vehicle {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn year(&self) -> u32 {
        self.year
    }
}

impl VehicleInfo for Vehicle {
    fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.info())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: u32, model: impl Into<String>) -> Self {
        Car {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The specialized display line, independent of the base line.
    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl VehicleInfo for Car {
    fn info(&self) -> String {
        self.vehicle.info()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.info(), self.model_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_info_line() {
        let vehicle = Vehicle::new("Honda", 2018);
        assert_eq!(vehicle.info(), "Make: Honda, Year: 2018");
    }

    #[test]
    fn test_car_satisfies_base_contract() {
        let car = Car::new("Toyota", 2020, "Corolla");
        assert_eq!(car.info(), "Make: Toyota, Year: 2020");
        assert_eq!(car.info(), car.vehicle().info());
    }

    #[test]
    fn test_car_model_line_is_independent() {
        let car = Car::new("Toyota", 2020, "Corolla");
        assert_eq!(car.model_info(), "Model: Corolla");
    }

    #[test]
    fn test_trait_object_dispatch() {
        let entities: Vec<Box<dyn VehicleInfo>> = vec![
            Box::new(Vehicle::new("Ford", 1999)),
            Box::new(Car::new("Toyota", 2020, "Corolla")),
        ];
        let lines: Vec<String> = entities.iter().map(|e| e.info()).collect();
        assert_eq!(lines[0], "Make: Ford, Year: 1999");
        assert_eq!(lines[1], "Make: Toyota, Year: 2020");
    }

    #[test]
    fn test_display_impls() {
        let car = Car::new("Toyota", 2020, "Corolla");
        assert_eq!(car.to_string(), "Make: Toyota, Year: 2020, Model: Corolla");
        assert_eq!(
            Vehicle::new("Toyota", 2020).to_string(),
            "Make: Toyota, Year: 2020"
        );
    }
}
