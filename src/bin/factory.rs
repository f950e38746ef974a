// Factory patterns: a simple factory keyed by a type string, then the
// factory-method variant where each maker decides what it creates.

use colored::Colorize;
use thiserror::Error;

// =============================================================================
// Part 1: Simple factory with a fallible discriminator
// =============================================================================

pub trait Car: std::fmt::Debug {
    fn drive(&self) -> String;
}

#[derive(Debug)]
pub struct Sedan;

impl Car for Sedan {
    fn drive(&self) -> String {
        "Driving a Sedan.".to_string()
    }
}

#[derive(Debug)]
pub struct Suv;

impl Car for Suv {
    fn drive(&self) -> String {
        "Driving an SUV.".to_string()
    }
}

#[derive(Debug)]
pub struct SportsCar;

impl Car for SportsCar {
    fn drive(&self) -> String {
        "Driving a Sports Car.".to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FactoryError {
    #[error("Unknown car type: '{0}'")]
    UnknownCarType(String),
}

pub struct CarFactory;

impl CarFactory {
    /// An unrecognized type string is an error carrying the offending
    /// input; nothing is created.
    pub fn create(kind: &str) -> Result<Box<dyn Car>, FactoryError> {
        match kind {
            "Sedan" => Ok(Box::new(Sedan)),
            "SUV" => Ok(Box::new(Suv)),
            "SportsCar" => Ok(Box::new(SportsCar)),
            other => Err(FactoryError::UnknownCarType(other.to_string())),
        }
    }
}

// =============================================================================
// Part 2: Factory method, creation delegated to each maker
// =============================================================================

pub trait CarMaker {
    fn create_car(&self) -> Box<dyn Car>;
}

pub struct SedanFactory;

impl CarMaker for SedanFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Sedan)
    }
}

pub struct SuvFactory;

impl CarMaker for SuvFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Suv)
    }
}

fn order_car(kind: &str) {
    match CarFactory::create(kind) {
        Ok(car) => println!("{} {}", "[ok]".green(), car.drive()),
        Err(err) => println!("{} {}", "[err]".red(), err),
    }
}

fn main() {
    order_car("Sedan");
    order_car("SUV");
    order_car("Hovercraft"); // rejected, nothing created

    let makers: Vec<Box<dyn CarMaker>> = vec![Box::new(SedanFactory), Box::new(SuvFactory)];
    for maker in &makers {
        println!("{}", maker.create_car().drive());
    }
}
