// Decorator pattern: toppings wrap a coffee and layer onto its
// description and price without changing the base recipe.

use colored::Colorize;

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct PlainCoffee;

impl Coffee for PlainCoffee {
    fn description(&self) -> String {
        "Plain Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

pub struct MilkDecorator {
    coffee: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.coffee.description())
    }

    fn cost(&self) -> f64 {
        self.coffee.cost() + 0.5
    }
}

pub struct SugarDecorator {
    coffee: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.coffee.description())
    }

    fn cost(&self) -> f64 {
        self.coffee.cost() + 0.2
    }
}

pub struct CaramelDecorator {
    coffee: Box<dyn Coffee>,
}

impl CaramelDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for CaramelDecorator {
    fn description(&self) -> String {
        format!("{}, Caramel", self.coffee.description())
    }

    fn cost(&self) -> f64 {
        self.coffee.cost() + 0.7
    }
}

fn print_receipt(coffee: &dyn Coffee) {
    println!(
        "{} costs {}",
        coffee.description(),
        format!("${:.2}", coffee.cost()).green()
    );
}

fn main() {
    let mut my_coffee: Box<dyn Coffee> = Box::new(PlainCoffee);
    print_receipt(my_coffee.as_ref());

    my_coffee = Box::new(MilkDecorator::new(my_coffee));
    print_receipt(my_coffee.as_ref());

    my_coffee = Box::new(SugarDecorator::new(my_coffee));
    print_receipt(my_coffee.as_ref());

    my_coffee = Box::new(CaramelDecorator::new(my_coffee));
    print_receipt(my_coffee.as_ref());
}
