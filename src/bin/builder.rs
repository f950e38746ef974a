// Builder pattern: a director drives the same step sequence through
// different builders to produce different pizzas.

use serde::Serialize;

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct Pizza {
    pub crust: String,
    pub sauce: String,
    pub toppings: Vec<String>,
}

impl Pizza {
    pub fn describe(&self) -> String {
        format!(
            "Pizza with {} crust, {} sauce, and toppings: {}",
            self.crust,
            self.sauce,
            self.toppings.join(", ")
        )
    }
}

pub trait PizzaBuilder {
    fn set_crust(&mut self);
    fn set_sauce(&mut self);
    fn add_toppings(&mut self);
    /// Moves the finished pizza out, leaving the builder reusable.
    fn build(&mut self) -> Pizza;
}

#[derive(Default)]
pub struct VeggiePizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for VeggiePizzaBuilder {
    fn set_crust(&mut self) {
        self.pizza.crust = "Thin".to_string();
    }

    fn set_sauce(&mut self) {
        self.pizza.sauce = "Tomato".to_string();
    }

    fn add_toppings(&mut self) {
        self.pizza.toppings = vec![
            "Bell Peppers".to_string(),
            "Mushrooms".to_string(),
            "Olives".to_string(),
        ];
    }

    fn build(&mut self) -> Pizza {
        std::mem::take(&mut self.pizza)
    }
}

#[derive(Default)]
pub struct MeatLoversPizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for MeatLoversPizzaBuilder {
    fn set_crust(&mut self) {
        self.pizza.crust = "Thick".to_string();
    }

    fn set_sauce(&mut self) {
        self.pizza.sauce = "Barbecue".to_string();
    }

    fn add_toppings(&mut self) {
        self.pizza.toppings = vec![
            "Pepperoni".to_string(),
            "Sausage".to_string(),
            "Bacon".to_string(),
        ];
    }

    fn build(&mut self) -> Pizza {
        std::mem::take(&mut self.pizza)
    }
}

/// Controls the construction sequence; builders control the content.
pub struct PizzaDirector;

impl PizzaDirector {
    pub fn construct(builder: &mut dyn PizzaBuilder) -> Pizza {
        builder.set_crust();
        builder.set_sauce();
        builder.add_toppings();
        builder.build()
    }
}

fn main() {
    let mut veggie_builder = VeggiePizzaBuilder::default();
    let mut meat_builder = MeatLoversPizzaBuilder::default();

    let veggie_pizza = PizzaDirector::construct(&mut veggie_builder);
    println!("{}", veggie_pizza.describe());

    let meat_pizza = PizzaDirector::construct(&mut meat_builder);
    println!("{}", meat_pizza.describe());

    match serde_json::to_string_pretty(&meat_pizza) {
        Ok(json) => println!("As an order ticket:\n{json}"),
        Err(err) => eprintln!("Failed to serialize order: {err}"),
    }
}
