// Strategy pattern: a GPS navigator swaps route-calculation algorithms
// at runtime without changing its own logic.

use std::rc::Rc;

pub trait RouteStrategy {
    fn calculate_route(&self) -> String;
}

pub struct ShortestRoute;

impl RouteStrategy for ShortestRoute {
    fn calculate_route(&self) -> String {
        "Calculating the shortest route.".to_string()
    }
}

pub struct FastestRoute;

impl RouteStrategy for FastestRoute {
    fn calculate_route(&self) -> String {
        "Calculating the fastest route.".to_string()
    }
}

pub struct ScenicRoute;

impl RouteStrategy for ScenicRoute {
    fn calculate_route(&self) -> String {
        "Calculating the scenic route.".to_string()
    }
}

pub struct GpsNavigator {
    strategy: Option<Rc<dyn RouteStrategy>>,
}

impl GpsNavigator {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn set_strategy(&mut self, strategy: Rc<dyn RouteStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn navigate(&self) -> String {
        match &self.strategy {
            Some(strategy) => strategy.calculate_route(),
            None => "No strategy set.".to_string(),
        }
    }
}

fn main() {
    let mut navigator = GpsNavigator::new();

    let shortest = Rc::new(ShortestRoute);
    let fastest = Rc::new(FastestRoute);
    let scenic = Rc::new(ScenicRoute);

    println!("{}", navigator.navigate()); // No strategy set.

    navigator.set_strategy(shortest);
    println!("{}", navigator.navigate());

    navigator.set_strategy(fastest);
    println!("{}", navigator.navigate());

    navigator.set_strategy(scenic);
    println!("{}", navigator.navigate());
}
