// Visitor pattern over a tagged union: operations live in visitor types,
// the animal enum stays closed, and dispatch is a single match instead of
// a second virtual hop.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animal {
    Lion,
    Penguin,
    Elephant,
}

pub trait AnimalVisitor {
    fn visit_lion(&self) -> String;
    fn visit_penguin(&self) -> String;
    fn visit_elephant(&self) -> String;
}

impl Animal {
    pub fn accept(&self, visitor: &dyn AnimalVisitor) -> String {
        match self {
            Animal::Lion => visitor.visit_lion(),
            Animal::Penguin => visitor.visit_penguin(),
            Animal::Elephant => visitor.visit_elephant(),
        }
    }
}

pub struct FeedingVisitor;

impl AnimalVisitor for FeedingVisitor {
    fn visit_lion(&self) -> String {
        "Feeding the lion meat.".to_string()
    }

    fn visit_penguin(&self) -> String {
        "Feeding the penguin fish.".to_string()
    }

    fn visit_elephant(&self) -> String {
        "Feeding the elephant bananas.".to_string()
    }
}

pub struct HealthCheckVisitor;

impl AnimalVisitor for HealthCheckVisitor {
    fn visit_lion(&self) -> String {
        "Checking the lion's teeth.".to_string()
    }

    fn visit_penguin(&self) -> String {
        "Checking the penguin's feathers.".to_string()
    }

    fn visit_elephant(&self) -> String {
        "Checking the elephant's tusks.".to_string()
    }
}

fn main() {
    let zoo = [Animal::Lion, Animal::Penguin, Animal::Elephant];

    let feeding = FeedingVisitor;
    let health_check = HealthCheckVisitor;

    for animal in &zoo {
        println!("{}", animal.accept(&feeding));
    }

    for animal in &zoo {
        println!("{}", animal.accept(&health_check));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feeding_visitor_covers_every_variant() {
        let feeding = FeedingVisitor;
        assert_eq!(Animal::Lion.accept(&feeding), "Feeding the lion meat.");
        assert_eq!(Animal::Penguin.accept(&feeding), "Feeding the penguin fish.");
        assert_eq!(
            Animal::Elephant.accept(&feeding),
            "Feeding the elephant bananas."
        );
    }

    #[test]
    fn test_new_operation_without_touching_animals() {
        struct CleaningVisitor;
        impl AnimalVisitor for CleaningVisitor {
            fn visit_lion(&self) -> String {
                "Cleaning the lion enclosure.".to_string()
            }
            fn visit_penguin(&self) -> String {
                "Cleaning the penguin pool.".to_string()
            }
            fn visit_elephant(&self) -> String {
                "Cleaning the elephant yard.".to_string()
            }
        }

        let cleaning = CleaningVisitor;
        assert_eq!(
            Animal::Penguin.accept(&cleaning),
            "Cleaning the penguin pool."
        );
    }

    #[test]
    fn test_result_depends_on_both_animal_and_visitor() {
        let feeding = FeedingVisitor;
        let health_check = HealthCheckVisitor;
        assert_ne!(
            Animal::Lion.accept(&feeding),
            Animal::Lion.accept(&health_check)
        );
        assert_ne!(
            Animal::Lion.accept(&feeding),
            Animal::Penguin.accept(&feeding)
        );
    }
}
