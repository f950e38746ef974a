// Prototype pattern: new shapes are made by cloning a configured
// prototype instead of constructing from scratch.

pub trait Shape {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: u32,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Drawing a Circle with radius {}", self.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing a Rectangle with width {} and height {}",
            self.width, self.height
        )
    }
}

fn main() {
    let circle_prototype: Box<dyn Shape> = Box::new(Circle::new(10));
    let rectangle_prototype: Box<dyn Shape> = Box::new(Rectangle::new(5, 8));

    let cloned_circle = circle_prototype.clone_box();
    println!("{}", cloned_circle.draw());

    let cloned_rectangle = rectangle_prototype.clone_box();
    println!("{}", cloned_rectangle.draw());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_preserves_state() {
        let prototype: Box<dyn Shape> = Box::new(Circle::new(10));
        let clone = prototype.clone_box();
        assert_eq!(clone.draw(), "Drawing a Circle with radius 10");
        assert_eq!(clone.draw(), prototype.draw());
    }

    #[test]
    fn test_clone_is_independent_of_the_prototype() {
        let prototype: Box<dyn Shape> = Box::new(Rectangle::new(5, 8));
        let clone = prototype.clone_box();
        drop(prototype);
        assert_eq!(clone.draw(), "Drawing a Rectangle with width 5 and height 8");
    }

    #[test]
    fn test_heterogeneous_prototypes_clone_through_one_interface() {
        let prototypes: Vec<Box<dyn Shape>> =
            vec![Box::new(Circle::new(1)), Box::new(Rectangle::new(2, 3))];
        let clones: Vec<Box<dyn Shape>> = prototypes.iter().map(|p| p.clone_box()).collect();
        assert_eq!(clones.len(), 2);
        for (original, clone) in prototypes.iter().zip(&clones) {
            assert_eq!(original.draw(), clone.draw());
        }
    }
}
