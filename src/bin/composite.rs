// Composite pattern: individual employees and whole teams answer the
// same question, so a report walks the org chart without caring which
// node is a leaf.

use std::rc::Rc;

pub trait Employee {
    /// Report lines for this node and, for composites, everyone under it.
    fn details(&self) -> Vec<String>;
}

pub struct Developer {
    name: String,
    position: String,
}

impl Developer {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

impl Employee for Developer {
    fn details(&self) -> Vec<String> {
        vec![format!("Developer: {}, Position: {}", self.name, self.position)]
    }
}

pub struct Designer {
    name: String,
    position: String,
}

impl Designer {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

impl Employee for Designer {
    fn details(&self) -> Vec<String> {
        vec![format!("Designer: {}, Position: {}", self.name, self.position)]
    }
}

/// Composite node. Children are counted handles so the same person can
/// sit in more than one reporting line.
pub struct Manager {
    name: String,
    team: Vec<Rc<dyn Employee>>,
}

impl Manager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: Vec::new(),
        }
    }

    pub fn add_employee(&mut self, employee: Rc<dyn Employee>) {
        self.team.push(employee);
    }
}

impl Employee for Manager {
    fn details(&self) -> Vec<String> {
        let mut lines = vec![format!("Manager: {}", self.name)];
        for employee in &self.team {
            lines.extend(employee.details());
        }
        lines
    }
}

fn main() {
    let dev1 = Rc::new(Developer::new("Alice", "Frontend Developer"));
    let dev2 = Rc::new(Developer::new("Bob", "Backend Developer"));
    let designer = Rc::new(Designer::new("Charlie", "UX Designer"));

    let mut team_lead = Manager::new("Team Lead");
    team_lead.add_employee(dev1);
    team_lead.add_employee(dev2);
    team_lead.add_employee(designer);

    let mut general_manager = Manager::new("General Manager");
    general_manager.add_employee(Rc::new(team_lead));

    for line in general_manager.details() {
        println!("{line}");
    }
}
