// Delegate pattern: a printer hands the actual output work to whichever
// delegate is currently plugged in.

use std::rc::Rc;

pub trait PrintStrategy {
    fn print(&self, text: &str) -> String;
}

pub struct ConsolePrint;

impl PrintStrategy for ConsolePrint {
    fn print(&self, text: &str) -> String {
        format!("Printing to console: {text}")
    }
}

pub struct FilePrint;

impl PrintStrategy for FilePrint {
    fn print(&self, text: &str) -> String {
        // A real implementation would write to a file.
        format!("Saving to file: {text}")
    }
}

pub struct Printer {
    strategy: Option<Rc<dyn PrintStrategy>>,
}

impl Printer {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn set_print_strategy(&mut self, strategy: Rc<dyn PrintStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn print(&self, text: &str) -> String {
        match &self.strategy {
            Some(strategy) => strategy.print(text),
            None => "No print strategy set!".to_string(),
        }
    }
}

fn main() {
    let mut printer = Printer::new();

    let console_printer = Rc::new(ConsolePrint);
    let file_printer = Rc::new(FilePrint);

    printer.set_print_strategy(console_printer);
    println!("{}", printer.print("Hello, Console!"));

    printer.set_print_strategy(file_printer);
    println!("{}", printer.print("Hello, File!"));
}
