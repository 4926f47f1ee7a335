//! Command: wrap a receiver call in an object so the invoker (a button, a
//! queue) never needs to know who does the work. Commands compose: a
//! composite command runs a whole list in order.

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Receiver
// =============================================================================

/// The receiver. Keeps the customers it was asked to add so the effect of a
/// command is observable.
#[derive(Default)]
pub struct CustomerService {
    customers: RefCell<Vec<String>>,
}

impl CustomerService {
    pub fn add_customer(&self, name: &str) {
        self.customers.borrow_mut().push(name.to_string());
    }

    pub fn customers(&self) -> Vec<String> {
        self.customers.borrow().clone()
    }
}

// =============================================================================
// Commands and invoker
// =============================================================================

pub trait Command {
    fn execute(&self);
}

pub struct AddCustomer {
    service: Rc<CustomerService>,
    name: String,
}

impl AddCustomer {
    pub fn new(service: Rc<CustomerService>, name: impl Into<String>) -> Self {
        AddCustomer {
            service,
            name: name.into(),
        }
    }
}

impl Command for AddCustomer {
    fn execute(&self) {
        self.service.add_customer(&self.name);
    }
}

/// The invoker. Knows nothing about customer services, only that it holds
/// something executable.
pub struct Button {
    command: Box<dyn Command>,
}

impl Button {
    pub fn new(command: Box<dyn Command>) -> Self {
        Button { command }
    }

    pub fn click(&self) {
        self.command.execute();
    }
}

// =============================================================================
// Composite command: image edits queued and run in order
// =============================================================================

pub struct Resize {
    log: Rc<RefCell<Vec<String>>>,
}

impl Command for Resize {
    fn execute(&self) {
        self.log.borrow_mut().push("resize".to_string());
    }
}

pub struct BlackAndWhite {
    log: Rc<RefCell<Vec<String>>>,
}

impl Command for BlackAndWhite {
    fn execute(&self) {
        self.log.borrow_mut().push("black and white".to_string());
    }
}

#[derive(Default)]
pub struct CompositeCommand {
    commands: Vec<Box<dyn Command>>,
}

impl CompositeCommand {
    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }
}

impl Command for CompositeCommand {
    fn execute(&self) {
        for command in &self.commands {
            command.execute();
        }
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Command");

    let service = Rc::new(CustomerService::default());
    let button = Button::new(Box::new(AddCustomer::new(Rc::clone(&service), "Ada")));
    button.click();
    println!("after click, customers: {:?}", service.customers());

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut composite = CompositeCommand::default();
    composite.add(Box::new(Resize {
        log: Rc::clone(&log),
    }));
    composite.add(Box::new(BlackAndWhite {
        log: Rc::clone(&log),
    }));
    composite.execute();
    println!("composite ran: {}", log.borrow().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_the_button_reaches_the_receiver() {
        let service = Rc::new(CustomerService::default());
        let button = Button::new(Box::new(AddCustomer::new(Rc::clone(&service), "Ada")));
        button.click();
        button.click();
        assert_eq!(service.customers(), ["Ada", "Ada"]);
    }

    #[test]
    fn composite_runs_children_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeCommand::default();
        composite.add(Box::new(Resize {
            log: Rc::clone(&log),
        }));
        composite.add(Box::new(BlackAndWhite {
            log: Rc::clone(&log),
        }));
        composite.execute();
        assert_eq!(*log.borrow(), ["resize", "black and white"]);
    }

    #[test]
    fn empty_composite_is_a_no_op() {
        CompositeCommand::default().execute();
    }
}
