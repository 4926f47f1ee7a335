//! Observer: a subject notifies registered observers whenever its value
//! changes. Push style: the new value travels with the notification, so
//! observers never need a reference back to the subject.

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Subject and observers
// =============================================================================

pub trait Observer {
    fn update(&self, value: i32);
}

#[derive(Default)]
pub struct DataSource {
    value: i32,
    observers: Vec<Rc<dyn Observer>>,
}

impl DataSource {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
        self.notify_observers();
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(self.value);
        }
    }
}

/// Records every value it is told about.
#[derive(Default)]
pub struct SpreadSheet {
    received: RefCell<Vec<i32>>,
}

impl SpreadSheet {
    pub fn received(&self) -> Vec<i32> {
        self.received.borrow().clone()
    }
}

impl Observer for SpreadSheet {
    fn update(&self, value: i32) {
        self.received.borrow_mut().push(value);
    }
}

#[derive(Default)]
pub struct Chart {
    received: RefCell<Vec<i32>>,
}

impl Chart {
    pub fn received(&self) -> Vec<i32> {
        self.received.borrow().clone()
    }
}

impl Observer for Chart {
    fn update(&self, value: i32) {
        self.received.borrow_mut().push(value);
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Observer");

    let sheet = Rc::new(SpreadSheet::default());
    let chart = Rc::new(Chart::default());

    let mut source = DataSource::default();
    source.add_observer(sheet.clone());
    source.add_observer(chart.clone());
    source.set_value(1);
    source.set_value(2);
    println!("spreadsheet saw: {:?}", sheet.received());
    println!("chart saw:       {:?}", chart.received());

    let chart_handle: Rc<dyn Observer> = chart.clone();
    source.remove_observer(&chart_handle);
    source.set_value(3);
    println!("after detach, chart saw: {:?}", chart.received());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_observer_sees_every_change() {
        let sheet = Rc::new(SpreadSheet::default());
        let chart = Rc::new(Chart::default());
        let mut source = DataSource::default();
        source.add_observer(sheet.clone());
        source.add_observer(chart.clone());

        source.set_value(1);
        source.set_value(5);

        assert_eq!(sheet.received(), [1, 5]);
        assert_eq!(chart.received(), [1, 5]);
    }

    #[test]
    fn removed_observers_see_nothing_further() {
        let sheet = Rc::new(SpreadSheet::default());
        let mut source = DataSource::default();
        source.add_observer(sheet.clone());
        source.set_value(1);

        let handle: Rc<dyn Observer> = sheet.clone();
        source.remove_observer(&handle);
        source.set_value(2);

        assert_eq!(sheet.received(), [1]);
    }

    #[test]
    fn observers_registered_late_miss_earlier_values() {
        let sheet = Rc::new(SpreadSheet::default());
        let mut source = DataSource::default();
        source.set_value(1);
        source.add_observer(sheet.clone());
        source.set_value(2);
        assert_eq!(sheet.received(), [2]);
    }
}
