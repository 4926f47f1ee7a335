//! Template Method: the trait's provided method fixes the operation's
//! skeleton; implementors fill in the step that varies. Here every task is
//! audited before it runs, and every window removal is bracketed by
//! optional hooks.

use std::cell::RefCell;

// =============================================================================
// Audited tasks
// =============================================================================

#[derive(Default)]
pub struct AuditTrail {
    records: RefCell<Vec<String>>,
}

impl AuditTrail {
    pub fn record(&self, entry: &str) {
        self.records.borrow_mut().push(entry.to_string());
    }

    pub fn records(&self) -> Vec<String> {
        self.records.borrow().clone()
    }
}

pub trait Task {
    fn name(&self) -> &str;

    /// The varying step.
    fn run(&self) -> String;

    /// The template: audit first, then run. Implementors don't override
    /// this.
    fn execute(&self, audit: &AuditTrail) -> String {
        audit.record(self.name());
        self.run()
    }
}

pub struct TransferMoney;

impl Task for TransferMoney {
    fn name(&self) -> &str {
        "transfer-money"
    }

    fn run(&self) -> String {
        "transferring money".to_string()
    }
}

pub struct GenerateReport;

impl Task for GenerateReport {
    fn name(&self) -> &str {
        "generate-report"
    }

    fn run(&self) -> String {
        "generating report".to_string()
    }
}

// =============================================================================
// Window close hooks
// =============================================================================

pub trait Window {
    fn on_closing(&self) -> Option<String> {
        None
    }

    fn on_closed(&self) -> Option<String> {
        None
    }

    /// Template: before-hook, removal, after-hook. Returns the steps that
    /// actually ran.
    fn close(&self) -> Vec<String> {
        let mut steps = Vec::new();
        if let Some(step) = self.on_closing() {
            steps.push(step);
        }
        steps.push("removing the window from the screen".to_string());
        if let Some(step) = self.on_closed() {
            steps.push(step);
        }
        steps
    }
}

pub struct PlainWindow;

impl Window for PlainWindow {}

pub struct ChatWindow;

impl Window for ChatWindow {
    fn on_closing(&self) -> Option<String> {
        Some("closing streams".to_string())
    }

    fn on_closed(&self) -> Option<String> {
        Some("disconnecting from the server".to_string())
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("Template Method");

    let audit = AuditTrail::default();
    for task in [
        Box::new(TransferMoney) as Box<dyn Task>,
        Box::new(GenerateReport),
    ] {
        println!("{}", task.execute(&audit));
    }
    println!("audit trail: {:?}", audit.records());

    for step in ChatWindow.close() {
        println!("{step}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_task_is_audited_before_it_runs() {
        let audit = AuditTrail::default();
        TransferMoney.execute(&audit);
        GenerateReport.execute(&audit);
        assert_eq!(audit.records(), ["transfer-money", "generate-report"]);
    }

    #[test]
    fn hooks_bracket_the_window_removal() {
        let steps = ChatWindow.close();
        assert_eq!(
            steps,
            [
                "closing streams",
                "removing the window from the screen",
                "disconnecting from the server",
            ]
        );
    }

    #[test]
    fn hookless_windows_just_close() {
        assert_eq!(PlainWindow.close(), ["removing the window from the screen"]);
    }
}
