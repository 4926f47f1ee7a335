//! The pattern registry: every demo in the crate, addressable by name.

use std::fmt;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::{behavioral, structural};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Behavioral,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Behavioral => write!(f, "behavioral"),
            Category::Structural => write!(f, "structural"),
        }
    }
}

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub run: fn(),
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error(
        "unknown pattern '{name}'{}\navailable: {}",
        .suggestion.as_ref().map(|s| format!(", did you mean '{s}'?")).unwrap_or_default(),
        .available.join(", ")
    )]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
        available: Vec<&'static str>,
    },
}

lazy_static! {
    static ref CATALOGUE: Vec<Pattern> = vec![
        Pattern {
            name: "chain-of-responsibility",
            category: Category::Behavioral,
            summary: "pass a request along a chain until a handler consumes it",
            run: behavioral::chain_of_responsibility::demo,
        },
        Pattern {
            name: "command",
            category: Category::Behavioral,
            summary: "wrap a receiver call in an object so invokers stay decoupled",
            run: behavioral::command::demo,
        },
        Pattern {
            name: "iterator",
            category: Category::Behavioral,
            summary: "walk a collection without exposing its internals",
            run: behavioral::iterator::demo,
        },
        Pattern {
            name: "mediator",
            category: Category::Behavioral,
            summary: "centralize widget interaction logic in one object",
            run: behavioral::mediator::demo,
        },
        Pattern {
            name: "memento",
            category: Category::Behavioral,
            summary: "snapshot and restore an object's state for undo",
            run: behavioral::memento::demo,
        },
        Pattern {
            name: "observer",
            category: Category::Behavioral,
            summary: "notify registered listeners when a value changes",
            run: behavioral::observer::demo,
        },
        Pattern {
            name: "state",
            category: Category::Behavioral,
            summary: "switch behavior by swapping the current state object",
            run: behavioral::state::demo,
        },
        Pattern {
            name: "strategy",
            category: Category::Behavioral,
            summary: "pass interchangeable algorithms into an operation",
            run: behavioral::strategy::demo,
        },
        Pattern {
            name: "template-method",
            category: Category::Behavioral,
            summary: "fix an operation's skeleton, let steps vary",
            run: behavioral::template_method::demo,
        },
        Pattern {
            name: "visitor",
            category: Category::Behavioral,
            summary: "add operations over a node structure without touching it",
            run: behavioral::visitor::demo,
        },
        Pattern {
            name: "adapter",
            category: Category::Structural,
            summary: "fit a third-party API behind the interface clients expect",
            run: structural::adapter::demo,
        },
        Pattern {
            name: "bridge",
            category: Category::Structural,
            summary: "let abstractions and implementations vary independently",
            run: structural::bridge::demo,
        },
        Pattern {
            name: "composite",
            category: Category::Structural,
            summary: "treat single objects and groups of them uniformly",
            run: structural::composite::demo,
        },
        Pattern {
            name: "decorator",
            category: Category::Structural,
            summary: "layer extra behavior around an object at runtime",
            run: structural::decorator::demo,
        },
        Pattern {
            name: "facade",
            category: Category::Structural,
            summary: "offer one simple call over a multi-step subsystem",
            run: structural::facade::demo,
        },
        Pattern {
            name: "flyweight",
            category: Category::Structural,
            summary: "share heavy immutable state between many objects",
            run: structural::flyweight::demo,
        },
        Pattern {
            name: "proxy",
            category: Category::Structural,
            summary: "stand in for an object to add laziness or tracking",
            run: structural::proxy::demo,
        },
    ];
}

pub fn all() -> &'static [Pattern] {
    &CATALOGUE
}

/// Looks a pattern up by name. Dashes and underscores are interchangeable.
pub fn find(name: &str) -> Result<&'static Pattern, CatalogueError> {
    let wanted = name.replace('_', "-").to_ascii_lowercase();
    if let Some(pattern) = CATALOGUE.iter().find(|p| p.name == wanted) {
        return Ok(pattern);
    }
    let suggestion = CATALOGUE
        .iter()
        .map(|p| p.name)
        .find(|candidate| {
            candidate.starts_with(&wanted) || wanted.starts_with(candidate)
        })
        .map(str::to_string);
    Err(CatalogueError::UnknownPattern {
        name: name.to_string(),
        suggestion,
        available: CATALOGUE.iter().map(|p| p.name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_all_seventeen_patterns() {
        assert_eq!(all().len(), 17);
        let behavioral = all()
            .iter()
            .filter(|p| p.category == Category::Behavioral)
            .count();
        assert_eq!(behavioral, 10);
    }

    #[test]
    fn find_accepts_underscores() {
        let pattern = find("template_method").unwrap();
        assert_eq!(pattern.name, "template-method");
    }

    #[test]
    fn find_suggests_close_names() {
        let err = find("chain").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("chain-of-responsibility"), "{message}");
    }

    #[test]
    fn find_rejects_unknown_names() {
        assert!(find("singleton").is_err());
    }

    #[test]
    fn unknown_name_error_lists_the_available_patterns() {
        let message = find("singleton").unwrap_err().to_string();
        assert!(message.contains("available:"), "{message}");
        for pattern in all() {
            assert!(message.contains(pattern.name), "{message}");
        }
    }
}
