//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Named program points.
//!
//! A program declares a tree of modules and then announces events and
//! flow decisions by `module::name`.  Each announcement is resolved to a
//! fully qualified name (`::parent::module::name`) and written as one
//! `log` record on the [`TRACE_TARGET`](crate::TRACE_TARGET) target, so an
//! external viewer can line program output up with the points that
//! produced it.

use std::collections::HashMap;
use std::fmt;

use crate::TRACE_TARGET;

const SEP: &str = "::";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EventError {
    #[error("{0} is not a valid event name, expected module::name (the module may be empty)")]
    MissingModule(String),
    #[error("unknown module {0}")]
    UnknownModule(String),
    #[error("duplicate module {0}")]
    DuplicateModule(String),
    #[error("module {0} is its own ancestor")]
    ModuleCycle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Event,
    Flow,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::Event => f.write_str("event"),
            PointKind::Flow => f.write_str("flow"),
        }
    }
}

/// Module tree keyed by module name.  The root module has the empty name.
#[derive(Debug)]
pub struct Registry {
    parents: HashMap<String, Option<String>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Registry {
        let mut parents = HashMap::new();
        parents.insert(String::new(), None);
        Registry { parents }
    }

    /// Register `name` under `parent`, or under the root when no parent
    /// is given.  The parent does not have to be registered yet.
    pub fn module(mut self, name: &str, parent: Option<&str>) -> Result<Registry, EventError> {
        if self.parents.contains_key(name) {
            return Err(EventError::DuplicateModule(name.to_string()));
        }
        let parent = parent.unwrap_or("").to_string();
        self.parents.insert(name.to_string(), Some(parent));
        Ok(self)
    }

    pub fn fqn(&self, name: &str) -> Result<String, EventError> {
        let (module, _) = name
            .split_once(SEP)
            .ok_or_else(|| EventError::MissingModule(name.to_string()))?;

        let mut resolved = name.to_string();
        let mut current = module;
        let mut hops = 0;
        loop {
            let parent = self
                .parents
                .get(current)
                .ok_or_else(|| EventError::UnknownModule(current.to_string()))?;
            let Some(parent) = parent else {
                break;
            };

            hops += 1;
            if hops > self.parents.len() {
                return Err(EventError::ModuleCycle(module.to_string()));
            }

            resolved.insert_str(0, SEP);
            resolved.insert_str(0, parent);
            current = parent.as_str();
        }

        Ok(resolved)
    }

    pub fn event(&self, name: &str) {
        self.announce(PointKind::Event, name);
    }

    pub fn flow(&self, name: &str) {
        self.announce(PointKind::Flow, name);
    }

    fn announce(&self, kind: PointKind, name: &str) {
        match self.fqn(name) {
            Ok(fqn) => log::info!(target: TRACE_TARGET, "{kind} {fqn}"),
            Err(e) => {
                log::warn!(target: TRACE_TARGET, "{e}");
                log::info!(target: TRACE_TARGET, "{kind} {name}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn animals() -> Registry {
        Registry::new()
            .module("animal", None)
            .unwrap()
            .module("dog", Some("animal"))
            .unwrap()
    }

    #[test]
    fn root_events() {
        let reg = Registry::new();
        assert_eq!(reg.fqn("::entry").unwrap(), "::entry");
        assert_eq!(
            reg.fqn("::Start the program").unwrap(),
            "::Start the program"
        );
    }

    #[test]
    fn nested_modules() {
        let reg = animals();
        assert_eq!(reg.fqn("animal::bark").unwrap(), "::animal::bark");
        assert_eq!(reg.fqn("dog::bark").unwrap(), "::animal::dog::bark");
    }

    #[test]
    fn parent_registered_later() {
        let reg = Registry::new()
            .module("add", Some("util"))
            .unwrap()
            .module("util", None)
            .unwrap();
        assert_eq!(reg.fqn("add::entry").unwrap(), "::util::add::entry");
    }

    #[test]
    fn bad_names() {
        let reg = animals();
        assert_eq!(
            reg.fqn("bark"),
            Err(EventError::MissingModule("bark".to_string()))
        );
        assert_eq!(
            reg.fqn("cat::meow"),
            Err(EventError::UnknownModule("cat".to_string()))
        );
    }

    #[test]
    fn missing_parent() {
        let reg = Registry::new().module("add", Some("util")).unwrap();
        assert_eq!(
            reg.fqn("add::entry"),
            Err(EventError::UnknownModule("util".to_string()))
        );
    }

    #[test]
    fn duplicate_module() {
        let err = animals().module("dog", None).unwrap_err();
        assert_eq!(err, EventError::DuplicateModule("dog".to_string()));
    }

    #[test]
    fn cycle() {
        let reg = Registry::new()
            .module("a", Some("b"))
            .unwrap()
            .module("b", Some("a"))
            .unwrap();
        assert_eq!(
            reg.fqn("a::x"),
            Err(EventError::ModuleCycle("a".to_string()))
        );
    }

    #[test]
    fn announce_never_fails() {
        let reg = animals();
        reg.event("dog::bark");
        reg.flow("::is it raining?");
        reg.event("nowhere::lost");
        reg.event("no separator");
    }

    #[test]
    fn kind_names() {
        assert_eq!(PointKind::Event.to_string(), "event");
        assert_eq!(PointKind::Flow.to_string(), "flow");
    }
}
