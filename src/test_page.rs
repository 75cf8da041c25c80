//! In-memory stand-in for the page, used by unit tests to replay actions.

use std::collections::{HashMap, HashSet};

use crate::action::{Action, Defer, Target};

#[derive(Debug, Default)]
pub(crate) struct FakePage {
    pub attrs: HashMap<(Target, &'static str), String>,
    pub classes: HashSet<(Target, &'static str)>,
    pub checked: HashMap<Target, bool>,
    pub src: HashMap<Target, String>,
    pub text: HashMap<Target, String>,
    pub styles: HashMap<(Target, &'static str), String>,
    pub focused: Vec<(Target, Defer)>,
    pub layout_syncs: Vec<Defer>,
    pub unobserved: Vec<Target>,
    pub default_prevented: bool,
    /// Number of actions applied so far.
    pub writes: usize,
}

impl FakePage {
    pub fn apply(&mut self, actions: &[Action]) {
        for action in actions {
            self.writes += 1;
            match action {
                Action::SetAttribute { target, name, value } => {
                    self.attrs.insert((*target, *name), value.clone());
                }
                Action::RemoveAttribute { target, name } => {
                    self.attrs.remove(&(*target, *name));
                }
                Action::AddClass { target, class } => {
                    self.classes.insert((*target, *class));
                }
                Action::RemoveClass { target, class } => {
                    self.classes.remove(&(*target, *class));
                }
                Action::SetChecked { target, checked } => {
                    self.checked.insert(*target, *checked);
                }
                Action::SetSrc { target, src } => {
                    self.src.insert(*target, src.clone());
                }
                Action::SetText { target, text } => {
                    self.text.insert(*target, text.clone());
                }
                Action::SetStyle { target, property, value } => {
                    self.styles.insert((*target, *property), value.clone());
                }
                Action::Focus { target, defer } => self.focused.push((*target, *defer)),
                Action::PreventDefault => self.default_prevented = true,
                Action::SyncLayout(defer) => self.layout_syncs.push(*defer),
                Action::Unobserve(target) => self.unobserved.push(*target),
            }
        }
    }

    pub fn attr(&self, target: Target, name: &'static str) -> Option<&str> {
        self.attrs.get(&(target, name)).map(String::as_str)
    }

    pub fn has_class(&self, target: Target, class: &'static str) -> bool {
        self.classes.contains(&(target, class))
    }

    pub fn style(&self, target: Target, property: &'static str) -> Option<&str> {
        self.styles.get(&(target, property)).map(String::as_str)
    }

    pub fn text_of(&self, target: Target) -> Option<&str> {
        self.text.get(&target).map(String::as_str)
    }
}
