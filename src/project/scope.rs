//! Variable lookup with local-over-global precedence.

use super::types::{Flow, Project, Variable};

/// A resolved view over the variables visible from one flow. Resolution
/// checks flow-local variables first; a global with the same name is
/// shadowed.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    locals: &'a [Variable],
    globals: &'a [Variable],
}

impl<'a> Scope<'a> {
    pub fn new(locals: &'a [Variable], globals: &'a [Variable]) -> Self {
        Scope { locals, globals }
    }

    pub fn global_only(globals: &'a [Variable]) -> Self {
        Scope {
            locals: &[],
            globals,
        }
    }

    pub fn for_flow(flow: &'a Flow, project: &'a Project) -> Self {
        Scope {
            locals: &flow.local_variables,
            globals: &project.global_variables,
        }
    }

    pub fn resolve(&self, name: &str) -> Option<&'a Variable> {
        self.locals
            .iter()
            .find(|v| v.name == name)
            .or_else(|| self.globals.iter().find(|v| v.name == name))
    }

    /// All visible variables, locals first. Shadowed globals are still
    /// yielded; callers that only test name membership are unaffected.
    pub fn variables(&self) -> impl Iterator<Item = &'a Variable> {
        self.locals.iter().chain(self.globals.iter())
    }
}
