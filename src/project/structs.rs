//! petgraph-based type graph over struct definitions.
//!
//! Struct fields may name other structs and nothing guarantees the result
//! is acyclic, so member access resolves one level deep only and cycles
//! are detected explicitly rather than assumed away.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::StructDefinition;

pub struct StructGraph<'a> {
    graph: DiGraph<&'a str, ()>,
    indices: HashMap<&'a str, NodeIndex>,
    defs: HashMap<&'a str, &'a StructDefinition>,
}

impl<'a> StructGraph<'a> {
    pub fn build(structs: &'a [StructDefinition]) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();
        let mut defs = HashMap::new();

        for def in structs {
            let idx = graph.add_node(def.name.as_str());
            indices.insert(def.name.as_str(), idx);
            defs.insert(def.name.as_str(), def);
        }

        for def in structs {
            let from = indices[def.name.as_str()];
            for field in &def.fields {
                if let Some(&to) = indices.get(field.declared_type.as_str()) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        StructGraph {
            graph,
            indices,
            defs,
        }
    }

    pub fn is_struct(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Structs that sit on at least one cycle, in definition order.
    pub fn cyclic_structs(&self) -> Vec<&'a str> {
        use petgraph::algo::tarjan_scc;

        let mut names: Vec<&'a str> = Vec::new();
        for component in tarjan_scc(&self.graph) {
            let self_loop = component.len() == 1
                && self.graph.find_edge(component[0], component[0]).is_some();
            if component.len() > 1 || self_loop {
                names.extend(component.iter().map(|&idx| self.graph[idx]));
            }
        }
        names.sort_unstable();
        names
    }

    /// One-level member lookup: the declared type of `field_name` on
    /// `struct_name`, if both exist.
    pub fn field_type(&self, struct_name: &str, field_name: &str) -> Option<&'a str> {
        let def = self.defs.get(struct_name)?;
        def.fields
            .iter()
            .find(|f| f.name == field_name)
            .map(|f| f.declared_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::types::StructField;

    fn def(name: &str, fields: &[(&str, &str)]) -> StructDefinition {
        StructDefinition {
            name: name.into(),
            fields: fields
                .iter()
                .map(|(fname, ftype)| StructField {
                    name: (*fname).into(),
                    declared_type: (*ftype).into(),
                    is_array: false,
                })
                .collect(),
        }
    }

    #[test]
    fn acyclic_graph_resolves_members() {
        let structs = vec![
            def("Order", &[("total", "number"), ("customer", "Customer")]),
            def("Customer", &[("name", "string")]),
        ];
        let graph = StructGraph::build(&structs);

        assert!(!graph.has_cycle());
        assert!(graph.is_struct("Order"));
        assert!(!graph.is_struct("Invoice"));
        assert_eq!(graph.field_type("Order", "customer"), Some("Customer"));
        assert_eq!(graph.field_type("Customer", "name"), Some("string"));
        assert_eq!(graph.field_type("Customer", "missing"), None);
    }

    #[test]
    fn mutual_reference_is_a_cycle() {
        let structs = vec![
            def("A", &[("b", "B")]),
            def("B", &[("a", "A")]),
            def("C", &[("tag", "string")]),
        ];
        let graph = StructGraph::build(&structs);

        assert!(graph.has_cycle());
        assert_eq!(graph.cyclic_structs(), vec!["A", "B"]);
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let structs = vec![def("Tree", &[("child", "Tree")])];
        let graph = StructGraph::build(&structs);

        assert!(graph.has_cycle());
        assert_eq!(graph.cyclic_structs(), vec!["Tree"]);
    }
}
