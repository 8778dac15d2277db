//! Graph capability used by the profile
//!
//! The host owns the graph; the profile only needs to add, remove and
//! look up objects by subject and predicate. `oxrdf::Graph` implements
//! the trait directly, which is also what the tests run against.

use oxrdf::{Graph, NamedNode, NamedNodeRef, Subject, Term, Triple};

/// Narrow mutable view on an RDF graph
pub trait ProfileGraph {
    /// Insert a triple, returning whether it was new
    fn add(&mut self, triple: Triple) -> bool;

    /// Remove a triple, returning whether it was present
    fn remove(&mut self, triple: &Triple) -> bool;

    /// All objects of `(subject, predicate, ?)`, detached from the graph
    fn objects(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> Vec<Term>;

    /// Apply a two-phase edit: every removal happens before any insertion
    fn replace(&mut self, replacement: Replacement) -> usize {
        replacement.apply(self)
    }
}

impl ProfileGraph for Graph {
    fn add(&mut self, triple: Triple) -> bool {
        self.insert(&triple)
    }

    fn remove(&mut self, triple: &Triple) -> bool {
        Graph::remove(self, triple)
    }

    fn objects(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        self.objects_for_subject_predicate(subject, predicate)
            .map(|term| term.into_owned())
            .collect()
    }
}

impl<G: ProfileGraph + ?Sized> ProfileGraph for &mut G {
    fn add(&mut self, triple: Triple) -> bool {
        (**self).add(triple)
    }

    fn remove(&mut self, triple: &Triple) -> bool {
        (**self).remove(triple)
    }

    fn objects(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        (**self).objects(subject, predicate)
    }
}

/// Remove-then-insert edit on a graph
///
/// Baseline profiles often already carry a literal form of a value the
/// DCAT-AP.de profile wants as an IRI (or in a corrected spelling).
/// Collecting both halves first and applying removals before insertions
/// keeps the result free of duplicates even when a removed triple is
/// re-inserted unchanged.
#[derive(Debug, Clone, Default)]
pub struct Replacement {
    removals: Vec<Triple>,
    insertions: Vec<Triple>,
}

impl Replacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(mut self, triple: Triple) -> Self {
        self.removals.push(triple);
        self
    }

    pub fn insert(mut self, triple: Triple) -> Self {
        self.insertions.push(triple);
        self
    }

    /// Apply to a graph, returning the number of triples inserted
    pub fn apply<G: ProfileGraph + ?Sized>(self, graph: &mut G) -> usize {
        for triple in &self.removals {
            graph.remove(triple);
        }
        self.insertions
            .into_iter()
            .filter(|triple| graph.add(triple.clone()))
            .count()
    }
}

/// Treat an object term as a node that can carry further triples
///
/// Literals (and quoted triples) are not traversable and yield `None`.
pub fn node_of(term: &Term) -> Option<Subject> {
    match term {
        Term::NamedNode(node) => Some(node.clone().into()),
        Term::BlankNode(node) => Some(node.clone().into()),
        _ => None,
    }
}

/// Build an IRI from data, skipping values that are not valid IRIs
pub fn iri(value: &str) -> Option<NamedNode> {
    match NamedNode::new(value) {
        Ok(node) => Some(node),
        Err(e) => {
            tracing::warn!("Skipping invalid IRI '{}': {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, Literal};

    fn subject() -> Subject {
        NamedNode::new_unchecked("http://example.org/dataset/1").into()
    }

    fn title() -> NamedNode {
        NamedNode::new_unchecked("http://purl.org/dc/terms/title")
    }

    #[test]
    fn test_objects_for_subject_predicate() {
        let mut graph = Graph::new();
        graph.add(Triple::new(subject(), title(), Literal::new_simple_literal("a")));
        graph.add(Triple::new(subject(), title(), Literal::new_simple_literal("b")));

        let objects = graph.objects(&subject(), title().as_ref());
        assert_eq!(objects.len(), 2);
        assert!(objects.contains(&Literal::new_simple_literal("a").into()));
    }

    #[test]
    fn test_replace_removes_before_inserting() {
        let mut graph = Graph::new();
        let triple = Triple::new(subject(), title(), Literal::new_simple_literal("a"));
        graph.add(triple.clone());

        // Re-inserting the removed triple must leave it in place
        let edit = Replacement::new()
            .remove(triple.clone())
            .insert(triple.clone());
        let inserted = graph.replace(edit);
        assert_eq!(inserted, 1);
        assert!(graph.contains(&triple));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_replace_literal_with_iri() {
        let mut graph = Graph::new();
        let literal = Triple::new(subject(), title(), Literal::new_simple_literal("de"));
        let uri = Triple::new(
            subject(),
            title(),
            NamedNode::new_unchecked("http://publications.europa.eu/resource/authority/language/DEU"),
        );
        graph.add(literal.clone());

        graph.replace(Replacement::new().remove(literal.clone()).insert(uri.clone()));
        assert!(!graph.contains(&literal));
        assert!(graph.contains(&uri));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn add_title<G: ProfileGraph>(mut graph: G) {
            graph.add(Triple::new(subject(), title(), Literal::new_simple_literal("a")));
        }

        let mut graph = Graph::new();
        add_title(&mut graph);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_node_of() {
        assert!(node_of(&Term::from(BlankNode::default())).is_some());
        assert!(node_of(&Term::from(NamedNode::new_unchecked("http://example.org/"))).is_some());
        assert!(node_of(&Term::from(Literal::new_simple_literal("x"))).is_none());
    }

    #[test]
    fn test_iri_rejects_invalid() {
        assert!(iri("mailto:someone@example.org").is_some());
        assert!(iri("not an iri").is_none());
    }
}
