//! CSP model definition.

use crate::error::Error;
use std::collections::HashMap;
use std::fmt::Debug;

/// Domain values. Any cloneable, comparable, debuggable type qualifies.
pub trait Value: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Value for T {}

/// A partial mapping from variable name to assigned value, built
/// incrementally during search. Total when every variable has a key.
pub type Assignment<V> = HashMap<String, V>;

/// A hard constraint beyond the binary not-equal kind: a predicate over
/// a candidate assignment `var = value` against the already-assigned
/// variables. Hard constraints prune; a returned assignment never
/// violates one.
///
/// Implemented for any matching closure.
pub trait HardConstraint<V> {
    fn is_satisfied(&self, var: &str, value: &V, assignment: &Assignment<V>) -> bool;
}

impl<V, F: Fn(&str, &V, &Assignment<V>) -> bool> HardConstraint<V> for F {
    fn is_satisfied(&self, var: &str, value: &V, assignment: &Assignment<V>) -> bool {
        self(var, value, assignment)
    }
}

/// A soft constraint: scores a complete assignment with a penalty and a
/// human-readable description of each violation. Soft constraints never
/// prune the search.
///
/// Implemented for any matching closure.
pub trait SoftConstraint<V> {
    fn penalty(&self, assignment: &Assignment<V>) -> (f64, Vec<String>);
}

impl<V, F: Fn(&Assignment<V>) -> (f64, Vec<String>)> SoftConstraint<V> for F {
    fn penalty(&self, assignment: &Assignment<V>) -> (f64, Vec<String>) {
        self(assignment)
    }
}

/// A constraint satisfaction problem.
///
/// Variables keep their insertion order (it is the MRV tie-break order)
/// and domains keep their stored value order (values are tried in it).
///
/// # Examples
///
/// ```
/// use searchlab::csp::CspModel;
///
/// let mut model = CspModel::new();
/// model.add_variable("A", vec!["red", "green"]);
/// model.add_variable("B", vec!["red", "green"]);
/// model.add_not_equal("A", "B");
/// assert!(model.validate().is_ok());
/// ```
pub struct CspModel<V> {
    variables: Vec<String>,
    domains: HashMap<String, Vec<V>>,
    neighbors: HashMap<String, Vec<String>>,
    hard: Vec<Box<dyn HardConstraint<V>>>,
}

impl<V: Value> CspModel<V> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self {
            variables: Vec::new(),
            domains: HashMap::new(),
            neighbors: HashMap::new(),
            hard: Vec::new(),
        }
    }

    /// Adds a variable with its ordered candidate domain.
    pub fn add_variable(&mut self, name: impl Into<String>, domain: Vec<V>) {
        let name = name.into();
        self.variables.push(name.clone());
        self.domains.insert(name, domain);
    }

    /// Adds a symmetric binary not-equal constraint between `a` and `b`:
    /// the two variables may never share a value.
    pub fn add_not_equal(&mut self, a: impl Into<String>, b: impl Into<String>) {
        let (a, b) = (a.into(), b.into());
        self.neighbors.entry(a.clone()).or_default().push(b.clone());
        self.neighbors.entry(b).or_default().push(a);
    }

    /// Adds a hard constraint predicate checked at every tentative
    /// assignment.
    pub fn add_hard_constraint(&mut self, constraint: impl HardConstraint<V> + 'static) {
        self.hard.push(Box::new(constraint));
    }

    /// Variable names in declaration order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The declared domain of `var`, if it exists.
    pub fn domain(&self, var: &str) -> Option<&[V]> {
        self.domains.get(var).map(Vec::as_slice)
    }

    /// All declared domains.
    pub fn domains(&self) -> &HashMap<String, Vec<V>> {
        &self.domains
    }

    /// Variables bound to `var` by a not-equal constraint.
    pub fn neighbors_of(&self, var: &str) -> &[String] {
        self.neighbors.get(var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The hard constraint predicates.
    pub fn hard_constraints(&self) -> &[Box<dyn HardConstraint<V>>] {
        &self.hard
    }

    /// Validates the model: at least one variable, no duplicate
    /// variables, a non-empty domain per variable, and constraints only
    /// between declared variables.
    pub fn validate(&self) -> Result<(), Error> {
        if self.variables.is_empty() {
            return Err(Error::InvalidProblem("model has no variables".into()));
        }
        for (i, var) in self.variables.iter().enumerate() {
            if self.variables[..i].contains(var) {
                return Err(Error::InvalidProblem(format!("duplicate variable: {var}")));
            }
            match self.domains.get(var) {
                None => {
                    return Err(Error::InvalidProblem(format!("variable {var} has no domain")))
                }
                Some(domain) if domain.is_empty() => {
                    return Err(Error::InvalidProblem(format!(
                        "variable {var} has an empty domain"
                    )))
                }
                Some(_) => {}
            }
        }
        for (var, neighbors) in &self.neighbors {
            if !self.variables.contains(var) {
                return Err(Error::InvalidProblem(format!(
                    "constraint references undefined variable: {var}"
                )));
            }
            for neighbor in neighbors {
                if !self.variables.contains(neighbor) {
                    return Err(Error::InvalidProblem(format!(
                        "constraint references undefined variable: {neighbor}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<V: Value> Default for CspModel<V> {
    fn default() -> Self {
        Self::new()
    }
}
