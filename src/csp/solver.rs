//! Backtracking search over a [`CspModel`].
//!
//! Variable selection uses the MRV heuristic (fewest remaining values,
//! first declared wins ties). Each assignment is forward-checked: the
//! value is removed from the live domains of unassigned not-equal
//! neighbors, and every removal is recorded on an undo trail so
//! backtracking restores domains exactly, without copying them per
//! search level.

use super::model::{Assignment, CspModel, SoftConstraint, Value};
use crate::error::Error;
use std::collections::HashMap;

/// Outcome of [`CspSolver::solve`].
///
/// `Unsatisfiable` means the search space was exhausted, not that the
/// solver gave up.
#[derive(Debug, Clone, PartialEq)]
pub enum CspOutcome<V> {
    /// A complete assignment satisfying every hard constraint.
    Satisfiable(Assignment<V>),
    /// No complete consistent assignment exists.
    Unsatisfiable,
}

impl<V> CspOutcome<V> {
    /// The assignment, if one was found.
    pub fn assignment(&self) -> Option<&Assignment<V>> {
        match self {
            CspOutcome::Satisfiable(assignment) => Some(assignment),
            CspOutcome::Unsatisfiable => None,
        }
    }
}

/// The lowest-penalty complete assignment found by
/// [`CspSolver::solve_best`].
#[derive(Debug, Clone)]
pub struct BestSolution<V> {
    /// The assignment. Satisfies every hard constraint.
    pub assignment: Assignment<V>,

    /// Total soft-constraint penalty. Zero means no soft constraint is
    /// violated.
    pub penalty: f64,

    /// One description per soft-constraint violation.
    pub violations: Vec<String>,
}

/// Outcome of [`CspSolver::solve_best`].
#[derive(Debug, Clone)]
pub enum BestOutcome<V> {
    /// The best complete assignment over the whole search space.
    Best(BestSolution<V>),
    /// The hard constraints alone are unsatisfiable.
    Unsatisfiable,
}

/// A read-only view of the search state, passed to observers once per
/// solver step.
#[derive(Debug)]
pub struct CspSnapshot<'a, V> {
    /// The current partial assignment.
    pub assignment: &'a Assignment<V>,

    /// The live (forward-checked) domains.
    pub domains: &'a HashMap<String, Vec<V>>,

    /// What the solver just did, e.g. `trying NT = "Green"`.
    pub status: &'a str,
}

/// Receives a snapshot at every assignment, backtrack, and completed
/// solution. Implemented for any `FnMut(CspSnapshot)` closure.
pub trait CspObserver<V> {
    fn on_step(&mut self, snapshot: CspSnapshot<'_, V>);
}

impl<V, F: FnMut(CspSnapshot<'_, V>)> CspObserver<V> for F {
    fn on_step(&mut self, snapshot: CspSnapshot<'_, V>) {
        self(snapshot);
    }
}

/// Entry point for CSP search.
///
/// # Usage
///
/// ```
/// use searchlab::csp::{CspModel, CspOutcome, CspSolver};
///
/// let mut model = CspModel::new();
/// model.add_variable("A", vec!["red", "green"]);
/// model.add_variable("B", vec!["red", "green"]);
/// model.add_not_equal("A", "B");
///
/// let outcome = CspSolver::solve(&model).unwrap();
/// let assignment = outcome.assignment().unwrap();
/// assert_ne!(assignment["A"], assignment["B"]);
/// ```
pub struct CspSolver;

impl CspSolver {
    /// Finds the first complete assignment satisfying every hard
    /// constraint, or proves there is none.
    pub fn solve<V: Value>(model: &CspModel<V>) -> Result<CspOutcome<V>, Error> {
        Self::solve_with_observer(model, &mut |_: CspSnapshot<'_, V>| {})
    }

    /// [`solve`](Self::solve) with an observer called at every step.
    pub fn solve_with_observer<V: Value, O: CspObserver<V>>(
        model: &CspModel<V>,
        observer: &mut O,
    ) -> Result<CspOutcome<V>, Error> {
        model.validate()?;
        let mut domains = model.domains().clone();
        let mut assignment = Assignment::new();
        match backtrack(model, &mut assignment, &mut domains, observer) {
            Some(solution) => Ok(CspOutcome::Satisfiable(solution)),
            None => Ok(CspOutcome::Unsatisfiable),
        }
    }

    /// Explores the whole search space of hard-consistent complete
    /// assignments and returns the one with the lowest total
    /// soft-constraint penalty. Stops early if a zero-penalty
    /// assignment is found.
    pub fn solve_best<V: Value>(
        model: &CspModel<V>,
        soft: &[Box<dyn SoftConstraint<V>>],
    ) -> Result<BestOutcome<V>, Error> {
        Self::solve_best_with_observer(model, soft, &mut |_: CspSnapshot<'_, V>| {})
    }

    /// [`solve_best`](Self::solve_best) with an observer called at
    /// every step.
    pub fn solve_best_with_observer<V: Value, O: CspObserver<V>>(
        model: &CspModel<V>,
        soft: &[Box<dyn SoftConstraint<V>>],
        observer: &mut O,
    ) -> Result<BestOutcome<V>, Error> {
        model.validate()?;
        let mut domains = model.domains().clone();
        let mut assignment = Assignment::new();
        let mut tracker = BestTracker { best: None };
        backtrack_best(model, &mut assignment, &mut domains, soft, &mut tracker, observer);
        match tracker.best {
            Some(best) => Ok(BestOutcome::Best(best)),
            None => Ok(BestOutcome::Unsatisfiable),
        }
    }
}

/// Tracks the lowest-penalty complete assignment seen so far. A strictly
/// lower penalty replaces the incumbent; ties keep the first one found.
struct BestTracker<V> {
    best: Option<BestSolution<V>>,
}

impl<V: Value> BestTracker<V> {
    fn consider(&mut self, assignment: &Assignment<V>, penalty: f64, violations: Vec<String>) {
        let improves = match &self.best {
            Some(best) => penalty < best.penalty,
            None => true,
        };
        if improves {
            self.best = Some(BestSolution {
                assignment: assignment.clone(),
                penalty,
                violations,
            });
        }
    }

    fn is_optimal(&self) -> bool {
        self.best.as_ref().is_some_and(|best| best.penalty == 0.0)
    }
}

/// Picks the unassigned variable with the fewest remaining values.
/// Declaration order breaks ties. Returns `None` when the assignment is
/// complete.
fn select_mrv<V: Value>(
    model: &CspModel<V>,
    assignment: &Assignment<V>,
    domains: &HashMap<String, Vec<V>>,
) -> Option<String> {
    model
        .variables()
        .iter()
        .filter(|var| !assignment.contains_key(*var))
        .min_by_key(|var| domains.get(*var).map(Vec::len).unwrap_or(0))
        .cloned()
}

/// Whether assigning `var = value` is consistent with the assigned
/// variables: no assigned not-equal neighbor holds `value`, and every
/// hard constraint predicate accepts it.
fn is_consistent<V: Value>(
    model: &CspModel<V>,
    var: &str,
    value: &V,
    assignment: &Assignment<V>,
) -> bool {
    for neighbor in model.neighbors_of(var) {
        if assignment.get(neighbor) == Some(value) {
            return false;
        }
    }
    model
        .hard_constraints()
        .iter()
        .all(|hard| hard.is_satisfied(var, value, assignment))
}

/// One domain removal, recorded so it can be undone in place.
type TrailEntry<V> = (String, usize, V);

/// Removes `value` from the live domain of every unassigned not-equal
/// neighbor of `var`, recording removals on `trail`. Returns `false` on
/// a wipeout (some neighbor's domain became empty).
fn forward_check<V: Value>(
    model: &CspModel<V>,
    var: &str,
    value: &V,
    assignment: &Assignment<V>,
    domains: &mut HashMap<String, Vec<V>>,
    trail: &mut Vec<TrailEntry<V>>,
) -> bool {
    for neighbor in model.neighbors_of(var) {
        if assignment.contains_key(neighbor) {
            continue;
        }
        if let Some(domain) = domains.get_mut(neighbor) {
            if let Some(pos) = domain.iter().position(|v| v == value) {
                let removed = domain.remove(pos);
                trail.push((neighbor.clone(), pos, removed));
                if domain.is_empty() {
                    return false;
                }
            }
        }
    }
    true
}

/// Reverts every removal on `trail`, restoring each value at its
/// original position so domain order is exactly as before.
fn undo<V: Value>(domains: &mut HashMap<String, Vec<V>>, trail: &mut Vec<TrailEntry<V>>) {
    while let Some((var, pos, value)) = trail.pop() {
        if let Some(domain) = domains.get_mut(&var) {
            domain.insert(pos, value);
        }
    }
}

fn backtrack<V: Value, O: CspObserver<V>>(
    model: &CspModel<V>,
    assignment: &mut Assignment<V>,
    domains: &mut HashMap<String, Vec<V>>,
    observer: &mut O,
) -> Option<Assignment<V>> {
    let var = match select_mrv(model, assignment, domains) {
        Some(var) => var,
        None => return Some(assignment.clone()),
    };

    let candidates = domains.get(&var).cloned().unwrap_or_default();
    for value in candidates {
        if !is_consistent(model, &var, &value, assignment) {
            continue;
        }

        assignment.insert(var.clone(), value.clone());
        let status = format!("trying {var} = {value:?}");
        observer.on_step(CspSnapshot {
            assignment,
            domains,
            status: &status,
        });

        let mut trail = Vec::new();
        if forward_check(model, &var, &value, assignment, domains, &mut trail) {
            if let Some(solution) = backtrack(model, assignment, domains, observer) {
                return Some(solution);
            }
        }

        undo(domains, &mut trail);
        assignment.remove(&var);
        let status = format!("backtracking on {var} = {value:?}");
        observer.on_step(CspSnapshot {
            assignment,
            domains,
            status: &status,
        });
    }

    None
}

fn backtrack_best<V: Value, O: CspObserver<V>>(
    model: &CspModel<V>,
    assignment: &mut Assignment<V>,
    domains: &mut HashMap<String, Vec<V>>,
    soft: &[Box<dyn SoftConstraint<V>>],
    tracker: &mut BestTracker<V>,
    observer: &mut O,
) {
    if tracker.is_optimal() {
        return;
    }

    let var = match select_mrv(model, assignment, domains) {
        Some(var) => var,
        None => {
            let (penalty, violations) = score(soft, assignment);
            let status = format!("complete assignment with penalty {penalty}");
            observer.on_step(CspSnapshot {
                assignment,
                domains,
                status: &status,
            });
            tracker.consider(assignment, penalty, violations);
            return;
        }
    };

    let candidates = domains.get(&var).cloned().unwrap_or_default();
    for value in candidates {
        if tracker.is_optimal() {
            return;
        }
        if !is_consistent(model, &var, &value, assignment) {
            continue;
        }

        assignment.insert(var.clone(), value.clone());
        let status = format!("trying {var} = {value:?}");
        observer.on_step(CspSnapshot {
            assignment,
            domains,
            status: &status,
        });

        let mut trail = Vec::new();
        if forward_check(model, &var, &value, assignment, domains, &mut trail) {
            backtrack_best(model, assignment, domains, soft, tracker, observer);
        }

        undo(domains, &mut trail);
        assignment.remove(&var);
    }
}

/// Total penalty and violation descriptions of a complete assignment.
fn score<V: Value>(
    soft: &[Box<dyn SoftConstraint<V>>],
    assignment: &Assignment<V>,
) -> (f64, Vec<String>) {
    let mut total = 0.0;
    let mut violations = Vec::new();
    for constraint in soft {
        let (penalty, mut descriptions) = constraint.penalty(assignment);
        total += penalty;
        violations.append(&mut descriptions);
    }
    (total, violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic map-coloring instance: Australian states and
    /// territories, adjacent regions must differ.
    fn australia(colors: Vec<&'static str>) -> CspModel<&'static str> {
        let mut model = CspModel::new();
        for region in ["WA", "NT", "SA", "Q", "NSW", "V", "T"] {
            model.add_variable(region, colors.clone());
        }
        for (a, b) in [
            ("WA", "NT"),
            ("WA", "SA"),
            ("NT", "SA"),
            ("NT", "Q"),
            ("SA", "Q"),
            ("SA", "NSW"),
            ("SA", "V"),
            ("Q", "NSW"),
            ("NSW", "V"),
        ] {
            model.add_not_equal(a, b);
        }
        model
    }

    fn assert_hard_consistent<V: Value>(model: &CspModel<V>, assignment: &Assignment<V>) {
        for var in model.variables() {
            assert!(assignment.contains_key(var), "{var} unassigned");
            for neighbor in model.neighbors_of(var) {
                assert_ne!(
                    assignment[var], assignment[neighbor],
                    "{var} and {neighbor} share a value"
                );
            }
        }
    }

    #[test]
    fn test_australia_three_colors_is_satisfiable() {
        let model = australia(vec!["Red", "Green", "Blue"]);
        let outcome = CspSolver::solve(&model).unwrap();
        let assignment = outcome.assignment().expect("3 colors suffice");
        assert_hard_consistent(&model, assignment);
    }

    #[test]
    fn test_australia_two_colors_is_unsatisfiable() {
        // SA, NT and WA form a triangle.
        let model = australia(vec!["Red", "Green"]);
        let outcome = CspSolver::solve(&model).unwrap();
        assert_eq!(outcome, CspOutcome::Unsatisfiable);
    }

    #[test]
    fn test_model_domains_untouched_by_solve() {
        let model = australia(vec!["Red", "Green", "Blue"]);
        CspSolver::solve(&model).unwrap();
        for region in model.variables() {
            assert_eq!(model.domain(region), Some(&["Red", "Green", "Blue"][..]));
        }
    }

    #[test]
    fn test_mrv_picks_smallest_domain_first() {
        let mut model = CspModel::new();
        model.add_variable("A", vec![1, 2, 3]);
        model.add_variable("B", vec![7]);
        model.add_variable("C", vec![1, 2, 3]);

        let mut statuses = Vec::new();
        let outcome = CspSolver::solve_with_observer(&model, &mut |s: CspSnapshot<'_, i32>| {
            statuses.push(s.status.to_string());
        })
        .unwrap();

        assert!(outcome.assignment().is_some());
        assert_eq!(statuses[0], "trying B = 7");
    }

    #[test]
    fn test_forward_checking_steers_around_conflict() {
        // A is forced to "red"; forward checking must leave B only "green".
        let mut model = CspModel::new();
        model.add_variable("A", vec!["red"]);
        model.add_variable("B", vec!["red", "green"]);
        model.add_not_equal("A", "B");

        let outcome = CspSolver::solve(&model).unwrap();
        let assignment = outcome.assignment().unwrap();
        assert_eq!(assignment["A"], "red");
        assert_eq!(assignment["B"], "green");
    }

    #[test]
    fn test_backtracking_restores_domains() {
        // X = 1 dead-ends (it prunes Z to {2}, but Z must be 1), so the
        // solver backtracks. Y and Z must have their full domains back
        // for the X = 2 branch, or the solution is missed.
        let mut model = CspModel::new();
        model.add_variable("X", vec![1, 2]);
        model.add_variable("Y", vec![1, 2]);
        model.add_variable("Z", vec![1, 2]);
        model.add_not_equal("X", "Y");
        model.add_not_equal("X", "Z");
        model.add_hard_constraint(|var: &str, value: &i32, _: &Assignment<i32>| {
            var != "Z" || *value == 1
        });

        let outcome = CspSolver::solve(&model).unwrap();
        let assignment = outcome.assignment().expect("X=2, Y=1, Z=1 satisfies");
        assert_eq!(assignment["X"], 2);
        assert_eq!(assignment["Z"], 1);
        assert_hard_consistent(&model, assignment);
    }

    #[test]
    fn test_hard_constraint_predicate_prunes() {
        let mut model = CspModel::new();
        model.add_variable("X", vec![1, 2, 3]);
        model.add_hard_constraint(|_: &str, value: &i32, _: &Assignment<i32>| value % 2 == 0);

        let outcome = CspSolver::solve(&model).unwrap();
        assert_eq!(outcome.assignment().unwrap()["X"], 2);
    }

    #[test]
    fn test_single_variable_takes_first_value() {
        let mut model = CspModel::new();
        model.add_variable("A", vec!["x", "y"]);
        let outcome = CspSolver::solve(&model).unwrap();
        assert_eq!(outcome.assignment().unwrap()["A"], "x");
    }

    #[test]
    fn test_invalid_model_is_rejected() {
        let model: CspModel<i32> = CspModel::new();
        assert!(CspSolver::solve(&model).is_err());
    }

    // ---- solve_best ----

    #[test]
    fn test_solve_best_minimizes_penalty() {
        // A and B must differ over {"m", "a"}, so exactly one is "a";
        // the minimum total penalty is therefore 1.
        let mut model = CspModel::new();
        model.add_variable("A", vec!["m", "a"]);
        model.add_variable("B", vec!["m", "a"]);
        model.add_not_equal("A", "B");

        let soft: Vec<Box<dyn SoftConstraint<&str>>> = vec![Box::new(
            |assignment: &Assignment<&str>| {
                let mut penalty = 0.0;
                let mut violations = Vec::new();
                for (var, value) in assignment {
                    if *value == "a" {
                        penalty += 1.0;
                        violations.push(format!("{var} is in the afternoon"));
                    }
                }
                (penalty, violations)
            },
        )];

        match CspSolver::solve_best(&model, &soft).unwrap() {
            BestOutcome::Best(best) => {
                assert_eq!(best.penalty, 1.0);
                assert_eq!(best.violations.len(), 1);
                assert_hard_consistent(&model, &best.assignment);
            }
            BestOutcome::Unsatisfiable => panic!("two values for two variables suffice"),
        }
    }

    #[test]
    fn test_solve_best_reports_zero_penalty_when_achievable() {
        let mut model = CspModel::new();
        model.add_variable("A", vec!["m", "a"]);
        model.add_variable("B", vec!["m", "a"]);

        let soft: Vec<Box<dyn SoftConstraint<&str>>> =
            vec![Box::new(|assignment: &Assignment<&str>| {
                let late = assignment.values().filter(|v| **v == "a").count();
                (late as f64, vec!["late".into(); late])
            })];

        match CspSolver::solve_best(&model, &soft).unwrap() {
            BestOutcome::Best(best) => {
                assert_eq!(best.penalty, 0.0);
                assert!(best.violations.is_empty());
                assert!(best.assignment.values().all(|v| *v == "m"));
            }
            BestOutcome::Unsatisfiable => panic!("unconstrained model"),
        }
    }

    #[test]
    fn test_solve_best_unsatisfiable_hard_constraints() {
        let mut model = CspModel::new();
        model.add_variable("A", vec![1]);
        model.add_variable("B", vec![1]);
        model.add_not_equal("A", "B");

        let soft: Vec<Box<dyn SoftConstraint<i32>>> = Vec::new();
        match CspSolver::solve_best(&model, &soft).unwrap() {
            BestOutcome::Unsatisfiable => {}
            BestOutcome::Best(best) => panic!("expected unsatisfiable, got {best:?}"),
        }
    }

    #[test]
    fn test_course_scheduling() {
        // Four courses, six weekly slots. No two courses share a slot,
        // Algorithms can never run at 14:00 (hard). Softly: avoid 14:00
        // slots and keep AI and Databases on different days.
        let slots = vec![
            "Mon-08", "Mon-10", "Mon-14", "Tue-08", "Tue-10", "Tue-14",
        ];
        let courses = ["AI", "Databases", "Networks", "Algorithms"];

        let mut model = CspModel::new();
        for course in courses {
            model.add_variable(course, slots.clone());
        }
        for (i, a) in courses.iter().enumerate() {
            for b in &courses[i + 1..] {
                model.add_not_equal(*a, *b);
            }
        }
        model.add_hard_constraint(|var: &str, value: &&str, _: &Assignment<&str>| {
            var != "Algorithms" || !value.ends_with("14")
        });

        let day = |slot: &str| slot.split('-').next().unwrap_or(slot).to_string();
        let soft: Vec<Box<dyn SoftConstraint<&str>>> = vec![
            Box::new(|assignment: &Assignment<&str>| {
                let mut penalty = 0.0;
                let mut violations = Vec::new();
                for (course, slot) in assignment {
                    if slot.ends_with("14") {
                        penalty += 1.0;
                        violations.push(format!("{course} is scheduled late"));
                    }
                }
                (penalty, violations)
            }),
            Box::new(move |assignment: &Assignment<&str>| {
                match (assignment.get("AI"), assignment.get("Databases")) {
                    (Some(ai), Some(db)) if day(ai) == day(db) => {
                        (2.0, vec!["AI and Databases share a day".into()])
                    }
                    _ => (0.0, Vec::new()),
                }
            }),
        ];

        match CspSolver::solve_best(&model, &soft).unwrap() {
            BestOutcome::Best(best) => {
                // Four morning slots exist across two days, so a
                // zero-penalty timetable is reachable.
                assert_eq!(best.penalty, 0.0, "violations: {:?}", best.violations);
                assert_hard_consistent(&model, &best.assignment);
                assert!(!best.assignment["Algorithms"].ends_with("14"));
            }
            BestOutcome::Unsatisfiable => panic!("six slots for four courses"),
        }
    }
}
