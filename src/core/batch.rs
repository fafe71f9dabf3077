// src/core/batch.rs
//
// Independent systems share nothing, so a batch fans out with one solver per system.
// Elimination within a single system stays sequential: every column step reads the
// rows the previous step wrote.

use rayon::prelude::*;
use log::{info, warn};
use crate::config::SolverConfig;
use crate::core::linear_system::LinearSystem;
use crate::matrix::augmented_matrix::AugmentedMatrix;
use crate::matrix::error::SolveError;
use crate::matrix::solution::Classification;

#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub name: Option<String>,
    pub modulus: u64,
    pub unknowns: usize,
    pub result: Result<Classification, SolveError>,
    /// The reduced matrix, kept when `report.include_matrix` is set.
    pub reduced: Option<AugmentedMatrix>,
}

pub fn solve_one(system: &LinearSystem, config: &SolverConfig) -> SolveOutcome {
    let mut reduced = None;
    let result = system.solver(config).and_then(|mut solver| {
        let classification = solver.solve();
        if config.report.include_matrix {
            reduced = Some(solver.into_matrix());
        }
        classification
    });

    if let Err(e) = &result {
        warn!("System {} failed: {}", system.label(), e);
    }

    SolveOutcome {
        name: system.name.clone(),
        modulus: system.modulus,
        unknowns: system.unknowns(),
        result,
        reduced,
    }
}

/// Solves every system on the rayon pool. Output order matches input order.
pub fn solve_batch(systems: &[LinearSystem], config: &SolverConfig) -> Vec<SolveOutcome> {
    info!("Solving {} systems on {} threads", systems.len(), rayon::current_num_threads());

    let outcomes: Vec<SolveOutcome> = systems
        .par_iter()
        .map(|system| solve_one(system, config))
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!("Batch done: {} solved, {} failed", outcomes.len() - failed, failed);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let systems: Vec<LinearSystem> = (1..=20)
            .map(|k| LinearSystem::named(format!("s{}", k), 101, vec![vec![1, k]]))
            .collect();

        let outcomes = solve_batch(&systems, &SolverConfig::default());
        assert_eq!(outcomes.len(), 20);
        for (k, outcome) in (1..=20u64).zip(&outcomes) {
            assert_eq!(outcome.name.as_deref(), Some(format!("s{}", k).as_str()));
            assert_eq!(outcome.result, Ok(Classification::Unique(vec![k])));
            assert!(outcome.reduced.is_none());
        }
    }

    #[test]
    fn test_batch_reports_errors_per_system() {
        let systems = vec![
            LinearSystem::new(7, vec![vec![1, 3]]),
            LinearSystem::new(0, vec![vec![1, 3]]),
            LinearSystem::new(6, vec![vec![2, 4]]),
        ];
        let outcomes = solve_batch(&systems, &SolverConfig::default());
        assert!(outcomes[0].result.is_ok());
        assert!(matches!(outcomes[1].result, Err(SolveError::Malformed { .. })));
        assert!(matches!(outcomes[2].result, Err(SolveError::NonInvertibleModulus { .. })));
    }

    #[test]
    fn test_include_matrix() {
        let mut config = SolverConfig::default();
        config.report.include_matrix = true;
        let outcome = solve_one(&LinearSystem::new(7, vec![vec![3, 2]]), &config);
        assert_eq!(outcome.reduced.map(|m| m.rows()), Some(vec![vec![1, 3]]));
    }
}
