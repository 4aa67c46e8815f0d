//! Reporting line dependency graph.

use std::collections::{HashMap, VecDeque};

use finstat_shared::config::EngineConfig;

use super::error::RollupError;

/// Validated evaluation plan for the declared reporting lines.
///
/// Built once from configuration. Leaf lines carry no dependencies; composite
/// lines depend on the lines their formulas reference. The plan is a
/// topological order, so by the time a composite is evaluated every line it
/// references is already resolved. A composite referencing an unresolved line
/// is therefore impossible at evaluation time; it is rejected here.
#[derive(Debug, Clone)]
pub struct LineGraph {
    order: Vec<usize>,
}

impl LineGraph {
    /// Builds the evaluation plan from the declared lines.
    ///
    /// # Errors
    ///
    /// Returns an error when a formula references an undeclared or
    /// percentage-valued line, or when the formulas form a cycle.
    pub fn build(config: &EngineConfig) -> Result<Self, RollupError> {
        let index: HashMap<&str, usize> = config
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.name.as_str(), i))
            .collect();

        // dependents[i] lists the lines whose formulas reference line i
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); config.lines.len()];
        let mut indegree: Vec<usize> = vec![0; config.lines.len()];

        for (i, line) in config.lines.iter().enumerate() {
            for term in &line.formula {
                let Some(&dep) = index.get(term.line.as_str()) else {
                    return Err(RollupError::UnknownLine {
                        line: line.name.clone(),
                        referenced: term.line.clone(),
                    });
                };
                if config.lines[dep].percentage {
                    return Err(RollupError::PercentageLineInFormula {
                        line: line.name.clone(),
                        referenced: term.line.clone(),
                    });
                }
                dependents[dep].push(i);
                indegree[i] += 1;
            }
        }

        // Kahn's algorithm, seeded in declaration order so the plan is stable
        let mut queue: VecDeque<usize> = indegree
            .iter()
            .enumerate()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(i, _)| i)
            .collect();
        let mut order = Vec::with_capacity(config.lines.len());

        while let Some(i) = queue.pop_front() {
            order.push(i);
            for &dependent in &dependents[i] {
                indegree[dependent] -= 1;
                if indegree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() < config.lines.len() {
            let stuck = indegree
                .iter()
                .position(|&deg| deg > 0)
                .map(|i| config.lines[i].name.clone())
                .unwrap_or_default();
            return Err(RollupError::Cycle(stuck));
        }

        Ok(Self { order })
    }

    /// Line indices in evaluation order, leaves first.
    #[must_use]
    pub fn eval_order(&self) -> &[usize] {
        &self.order
    }
}
