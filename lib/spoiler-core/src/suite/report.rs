use std::fmt;
use std::time::Duration;

use crate::{Scenario, ScenarioError};

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// The scenario that ran.
    pub scenario: Scenario,
    /// `None` when the scenario passed.
    pub failure: Option<ScenarioError>,
    /// Wall-clock duration of the scenario.
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    /// `true` when every expectation held.
    pub fn is_passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl fmt::Display for ScenarioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            scenario,
            failure,
            elapsed,
        } = self;
        let order = scenario.order();
        let millis = elapsed.as_millis();
        match failure {
            None => write!(f, "[ok]     {order} {scenario} ({millis}ms)"),
            Some(error) => write!(f, "[FAILED] {order} {scenario} ({millis}ms): {error}"),
        }
    }
}

/// Outcomes of a run, in execution order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub(crate) fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Every outcome, in execution order.
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// The outcome of `scenario`, if it ran.
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|it| it.scenario == scenario)
    }

    /// Number of passed scenarios.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|it| it.is_passed()).count()
    }

    /// Number of failed scenarios.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// `true` when every scenario passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(
            f,
            "{} scenarios: {} passed, {} failed",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        )
    }
}
