use crate::config::RenameConfig;
use crate::error::{AppError, Result};
use crate::mover::Mover;
use crate::plan::{AssignmentKind, RenamePlan};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub episodes_moved: usize,
    pub extras_moved: usize,
    pub bytes_moved: u64,
}

impl ExecutionResult {
    pub fn files_moved(&self) -> usize {
        self.episodes_moved + self.extras_moved
    }
}

pub struct Executor;

impl Executor {
    /// Creates the destination directories, then applies the plan in order.
    ///
    /// The first failure aborts the run. Files moved before it stay where
    /// they are.
    pub fn execute_plan(
        plan: &RenamePlan,
        mover: &dyn Mover,
        config: &RenameConfig,
    ) -> Result<ExecutionResult> {
        let dirs = std::iter::once(&config.dest_dir).chain(config.extras_dir.as_ref());
        for dir in dirs {
            mover.ensure_dir(dir).map_err(|e| AppError::CreateDir {
                path: dir.clone(),
                reason: e.to_string(),
            })?;
        }

        let mut result = ExecutionResult::default();

        for assignment in &plan.assignments {
            tracing::debug!("Applying {}", assignment);
            mover
                .move_file(&assignment.source.path, &assignment.destination)
                .map_err(|e| {
                    tracing::error!("Failed to move {}: {}", assignment.source.path.display(), e);
                    AppError::MoveFailed {
                        from: assignment.source.path.clone(),
                        to: assignment.destination.clone(),
                        reason: e.to_string(),
                    }
                })?;

            match assignment.kind {
                AssignmentKind::Episode(_) => result.episodes_moved += 1,
                AssignmentKind::Extra(_) => result.extras_moved += 1,
            }
            result.bytes_moved += assignment.source.size;
        }

        tracing::info!(
            "Execution complete: {} episodes, {} extras",
            result.episodes_moved,
            result.extras_moved
        );

        Ok(result)
    }
}
