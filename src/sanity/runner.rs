use crate::sanity::block::CheckBlock;
use crate::sanity::operator::Operator;
use crate::sanity::runtime::NumericRuntime;
use crate::sanity::sanity_result::{Result, RunInfo};
use std::time::Instant;

/// Runs the Addition, Subtraction, Multiplication and Division blocks in that
/// order against a numeric runtime. The first failing assertion aborts the
/// whole run.
pub struct SanityRunner<R: NumericRuntime> {
    runtime: R,
    blocks: Vec<CheckBlock>,
}

impl<R: NumericRuntime> SanityRunner<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            blocks: Operator::ALL.iter().map(|&op| CheckBlock::new(op)).collect(),
        }
    }

    pub fn blocks(&self) -> &[CheckBlock] {
        &self.blocks
    }

    pub fn run(&self) -> Result<RunInfo> {
        let timer = Instant::now();
        let mut assertions_checked = 0;
        for block in &self.blocks {
            assertions_checked += block.run(&self.runtime)?;
        }
        let info = RunInfo {
            assertions_checked,
            elapsed: timer.elapsed(),
        };
        info!("All assertions hold: {:?}", info);
        Ok(info)
    }
}
