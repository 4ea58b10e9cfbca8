//! 固定槽位删除结果的决策
//!
//! 删除在确认后交给 `DeletionPolicy` 决定成败。目前没有真实的删除端点，
//! 默认使用 `SimulatedDeletion`（30% 失败）；接入真实接口时只需替换实现。

use rand::Rng;

/// 默认的模拟失败概率
pub const SIMULATED_FAILURE_RATE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    Failed,
}

#[async_trait::async_trait(?Send)]
pub trait DeletionPolicy {
    async fn delete_constant(&self, collection_id: i64, product_id: &str) -> DeletionOutcome;
}

/// 模拟服务端往返，按概率失败
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDeletion {
    failure_rate: f64,
}

impl SimulatedDeletion {
    pub fn new(failure_rate: f64) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedDeletion {
    fn default() -> Self {
        Self::new(SIMULATED_FAILURE_RATE)
    }
}

#[async_trait::async_trait(?Send)]
impl DeletionPolicy for SimulatedDeletion {
    async fn delete_constant(&self, collection_id: i64, product_id: &str) -> DeletionOutcome {
        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        log::debug!(
            "simulated constant deletion {}/{}: failed={}",
            collection_id,
            product_id,
            failed
        );
        if failed {
            DeletionOutcome::Failed
        } else {
            DeletionOutcome::Deleted
        }
    }
}

/// 固定结果，测试中用于强制走某一分支
#[derive(Debug, Clone, Copy)]
pub struct FixedDeletion(pub DeletionOutcome);

#[async_trait::async_trait(?Send)]
impl DeletionPolicy for FixedDeletion {
    async fn delete_constant(&self, _collection_id: i64, _product_id: &str) -> DeletionOutcome {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_extremes_are_deterministic() {
        let never = SimulatedDeletion::new(0.0);
        let always = SimulatedDeletion::new(1.0);
        for _ in 0..20 {
            assert_eq!(never.delete_constant(1, "A").await, DeletionOutcome::Deleted);
            assert_eq!(always.delete_constant(1, "A").await, DeletionOutcome::Failed);
        }
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        assert_eq!(SimulatedDeletion::new(4.0).failure_rate(), 1.0);
        assert_eq!(SimulatedDeletion::new(-1.0).failure_rate(), 0.0);
        assert_eq!(SimulatedDeletion::default().failure_rate(), 0.3);
    }
}
