use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 动画调度配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// 是否启用动画
    pub enabled: bool,

    /// 固定步长调度周期 (毫秒)
    pub tick_interval_ms: u64,

    /// 最大运行步数，`None` 表示直到没有活动动画为止
    pub max_ticks: Option<u64>,

    /// 是否在步与步之间按周期休眠
    pub realtime: bool,
}

impl_default!(AnimationConfig {
    enabled: true,
    tick_interval_ms: 10,
    max_ticks: None,
    realtime: false,
});

impl AnimationConfig {
    /// 调度周期
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid tick interval: {}ms",
                self.tick_interval_ms
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_ticks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
