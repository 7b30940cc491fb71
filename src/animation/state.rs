use super::cache::MoveCache;
use super::sequencer::{PingPongDirection, StageSequencer};
use super::stage::{RepeatPolicy, Stage};
use crate::core::error::{AnimationError, AnimationResult};

/// 动画状态 (纯数据结构)
///
/// 有序阶段列表、重复策略、序列游标与移动缓存。业务逻辑在
/// [`AnimationEngine`](super::AnimationEngine) 中。
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    stages: Vec<Stage>,
    policy: RepeatPolicy,
    pub(crate) sequencer: StageSequencer,
    pub(crate) move_cache: MoveCache,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(RepeatPolicy::default())
    }
}

impl AnimationState {
    /// 以给定重复策略创建空序列
    pub fn new(policy: RepeatPolicy) -> Self {
        Self {
            stages: Vec::new(),
            policy,
            sequencer: StageSequencer::new(),
            move_cache: MoveCache::new(),
        }
    }

    /// 以给定阶段创建序列，任一阶段无效时返回错误
    pub fn with_stages<I>(policy: RepeatPolicy, stages: I) -> AnimationResult<Self>
    where
        I: IntoIterator<Item = Stage>,
    {
        let mut state = Self::new(policy);
        for stage in stages {
            state.add_stage(stage)?;
        }
        Ok(state)
    }

    /// 追加一个阶段
    ///
    /// 持续步数为 0 时返回 `AnimationError::InvalidStage`，序列保持不变。
    pub fn add_stage(&mut self, stage: Stage) -> AnimationResult<()> {
        if stage.duration_steps < 1 {
            tracing::warn!(
                target: "animation",
                kind = stage.kind.name(),
                "Rejected stage with zero duration"
            );
            return Err(AnimationError::InvalidStage {
                duration_steps: stage.duration_steps,
            });
        }
        self.stages.push(stage);
        Ok(())
    }

    pub fn policy(&self) -> RepeatPolicy {
        self.policy
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn current_stage_index(&self) -> usize {
        self.sequencer.current_stage()
    }

    pub fn current_step(&self) -> u32 {
        self.sequencer.current_step()
    }

    pub fn previous_stage_index(&self) -> usize {
        self.sequencer.previous_stage()
    }

    pub fn ping_pong_direction(&self) -> PingPongDirection {
        self.sequencer.direction()
    }

    /// `RepeatPolicy::None` 序列是否已经结束
    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }

    /// 当前缓存的 `MoveTo` 每步位移
    pub fn cached_move_delta(&self) -> Option<glam::Vec3> {
        self.move_cache.delta()
    }

    /// 当前阶段
    ///
    /// 空序列返回 `AnimationError::EmptySequence`。
    ///
    /// # Panics
    ///
    /// 游标越界说明内部状态已损坏，直接 panic。
    pub fn current_stage(&self) -> AnimationResult<&Stage> {
        if self.stages.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        let index = self.sequencer.current_stage();
        match self.stages.get(index) {
            Some(stage) => Ok(stage),
            None => panic!(
                "stage index invariant violated: index {} with {} stages",
                index,
                self.stages.len()
            ),
        }
    }
}
