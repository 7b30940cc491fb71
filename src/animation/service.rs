//! 动画服务层
//!
//! 遵循贫血模型，将逐步推进的业务逻辑封装在 `AnimationEngine` 中：
//! - `AnimationState`: 纯数据结构
//! - `AnimationEngine`: 每步的调度与变换应用
//! - `Scene::tick`: 按稳定顺序编排所有对象

use super::stage::StageKind;
use super::sequencer::Advance;
use super::state::AnimationState;
use crate::core::error::AnimationResult;
use crate::transform::Transformable;

/// 单步执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 已应用一步，序列仍在进行
    Continued,
    /// 已应用最后一步，`RepeatPolicy::None` 序列结束，拥有者应释放动画
    Completed,
    /// 没有绑定动画或序列早已结束，未做任何修改
    Idle,
}

/// 动画引擎 - 封装单步推进逻辑
pub struct AnimationEngine;

impl AnimationEngine {
    /// 推进一步
    ///
    /// 1. 读取当前阶段 (空序列直接返回错误，不修改任何状态)
    /// 2. 阶段索引变化时使移动缓存失效
    /// 3. 按阶段类型对目标应用变换
    /// 4. 推进游标，必要时切换阶段或报告结束
    pub fn step<T>(state: &mut AnimationState, target: &mut T) -> AnimationResult<StepOutcome>
    where
        T: Transformable + ?Sized,
    {
        if state.is_finished() {
            return Ok(StepOutcome::Idle);
        }

        let stage = *state.current_stage()?;

        if state.sequencer.take_stage_change() {
            state.move_cache.invalidate();
        }

        match stage.kind {
            StageKind::Rotate { angle, axis } => target.apply_rotate(angle, axis),
            StageKind::Scale(factor) => target.apply_scale(factor),
            StageKind::Translate(offset) => target.apply_translate(offset),
            StageKind::MoveTo(destination) => {
                let delta = state.move_cache.per_step_delta(
                    destination,
                    target.absolute_position(),
                    stage.duration_steps,
                );
                target.apply_translate(delta);
            }
        }

        let stage_count = state.stage_count();
        match state
            .sequencer
            .advance(state.policy(), stage_count, stage.duration_steps)
        {
            Advance::SameStage => Ok(StepOutcome::Continued),
            Advance::NextStage { from, to } => {
                tracing::debug!(
                    target: "animation",
                    from,
                    to,
                    kind = stage.kind.name(),
                    "Stage finished"
                );
                Ok(StepOutcome::Continued)
            }
            Advance::Finished => {
                tracing::info!(
                    target: "animation",
                    stages = stage_count,
                    "Animation sequence completed"
                );
                Ok(StepOutcome::Completed)
            }
        }
    }

    /// 推进拥有者持有的可选动画绑定
    ///
    /// 未绑定时为空操作；序列结束时释放绑定。
    pub fn step_binding<T>(
        binding: &mut Option<AnimationState>,
        target: &mut T,
    ) -> AnimationResult<StepOutcome>
    where
        T: Transformable + ?Sized,
    {
        let Some(state) = binding.as_mut() else {
            return Ok(StepOutcome::Idle);
        };

        let outcome = Self::step(state, target)?;
        if outcome == StepOutcome::Completed {
            *binding = None;
        }
        Ok(outcome)
    }

    /// 序列运行一遍所需的总步数
    pub fn total_steps(state: &AnimationState) -> u64 {
        state
            .stages()
            .iter()
            .map(|stage| u64::from(stage.duration_steps))
            .sum()
    }
}
