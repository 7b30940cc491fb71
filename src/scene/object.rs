use crate::animation::{AnimationEngine, AnimationState, StepOutcome};
use crate::core::error::AnimationResult;
use crate::transform::{TransformState, Transformable};
use glam::Vec3;

/// 场景对象
///
/// 拥有自己的变换状态，以及至多一个绑定的动画。动画按值持有，
/// 绑定在 `set_animation` 时建立，在 `clear_animation` 或不重复序列结束时释放。
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    transform: TransformState,
    animation: Option<AnimationState>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: TransformState::new(),
            animation: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// 绑定动画，替换已有的绑定
    pub fn set_animation(&mut self, animation: AnimationState) {
        if self.animation.is_some() {
            tracing::debug!(target: "scene", object = %self.name, "Replacing bound animation");
        }
        self.animation = Some(animation);
    }

    /// 解除并返回当前绑定的动画
    pub fn clear_animation(&mut self) -> Option<AnimationState> {
        self.animation.take()
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&AnimationState> {
        self.animation.as_ref()
    }

    /// 推进绑定的动画一步
    ///
    /// 未绑定动画时为空操作并返回 `StepOutcome::Idle`。返回
    /// `StepOutcome::Completed` 时绑定已被释放。
    pub fn animate(&mut self) -> AnimationResult<StepOutcome> {
        let outcome = AnimationEngine::step_binding(&mut self.animation, &mut self.transform)?;
        if outcome == StepOutcome::Completed {
            tracing::info!(target: "scene", object = %self.name, "Animation finished, binding released");
        }
        Ok(outcome)
    }
}

impl Transformable for SceneObject {
    fn apply_rotate(&mut self, angle: f32, axis: Vec3) {
        self.transform.apply_rotate(angle, axis);
    }

    fn apply_scale(&mut self, factor: Vec3) {
        self.transform.apply_scale(factor);
    }

    fn apply_translate(&mut self, translation: Vec3) {
        self.transform.apply_translate(translation);
    }

    fn absolute_position(&self) -> Vec3 {
        self.transform.absolute_position()
    }

    fn absolute_rotation(&self) -> Vec3 {
        self.transform.absolute_rotation()
    }
}
