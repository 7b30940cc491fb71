//! 场景对象构建器
//!
//! 以链式调用构建 `SceneObject`。位置、旋转和缩放按调用顺序通过
//! 与运行时相同的变换操作应用。

use super::object::SceneObject;
use crate::animation::AnimationState;
use crate::transform::Transformable;
use glam::Vec3;

#[derive(Debug, Clone)]
enum BuildStep {
    Translate(Vec3),
    Rotate { angle: f32, axis: Vec3 },
    Scale(Vec3),
}

/// 场景对象构建器
#[derive(Debug, Clone)]
pub struct SceneObjectBuilder {
    name: String,
    steps: Vec<BuildStep>,
    animation: Option<AnimationState>,
}

impl SceneObjectBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            animation: None,
        }
    }

    /// 平移到指定位置 (相对于当前累积位置)
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.steps.push(BuildStep::Translate(position));
        self
    }

    /// 以弧度 `angle` 绕 `axis` 旋转
    pub fn with_rotation(mut self, angle: f32, axis: Vec3) -> Self {
        self.steps.push(BuildStep::Rotate { angle, axis });
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.steps.push(BuildStep::Scale(scale));
        self
    }

    pub fn with_animation(mut self, animation: AnimationState) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn build(self) -> SceneObject {
        let mut object = SceneObject::new(self.name);
        for step in self.steps {
            match step {
                BuildStep::Translate(position) => object.apply_translate(position),
                BuildStep::Rotate { angle, axis } => object.apply_rotate(angle, axis),
                BuildStep::Scale(scale) => object.apply_scale(scale),
            }
        }
        if let Some(animation) = self.animation {
            object.set_animation(animation);
        }
        object
    }
}
