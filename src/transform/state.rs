//! 累积变换状态

use super::Transformable;
use glam::{Mat4, Vec3};

/// 变换状态
///
/// 将平移、旋转和缩放依次组合进模型矩阵，同时独立跟踪绝对位置和绝对旋转。
/// 绝对值是插值的锚点，与模型矩阵分开维护。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// 组合后的模型矩阵
    model: Mat4,
    /// 绝对位置 (累积的原始平移量)
    absolute_position: Vec3,
    /// 绝对旋转 (角度，每个分量位于 `[0, 360)`)
    absolute_rotation: Vec3,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            absolute_position: Vec3::ZERO,
            absolute_rotation: Vec3::ZERO,
        }
    }
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 组合后的模型矩阵
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// 根据当前绝对 Y 轴旋转重新映射平移量
    ///
    /// 按 90° 区间粗略映射，仅对轴对齐朝向精确：
    ///
    /// | Y 旋转 | 映射 |
    /// |---|---|
    /// | 全部分量为 0 | 不变 |
    /// | `[0, 90]` | 交换 X 与 Z |
    /// | `(90, 180]` | X 与 Z 取反 |
    /// | `(180, 270]` | 交换 X 与 Z 并取反 |
    /// | `(270, 360)` | 不变 |
    ///
    /// 区间上界是闭区间。
    pub fn remap_translation(&self, translation: Vec3) -> Vec3 {
        if self.absolute_rotation == Vec3::ZERO {
            return translation;
        }

        let yaw = self.absolute_rotation.y;
        if yaw <= 90.0 {
            Vec3::new(translation.z, translation.y, translation.x)
        } else if yaw <= 180.0 {
            Vec3::new(-translation.x, translation.y, -translation.z)
        } else if yaw <= 270.0 {
            Vec3::new(-translation.z, translation.y, -translation.x)
        } else {
            translation
        }
    }
}

/// 将角度归一化到 `[0, 360)`
///
/// 负值先加 360 再取模。
pub fn normalize_degrees(value: f32) -> f32 {
    let mut degrees = value;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    degrees = degrees.rem_euclid(360.0);
    // rem_euclid 对极小的负数会舍入到 360.0
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

impl Transformable for TransformState {
    fn apply_rotate(&mut self, angle: f32, axis: Vec3) {
        let unit_axis = axis.normalize_or_zero();
        if unit_axis != Vec3::ZERO {
            self.model *= Mat4::from_axis_angle(unit_axis, angle);
        }

        let rotation = self.absolute_rotation + angle.to_degrees() * axis;
        self.absolute_rotation = Vec3::new(
            normalize_degrees(rotation.x),
            normalize_degrees(rotation.y),
            normalize_degrees(rotation.z),
        );
    }

    fn apply_scale(&mut self, factor: Vec3) {
        self.model *= Mat4::from_scale(factor);
    }

    fn apply_translate(&mut self, translation: Vec3) {
        let remapped = self.remap_translation(translation);
        self.model *= Mat4::from_translation(remapped);
        self.absolute_position += translation;
    }

    fn absolute_position(&self) -> Vec3 {
        self.absolute_position
    }

    fn absolute_rotation(&self) -> Vec3 {
        self.absolute_rotation
    }
}
