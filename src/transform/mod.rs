//! 变换系统模块
//!
//! 提供可被动画驱动的变换能力接口，以及累积变换状态。
//!
//! ## 功能特性
//!
//! - `Transformable`: 动画引擎唯一依赖的能力接口
//! - `TransformState`: 模型矩阵与绝对位置/旋转的累积规则
//!
//! ## 使用示例
//!
//! ```rust
//! use stage_animator::transform::{TransformState, Transformable};
//! use glam::Vec3;
//!
//! let mut transform = TransformState::new();
//! transform.apply_translate(Vec3::new(0.0, 0.5, 10.0));
//! transform.apply_rotate((-90.0f32).to_radians(), Vec3::Y);
//!
//! assert_eq!(transform.absolute_position(), Vec3::new(0.0, 0.5, 10.0));
//! assert!((transform.absolute_rotation().y - 270.0).abs() < 1e-3);
//! ```

pub mod state;

pub use state::{normalize_degrees, TransformState};

use glam::Vec3;

/// 可变换对象的能力接口
///
/// 动画引擎只通过该接口操作目标对象，从不依赖具体的场景对象类型。
pub trait Transformable {
    /// 以弧度 `angle` 绕 `axis` 旋转
    fn apply_rotate(&mut self, angle: f32, axis: Vec3);

    /// 按各轴系数缩放，`Vec3::ONE` 表示不变
    fn apply_scale(&mut self, factor: Vec3);

    /// 平移（会根据当前朝向重新映射，见 [`TransformState::remap_translation`]）
    fn apply_translate(&mut self, translation: Vec3);

    /// 当前绝对位置
    fn absolute_position(&self) -> Vec3;

    /// 当前绝对旋转 (角度，每个分量位于 `[0, 360)`)
    fn absolute_rotation(&self) -> Vec3;
}
