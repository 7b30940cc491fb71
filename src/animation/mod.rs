//! 动画系统模块
//!
//! 提供基于固定步长的多阶段程序化动画。
//!
//! ## 功能特性
//!
//! - 旋转 / 缩放 / 平移 / 移动到绝对位置四种阶段
//! - 三种重复策略：不重复、循环、往复
//! - `MoveTo` 阶段在任意步数下精确落在目标位置
//!
//! ## 使用示例
//!
//! ```rust
//! use stage_animator::animation::{AnimationEngine, AnimationState, RepeatPolicy, Stage};
//! use stage_animator::transform::{TransformState, Transformable};
//! use glam::Vec3;
//!
//! // 创建动画序列
//! let mut animation = AnimationState::new(RepeatPolicy::Loop);
//! animation.add_stage(Stage::move_to(Vec3::new(0.0, 0.5, 17.0), 150)).unwrap();
//! animation.add_stage(Stage::rotate_degrees(-1.0, Vec3::Y, 90)).unwrap();
//!
//! // 每个固定步长推进一步
//! let mut transform = TransformState::new();
//! transform.apply_translate(Vec3::new(0.0, 0.5, 10.0));
//! for _ in 0..150 {
//!     AnimationEngine::step(&mut animation, &mut transform).unwrap();
//! }
//! assert!((transform.absolute_position().z - 17.0).abs() < 1e-3);
//! ```

pub mod cache;
pub mod sequencer;
pub mod service;
pub mod stage;
pub mod state;


pub use cache::MoveCache;
pub use sequencer::{Advance, PingPongDirection, StageSequencer};
pub use service::{AnimationEngine, StepOutcome};
pub use stage::{RepeatPolicy, Stage, StageKind};
pub use state::AnimationState;
