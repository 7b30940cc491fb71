//! 统一错误处理模块
//!
//! 提供引擎范围内的统一错误类型定义
//!
//! ## 错误类型分层
//!
//! - **动画层错误** (`AnimationError`): 阶段配置与序列执行的错误
//! - **场景层错误** (`SceneError`): 对象注册、查找与场景文件的错误
//! - **配置错误** (`config::ConfigError`): 配置加载与验证的错误
//!
//! `EngineError` 可以同时承载以上所有错误。
//!
//! 阶段索引越界属于程序缺陷，不通过错误值返回，而是直接 panic。

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎核心错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 动画系统错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// 阶段持续步数必须至少为 1
    #[error("Invalid stage: duration must be at least 1 step, got {duration_steps}")]
    InvalidStage { duration_steps: u32 },

    /// 对没有任何阶段的序列执行步进
    #[error("Cannot step an animation sequence with no stages")]
    EmptySequence,
}

/// 场景领域错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// 对象未找到
    #[error("Scene object not found: {0}")]
    ObjectNotFound(String),

    /// 对象名称重复
    #[error("Scene object already exists: {0}")]
    DuplicateObject(String),

    /// 序列化或反序列化失败
    #[error("Scene serialization failed: {0}")]
    Serialization(String),

    /// 场景对象携带的动画无效
    #[error("Invalid animation: {0}")]
    Animation(#[from] AnimationError),
}

/// 引擎结果类型别名
pub type EngineResult<T> = Result<T, EngineError>;
pub type AnimationResult<T> = Result<T, AnimationError>;
pub type SceneResult<T> = Result<T, SceneError>;
