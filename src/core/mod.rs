//! 核心模块
//!
//! 包含引擎的核心功能：
//! - `engine` - 主引擎入口和固定步长运行循环
//! - `error` - 错误类型定义
//! - `macros` - 通用宏

pub mod engine;
pub mod error;
#[macro_use]
pub mod macros;

// 重新导出错误类型
pub use error::{
    AnimationError, AnimationResult, EngineError, EngineResult, SceneError, SceneResult,
};

// 重新导出主要类型
pub use engine::Engine;
