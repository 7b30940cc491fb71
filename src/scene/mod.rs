//! 场景管理系统
//!
//! 提供场景对象的构建、注册、逐步推进以及场景文件的加载和保存。

pub mod builder;
pub mod manager;
pub mod object;
pub mod serialization;

pub use builder::SceneObjectBuilder;
pub use manager::{AnimationListener, ObjectHandle, Scene};
pub use object::SceneObject;
pub use serialization::{
    SerializedAnimation, SerializedObject, SerializedRotation, SerializedScene, SerializedStage,
};
