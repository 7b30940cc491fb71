//! 场景管理器
//!
//! 维护有序的场景对象列表，并在每个固定步长内按插入顺序推进所有动画。

use super::object::SceneObject;
use crate::animation::StepOutcome;
use crate::core::error::{SceneError, SceneResult};

/// 场景对象句柄 (插入顺序索引)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub usize);

/// 动画完成监听器
///
/// 不重复的序列结束时，每个对象恰好通知一次。
pub trait AnimationListener {
    fn on_animation_complete(&mut self, handle: ObjectHandle, name: &str);
}

impl<F> AnimationListener for F
where
    F: FnMut(ObjectHandle, &str),
{
    fn on_animation_complete(&mut self, handle: ObjectHandle, name: &str) {
        self(handle, name)
    }
}

/// 场景
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    objects: Vec<SceneObject>,
    animation_enabled: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl Scene {
    /// 创建新的空场景
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            animation_enabled: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 添加对象，名称重复时返回错误
    pub fn add(&mut self, object: SceneObject) -> SceneResult<ObjectHandle> {
        if self.find_by_name(object.name()).is_some() {
            return Err(SceneError::DuplicateObject(object.name().to_string()));
        }
        let handle = ObjectHandle(self.objects.len());
        tracing::debug!(target: "scene", object = object.name(), index = handle.0, "Object added");
        self.objects.push(object);
        Ok(handle)
    }

    /// 按名称查找对象句柄
    pub fn find_by_name(&self, name: &str) -> Option<ObjectHandle> {
        self.objects
            .iter()
            .position(|object| object.name() == name)
            .map(ObjectHandle)
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        self.objects.get_mut(handle.0)
    }

    /// 按名称获取对象，未找到时返回错误
    pub fn object(&self, name: &str) -> SceneResult<&SceneObject> {
        self.find_by_name(name)
            .and_then(|handle| self.get(handle))
            .ok_or_else(|| SceneError::ObjectNotFound(name.to_string()))
    }

    /// 按名称获取可变对象，未找到时返回错误
    pub fn object_mut(&mut self, name: &str) -> SceneResult<&mut SceneObject> {
        let handle = self
            .find_by_name(name)
            .ok_or_else(|| SceneError::ObjectNotFound(name.to_string()))?;
        self.objects
            .get_mut(handle.0)
            .ok_or_else(|| SceneError::ObjectNotFound(name.to_string()))
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// 当前绑定了动画的对象数量
    pub fn animated_count(&self) -> usize {
        self.objects.iter().filter(|object| object.has_animation()).count()
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.animation_enabled = enabled;
    }

    /// 切换动画开关，返回新的状态
    pub fn toggle_animation(&mut self) -> bool {
        self.animation_enabled = !self.animation_enabled;
        tracing::info!(target: "scene", enabled = self.animation_enabled, "Animation toggled");
        self.animation_enabled
    }

    /// 推进一个固定步长，返回本步完成动画的对象
    pub fn tick(&mut self) -> SceneResult<Vec<ObjectHandle>> {
        let mut completed = Vec::new();
        self.tick_with(&mut |handle: ObjectHandle, _: &str| completed.push(handle))?;
        Ok(completed)
    }

    /// 推进一个固定步长，并通过监听器报告完成的动画
    ///
    /// 对象按插入顺序逐个推进，每个对象的一步完整结束后才推进下一个。
    /// 出错的对象本步不做修改，其余对象照常推进；本步结束后返回第一个错误。
    pub fn tick_with<L>(&mut self, listener: &mut L) -> SceneResult<usize>
    where
        L: AnimationListener + ?Sized,
    {
        if !self.animation_enabled {
            return Ok(0);
        }

        let mut completed = 0;
        let mut first_error = None;
        for (index, object) in self.objects.iter_mut().enumerate() {
            match object.animate() {
                Ok(StepOutcome::Completed) => {
                    completed += 1;
                    listener.on_animation_complete(ObjectHandle(index), object.name());
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(target: "scene", object = object.name(), error = %err, "Animation step failed");
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(completed),
        }
    }
}
