use glam::Vec3;

/// 移动缓存
///
/// 保存 `MoveTo` 阶段的每步位移。阶段首步计算一次，之后原样复用，
/// 直到阶段索引变化时失效。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveCache {
    delta: Option<Vec3>,
}

impl MoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.delta.is_some()
    }

    /// 缓存中的每步位移
    pub fn delta(&self) -> Option<Vec3> {
        self.delta
    }

    pub fn invalidate(&mut self) {
        self.delta = None;
    }

    /// 获取每步位移，缓存无效时由 `(target - current) / duration_steps` 计算并保存
    pub fn per_step_delta(&mut self, target: Vec3, current: Vec3, duration_steps: u32) -> Vec3 {
        *self
            .delta
            .get_or_insert_with(|| (target - current) / duration_steps as f32)
    }
}
