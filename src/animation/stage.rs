use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 阶段类型及其参数
///
/// 每种类型携带自己的向量含义：旋转轴、缩放系数、平移增量或绝对目标位置。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageKind {
    /// 每步以弧度 `angle` 绕 `axis` 旋转
    Rotate { angle: f32, axis: Vec3 },
    /// 每步按系数缩放
    Scale(Vec3),
    /// 每步平移固定增量
    Translate(Vec3),
    /// 在阶段持续步数内从当前绝对位置线性移动到目标绝对位置
    MoveTo(Vec3),
}

impl StageKind {
    /// 用于日志的类型名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "rotate",
            Self::Scale(_) => "scale",
            Self::Translate(_) => "translate",
            Self::MoveTo(_) => "move_to",
        }
    }
}

/// 动画阶段
///
/// 一条原子变换指令，持续固定的步数。加入序列后不可变。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// 阶段类型
    pub kind: StageKind,
    /// 持续步数 (必须 >= 1，在加入序列时校验)
    pub duration_steps: u32,
}

impl Stage {
    pub fn new(kind: StageKind, duration_steps: u32) -> Self {
        Self {
            kind,
            duration_steps,
        }
    }

    /// 旋转阶段，`angle` 为每步弧度
    pub fn rotate(angle: f32, axis: Vec3, duration_steps: u32) -> Self {
        Self::new(StageKind::Rotate { angle, axis }, duration_steps)
    }

    /// 旋转阶段，`degrees` 为每步角度
    pub fn rotate_degrees(degrees: f32, axis: Vec3, duration_steps: u32) -> Self {
        Self::rotate(degrees.to_radians(), axis, duration_steps)
    }

    pub fn scale(factor: Vec3, duration_steps: u32) -> Self {
        Self::new(StageKind::Scale(factor), duration_steps)
    }

    pub fn translate(offset: Vec3, duration_steps: u32) -> Self {
        Self::new(StageKind::Translate(offset), duration_steps)
    }

    pub fn move_to(target: Vec3, duration_steps: u32) -> Self {
        Self::new(StageKind::MoveTo(target), duration_steps)
    }
}

/// 重复策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// 最后一个阶段结束后停止并通知拥有者释放动画
    None,
    /// 最后一个阶段结束后回到第一个阶段
    #[default]
    Loop,
    /// 在首尾之间来回往复，单阶段序列保持不动
    PingPong,
}
