use super::builder::SceneObjectBuilder;
use super::manager::Scene;
use crate::animation::{AnimationState, RepeatPolicy, Stage, StageKind};
use crate::core::error::{SceneError, SceneResult};
use crate::transform::Transformable;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 序列化的场景数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedScene {
    /// 场景名称
    pub name: String,
    /// 对象列表 (顺序即推进顺序)
    #[serde(default)]
    pub objects: Vec<SerializedObject>,
}

/// 序列化的场景对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedObject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
    /// 按顺序应用的旋转
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rotations: Vec<SerializedRotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<SerializedAnimation>,
}

/// 初始旋转 (角度)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedRotation {
    pub angle_degrees: f32,
    pub axis: [f32; 3],
}

/// 序列化的动画
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedAnimation {
    #[serde(default)]
    pub policy: RepeatPolicy,
    pub stages: Vec<SerializedStage>,
}

/// 序列化的动画阶段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SerializedStage {
    Rotate {
        angle_degrees: f32,
        axis: [f32; 3],
        duration_steps: u32,
    },
    Scale {
        factor: [f32; 3],
        duration_steps: u32,
    },
    Translate {
        offset: [f32; 3],
        duration_steps: u32,
    },
    MoveTo {
        target: [f32; 3],
        duration_steps: u32,
    },
}

impl From<&Stage> for SerializedStage {
    fn from(stage: &Stage) -> Self {
        let duration_steps = stage.duration_steps;
        match stage.kind {
            StageKind::Rotate { angle, axis } => Self::Rotate {
                angle_degrees: angle.to_degrees(),
                axis: axis.to_array(),
                duration_steps,
            },
            StageKind::Scale(factor) => Self::Scale {
                factor: factor.to_array(),
                duration_steps,
            },
            StageKind::Translate(offset) => Self::Translate {
                offset: offset.to_array(),
                duration_steps,
            },
            StageKind::MoveTo(target) => Self::MoveTo {
                target: target.to_array(),
                duration_steps,
            },
        }
    }
}

impl From<&SerializedStage> for Stage {
    fn from(stage: &SerializedStage) -> Self {
        match *stage {
            SerializedStage::Rotate {
                angle_degrees,
                axis,
                duration_steps,
            } => Stage::rotate_degrees(angle_degrees, Vec3::from_array(axis), duration_steps),
            SerializedStage::Scale {
                factor,
                duration_steps,
            } => Stage::scale(Vec3::from_array(factor), duration_steps),
            SerializedStage::Translate {
                offset,
                duration_steps,
            } => Stage::translate(Vec3::from_array(offset), duration_steps),
            SerializedStage::MoveTo {
                target,
                duration_steps,
            } => Stage::move_to(Vec3::from_array(target), duration_steps),
        }
    }
}

impl SerializedAnimation {
    /// 构建动画状态，阶段无效时返回错误
    pub fn to_state(&self) -> SceneResult<AnimationState> {
        let stages = self.stages.iter().map(Stage::from);
        Ok(AnimationState::with_stages(self.policy, stages)?)
    }

    pub fn from_state(state: &AnimationState) -> Self {
        Self {
            policy: state.policy(),
            stages: state.stages().iter().map(SerializedStage::from).collect(),
        }
    }
}

impl SerializedScene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// 从场景快照当前状态
    ///
    /// 位置取绝对位置，旋转按 X、Y、Z 分轴记录绝对旋转；
    /// 缩放已合并进模型矩阵，不单独记录。
    pub fn from_scene(scene: &Scene) -> Self {
        let objects = scene
            .objects()
            .iter()
            .map(|object| {
                let position = object.absolute_position();
                let rotation = object.absolute_rotation();
                SerializedObject {
                    name: object.name().to_string(),
                    position: (position != Vec3::ZERO).then(|| position.to_array()),
                    scale: None,
                    rotations: [Vec3::X, Vec3::Y, Vec3::Z]
                        .into_iter()
                        .zip(rotation.to_array())
                        .filter(|(_, degrees)| *degrees != 0.0)
                        .map(|(axis, degrees)| SerializedRotation {
                            angle_degrees: degrees,
                            axis: axis.to_array(),
                        })
                        .collect(),
                    animation: object.animation().map(SerializedAnimation::from_state),
                }
            })
            .collect();

        Self {
            name: scene.name().to_string(),
            objects,
        }
    }

    /// 构建场景
    pub fn into_scene(&self) -> SceneResult<Scene> {
        let mut scene = Scene::new(self.name.clone());

        for serialized in &self.objects {
            let mut builder = SceneObjectBuilder::new(serialized.name.clone());
            if let Some(position) = serialized.position {
                builder = builder.with_position(Vec3::from_array(position));
            }
            for rotation in &serialized.rotations {
                builder = builder.with_rotation(
                    rotation.angle_degrees.to_radians(),
                    Vec3::from_array(rotation.axis),
                );
            }
            if let Some(scale) = serialized.scale {
                builder = builder.with_scale(Vec3::from_array(scale));
            }
            if let Some(animation) = &serialized.animation {
                builder = builder.with_animation(animation.to_state()?);
            }
            scene.add(builder.build())?;
        }

        tracing::info!(
            target: "scene",
            scene = %self.name,
            objects = scene.len(),
            animated = scene.animated_count(),
            "Scene built"
        );
        Ok(scene)
    }

    pub fn from_json_str(content: &str) -> SceneResult<Self> {
        serde_json::from_str(content).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self) -> SceneResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    pub fn from_toml_str(content: &str) -> SceneResult<Self> {
        toml::from_str(content).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    pub fn to_toml_string(&self) -> SceneResult<String> {
        toml::to_string_pretty(self).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    /// 保存场景到文件，按扩展名选择TOML或JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> SceneResult<()> {
        let path = path.as_ref();
        let content = if is_toml(path) {
            self.to_toml_string()?
        } else {
            self.to_json_string()?
        };
        std::fs::write(path, content).map_err(|e| SceneError::Serialization(e.to_string()))
    }

    /// 从文件加载场景，按扩展名选择TOML或JSON
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SceneError::Serialization(e.to_string()))?;
        if is_toml(path) {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
