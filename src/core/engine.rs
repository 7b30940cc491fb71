//! 引擎主入口
//!
//! 定义Engine结构和固定步长的主运行循环

use crate::config::{EngineConfig, LogLevel};
use crate::scene::{ObjectHandle, Scene};

use super::error::EngineResult;

/// 动画引擎主结构
///
/// `Engine` 持有配置和场景，以固定步长推进场景中的所有动画：
/// - 每个调度周期调用一次 [`Engine::tick`]
/// - 动画被关闭时跳过推进，但步数计数照常增加
/// - [`Engine::run`] 在达到 `max_ticks` 或场景中没有活动动画时结束
///
/// # 示例
///
/// ```
/// use stage_animator::config::EngineConfig;
/// use stage_animator::core::Engine;
/// use stage_animator::scene::Scene;
///
/// let mut engine = Engine::new(EngineConfig::default(), Scene::new("empty")).unwrap();
/// assert_eq!(engine.run().unwrap(), 0);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    scene: Scene,
    tick_count: u64,
}

impl Engine {
    /// 创建引擎，配置无效时返回错误
    pub fn new(config: EngineConfig, mut scene: Scene) -> EngineResult<Self> {
        config.validate()?;
        scene.set_animation_enabled(config.animation.enabled);

        tracing::info!(
            target: "engine",
            scene = scene.name(),
            objects = scene.len(),
            tick_ms = config.animation.tick_interval_ms,
            "Engine created"
        );

        Ok(Self {
            config,
            scene,
            tick_count: 0,
        })
    }

    /// 初始化日志系统
    ///
    /// 优先使用`RUST_LOG`环境变量，未设置时使用配置的日志级别。
    /// 重复调用不会报错。
    pub fn initialize_logging(level: LogLevel) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_directive()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        tracing::info!(target: "engine", "Engine starting");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// 已执行的步数
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// 取回场景
    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// 推进一个调度周期，返回本步完成动画的对象
    pub fn tick(&mut self) -> EngineResult<Vec<ObjectHandle>> {
        let completed = self.scene.tick()?;
        self.tick_count += 1;
        for handle in &completed {
            if let Some(object) = self.scene.get(*handle) {
                tracing::info!(
                    target: "engine",
                    object = object.name(),
                    tick = self.tick_count,
                    "Animation completed"
                );
            }
        }
        Ok(completed)
    }

    /// 连续推进 `ticks` 个周期
    pub fn run_for(&mut self, ticks: u64) -> EngineResult<()> {
        for _ in 0..ticks {
            self.step_once()?;
        }
        Ok(())
    }

    /// 运行主循环，返回本次执行的步数
    ///
    /// 设置了 `max_ticks` 时运行到该步数为止；否则运行到场景中不再有
    /// 绑定动画的对象为止。循环动画永不结束，此时必须设置 `max_ticks`。
    /// 未设置 `max_ticks` 且动画已关闭时立即返回。
    pub fn run(&mut self) -> EngineResult<u64> {
        let start = self.tick_count;

        loop {
            let executed = self.tick_count - start;
            match self.config.animation.max_ticks {
                Some(max) if executed >= max => break,
                None if self.scene.animated_count() == 0 => break,
                None if !self.scene.animation_enabled() => {
                    tracing::warn!(
                        target: "engine",
                        animated = self.scene.animated_count(),
                        "Animation disabled without max_ticks, stopping loop"
                    );
                    break;
                }
                _ => {}
            }
            self.step_once()?;
        }

        let executed = self.tick_count - start;
        tracing::info!(
            target: "engine",
            ticks = executed,
            animated = self.scene.animated_count(),
            "Engine loop finished"
        );
        Ok(executed)
    }

    fn step_once(&mut self) -> EngineResult<()> {
        self.tick()?;
        if self.config.animation.realtime {
            std::thread::sleep(self.config.animation.tick_interval());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationState, RepeatPolicy, Stage};
    use crate::core::error::{EngineError, SceneError};
    use crate::scene::SceneObjectBuilder;
    use crate::transform::Transformable;
    use glam::Vec3;

    fn scene_with(policy: RepeatPolicy, stages: Vec<Stage>) -> Scene {
        let mut scene = Scene::new("test");
        scene
            .add(
                SceneObjectBuilder::new("Car")
                    .with_animation(AnimationState::with_stages(policy, stages).unwrap())
                    .build(),
            )
            .unwrap();
        scene
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.animation.tick_interval_ms = 0;

        assert!(matches!(
            Engine::new(config, Scene::default()),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_run_until_sequences_finish() {
        let scene = scene_with(
            RepeatPolicy::None,
            vec![Stage::translate(Vec3::X, 3), Stage::translate(Vec3::Y, 2)],
        );
        let mut engine = Engine::new(EngineConfig::default(), scene).unwrap();

        assert_eq!(engine.run().unwrap(), 5);
        assert_eq!(engine.scene().animated_count(), 0);
        assert_eq!(
            engine.scene().object("Car").unwrap().absolute_position(),
            Vec3::new(3.0, 2.0, 0.0)
        );
    }

    #[test]
    fn test_run_respects_max_ticks() {
        let scene = scene_with(RepeatPolicy::Loop, vec![Stage::translate(Vec3::X, 1)]);
        let mut config = EngineConfig::default();
        config.animation.max_ticks = Some(7);
        let mut engine = Engine::new(config, scene).unwrap();

        assert_eq!(engine.run().unwrap(), 7);
        assert_eq!(engine.tick_count(), 7);
        assert_eq!(
            engine.scene().object("Car").unwrap().absolute_position(),
            Vec3::new(7.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_disabled_animation_still_counts_ticks() {
        let scene = scene_with(RepeatPolicy::Loop, vec![Stage::translate(Vec3::X, 1)]);
        let mut config = EngineConfig::default();
        config.animation.enabled = false;
        let mut engine = Engine::new(config, scene).unwrap();

        engine.run_for(4).unwrap();
        assert_eq!(engine.tick_count(), 4);
        assert_eq!(
            engine.scene().object("Car").unwrap().absolute_position(),
            Vec3::ZERO
        );

        engine.scene_mut().toggle_animation();
        engine.tick().unwrap();
        assert_eq!(
            engine.scene().object("Car").unwrap().absolute_position(),
            Vec3::X
        );
    }

    #[test]
    fn test_run_returns_when_disabled_without_max_ticks() {
        let scene = scene_with(RepeatPolicy::None, vec![Stage::translate(Vec3::X, 2)]);
        let mut config = EngineConfig::default();
        config.animation.enabled = false;
        config.animation.realtime = true;
        let mut engine = Engine::new(config, scene).unwrap();

        assert_eq!(engine.run().unwrap(), 0);
        assert_eq!(engine.scene().animated_count(), 1);

        // 重新开启后照常运行到结束
        engine.scene_mut().set_animation_enabled(true);
        engine.config.animation.realtime = false;
        assert_eq!(engine.run().unwrap(), 2);
        assert_eq!(engine.scene().animated_count(), 0);
    }

    #[test]
    fn test_failed_tick_is_not_counted() {
        let mut scene = Scene::default();
        let mut object = crate::scene::SceneObject::new("Empty");
        object.set_animation(AnimationState::new(RepeatPolicy::Loop));
        scene.add(object).unwrap();
        let mut engine = Engine::new(EngineConfig::default(), scene).unwrap();

        assert!(engine.tick().is_err());
        assert!(engine.run_for(3).is_err());
        assert_eq!(engine.tick_count(), 0);
    }

    #[test]
    fn test_tick_propagates_scene_errors() {
        let mut scene = Scene::default();
        let mut object = crate::scene::SceneObject::new("Empty");
        object.set_animation(AnimationState::new(RepeatPolicy::Loop));
        scene.add(object).unwrap();
        let mut engine = Engine::new(EngineConfig::default(), scene).unwrap();

        assert!(matches!(
            engine.tick(),
            Err(EngineError::Scene(SceneError::Animation(_)))
        ));
    }
}
