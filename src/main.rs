use stage_animator::config::EngineConfig;
use stage_animator::core::{Engine, EngineResult};
use stage_animator::scene::SerializedScene;
use stage_animator::transform::Transformable;

const DEMO_SCENE: &str = include_str!("../scenes/demo.toml");

/// 汽车跑完一圈所需的步数
const CIRCUIT_TICKS: u64 = 910;

fn run() -> EngineResult<()> {
    let mut config = EngineConfig::load_or_default();
    config.apply_env_overrides();
    Engine::initialize_logging(config.logging.level);

    if config.animation.max_ticks.is_none() {
        config.animation.max_ticks = Some(CIRCUIT_TICKS);
    }

    let scene = SerializedScene::from_toml_str(DEMO_SCENE)?.into_scene()?;
    let mut engine = Engine::new(config, scene)?;
    let ticks = engine.run()?;

    let car = engine.scene().object("Car")?;
    tracing::info!(
        target: "engine",
        ticks,
        position = ?car.absolute_position(),
        rotation = ?car.absolute_rotation(),
        "Demo finished"
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Engine failed to run: {}", e);
        std::process::exit(1);
    }
}
