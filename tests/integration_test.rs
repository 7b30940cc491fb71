use glam::Vec3;
use stage_animator::animation::{AnimationState, RepeatPolicy, Stage};
use stage_animator::config::EngineConfig;
use stage_animator::core::{AnimationError, Engine, SceneError};
use stage_animator::scene::{ObjectHandle, Scene, SceneObjectBuilder, SerializedScene};
use stage_animator::transform::Transformable;

const EPSILON: f32 = 1e-2;

fn demo_scene_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes/demo.toml")
}

fn assert_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).abs().max_element() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_car_circuit_completes_one_lap() -> anyhow::Result<()> {
    let scene = SerializedScene::load_from_file(demo_scene_path())?.into_scene()?;
    let mut config = EngineConfig::default();
    config.animation.max_ticks = Some(910);
    let mut engine = Engine::new(config, scene)?;

    // 第一段直线结束
    engine.run_for(150)?;
    assert_near(
        engine.scene().object("Car")?.absolute_position(),
        Vec3::new(0.0, 0.5, 17.0),
    );

    // 第一次转弯结束
    engine.run_for(90)?;
    assert!((engine.scene().object("Car")?.absolute_rotation().y - 270.0).abs() < EPSILON);

    engine.run_for(910 - 240)?;
    let car = engine.scene().object("Car")?;
    assert_near(car.absolute_position(), Vec3::new(0.0, 0.5, -27.0));
    let heading = car.absolute_rotation().y;
    assert!(heading.min(360.0 - heading) < EPSILON, "heading {}", heading);

    // 循环动画保持绑定，静态对象不受影响
    assert!(car.has_animation());
    assert_eq!(engine.scene().animated_count(), 1);
    assert_eq!(
        engine.scene().object("Tree")?.absolute_position(),
        Vec3::new(2.5, 0.0, 0.0)
    );
    Ok(())
}

#[test]
fn test_engine_run_stops_at_max_ticks() -> anyhow::Result<()> {
    let scene = SerializedScene::load_from_file(demo_scene_path())?.into_scene()?;
    let config = EngineConfig::from_toml_str(
        r#"
        [animation]
        max_ticks = 300
        "#,
    )?;
    let mut engine = Engine::new(config, scene)?;

    assert_eq!(engine.run()?, 300);
    assert_eq!(engine.tick_count(), 300);
    Ok(())
}

#[test]
fn test_builder_scene_completion_flow() -> anyhow::Result<()> {
    let mut scene = Scene::new("flow");
    let once = scene.add(
        SceneObjectBuilder::new("Ball")
            .with_position(Vec3::new(1.0, 0.0, 0.0))
            .with_animation(AnimationState::with_stages(
                RepeatPolicy::None,
                [
                    Stage::move_to(Vec3::new(1.0, 4.0, 0.0), 4),
                    Stage::scale(Vec3::splat(2.0), 1),
                ],
            )?)
            .build(),
    )?;
    scene.add(
        SceneObjectBuilder::new("Spinner")
            .with_animation(AnimationState::with_stages(
                RepeatPolicy::Loop,
                [Stage::rotate_degrees(10.0, Vec3::Y, 3)],
            )?)
            .build(),
    )?;

    let mut completed = Vec::new();
    let mut listener = |handle: ObjectHandle, name: &str| completed.push((handle, name.to_string()));
    for _ in 0..10 {
        scene.tick_with(&mut listener)?;
    }

    assert_eq!(completed, vec![(once, "Ball".to_string())]);
    assert_near(
        scene.object("Ball")?.absolute_position(),
        Vec3::new(1.0, 4.0, 0.0),
    );
    assert!(!scene.object("Ball")?.has_animation());
    assert!((scene.object("Spinner")?.absolute_rotation().y - 100.0).abs() < EPSILON);
    Ok(())
}

#[test]
fn test_ping_pong_stage_walk() -> anyhow::Result<()> {
    let mut state = AnimationState::with_stages(
        RepeatPolicy::PingPong,
        [
            Stage::translate(Vec3::X, 1),
            Stage::translate(Vec3::Y, 1),
            Stage::translate(Vec3::Z, 1),
        ],
    )?;
    let mut object = SceneObjectBuilder::new("Pendulum").build();
    object.set_animation(state.clone());

    let mut visited = vec![state.current_stage_index()];
    let mut transform = stage_animator::transform::TransformState::new();
    for _ in 0..6 {
        stage_animator::animation::AnimationEngine::step(&mut state, &mut transform)?;
        visited.push(state.current_stage_index());
        object.animate()?;
    }

    assert_eq!(visited, vec![0, 1, 2, 1, 0, 1, 2]);
    // X, Y, Z, Y, X, Y
    assert_eq!(transform.absolute_position(), Vec3::new(2.0, 3.0, 1.0));
    assert_eq!(object.absolute_position(), transform.absolute_position());
    Ok(())
}

#[test]
fn test_scene_file_round_trip_keeps_animation_running() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("snapshot.json");

    let mut scene = SerializedScene::load_from_file(demo_scene_path())?.into_scene()?;
    for _ in 0..50 {
        scene.tick()?;
    }
    SerializedScene::from_scene(&scene).save_to_file(&path)?;

    let restored = SerializedScene::load_from_file(&path)?.into_scene()?;
    let original = scene.object("Car")?;
    let loaded = restored.object("Car")?;
    assert_near(loaded.absolute_position(), original.absolute_position());
    let (loaded, original) = (loaded.animation().unwrap(), original.animation().unwrap());
    assert_eq!(loaded.policy(), original.policy());
    assert_eq!(loaded.stage_count(), 8);
    assert_eq!(loaded.stages()[2], original.stages()[2]);
    Ok(())
}

#[test]
fn test_invalid_stage_surfaces_from_scene_file() {
    let result = SerializedScene::from_toml_str(
        r#"
        name = "broken"

        [[objects]]
        name = "Car"

        [objects.animation]
        policy = "ping_pong"

        [[objects.animation.stages]]
        kind = "scale"
        factor = [1.0, 1.0, 1.0]
        duration_steps = 0
        "#,
    )
    .and_then(|serialized| serialized.into_scene());

    assert!(matches!(
        result,
        Err(SceneError::Animation(AnimationError::InvalidStage { duration_steps: 0 }))
    ));
}
