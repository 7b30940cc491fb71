//! # Stage Animator
//!
//! A fixed-step procedural animation engine for scene objects, built with Rust.
//!
//! ## Features
//!
//! - **Stage Sequences**: Rotate, scale, translate and move-to stages, each lasting a whole number of ticks
//! - **Repeat Policies**: Run once, loop, or ping-pong through the stage list
//! - **Exact Arrival**: Move-to stages land on their target for any step count
//! - **Scenes**: Named object registry stepped in a stable order, loadable from TOML/JSON
//! - **Configuration**: TOML/JSON config files with environment overrides
//!
//! ## Architecture Design
//!
//! This crate follows the **Anemic Domain Model (贫血模型)** pattern:
//! - **State**: Pure data structures storing animation and transform state
//! - **Service**: Business logic encapsulation with static methods
//! - **Scene / Engine**: Orchestration and fixed-period scheduling
//!
//! ### Example
//!
//! ```
//! use stage_animator::animation::{AnimationEngine, AnimationState, RepeatPolicy, Stage};
//! use stage_animator::transform::{TransformState, Transformable};
//! use glam::Vec3;
//!
//! let mut state = AnimationState::new(RepeatPolicy::None);
//! state.add_stage(Stage::translate(Vec3::X, 2)).unwrap();
//!
//! let mut transform = TransformState::new();
//! AnimationEngine::step(&mut state, &mut transform).unwrap();
//! AnimationEngine::step(&mut state, &mut transform).unwrap();
//! assert_eq!(transform.absolute_position(), Vec3::new(2.0, 0.0, 0.0));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Errors and the engine loop
//! - [`config`]: Configuration system
//! - [`transform`]: Transform capability and accumulation rules
//! - [`animation`]: Stage sequences and the step service
//! - [`scene`]: Scene objects, registry and scene files

/// Core engine functionality including the main loop and error types
pub mod core;
/// Configuration system
pub mod config;
/// Transform capability and accumulated transform state
pub mod transform;
/// Stage-based procedural animation
pub mod animation;
/// Scene management and serialization
pub mod scene;
