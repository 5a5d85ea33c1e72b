//! Integration tests for the simulation engine.
//!
//! These drive the public API the way an external front end would: build,
//! advance, reset, clear, and inspect the returned views. Everything is
//! seeded, so every assertion is about a deterministic run.

use plife::prelude::*;

fn three_groups() -> Vec<GroupConfig> {
    vec![
        GroupConfig::new("red", 40, palette::RED),
        GroupConfig::new("green", 40, palette::GREEN),
        GroupConfig::new("blue", 40, palette::BLUE),
    ]
}

fn build(params: Params, seed: u64, parallel: bool) -> SimulationEngine {
    let mut sim = Simulation::new()
        .with_params(params)
        .with_seed(seed)
        .with_parallelism(parallel);
    for config in three_groups() {
        sim = sim.with_group(config);
    }
    sim.build().unwrap()
}

fn lively_params(wrapped: bool) -> Params {
    // Stronger momentum than the default so single runs show real motion.
    Params {
        momentum: 0.5,
        wrapped,
        ..Params::default()
    }
}

// ============================================================================
// Invariants over many ticks
// ============================================================================

#[test]
fn test_velocity_never_exceeds_terminal() {
    let mut engine = build(lively_params(true), 7, true);
    let terminal = engine.params().terminal_velocity;

    for _ in 0..100 {
        let groups = engine.advance().unwrap();
        for group in groups {
            for p in &group.particles {
                assert!(p.velocity.x.abs() <= terminal);
                assert!(p.velocity.y.abs() <= terminal);
            }
        }
    }
}

#[test]
fn test_wrapped_positions_stay_in_unit_square() {
    let mut engine = build(lively_params(true), 21, true);

    for _ in 0..200 {
        let groups = engine.advance().unwrap();
        for group in groups {
            for p in &group.particles {
                assert!(p.position.x >= 0.0 && p.position.x < 1.0);
                assert!(p.position.y >= 0.0 && p.position.y < 1.0);
            }
        }
    }
}

#[test]
fn test_reflective_positions_stay_inside_walls() {
    let mut engine = build(lively_params(false), 21, true);

    for _ in 0..200 {
        let groups = engine.advance().unwrap();
        for group in groups {
            for p in &group.particles {
                assert!(p.position.x >= 0.0 && p.position.x < 1.0);
                assert!(p.position.y >= 0.0 && p.position.y < 1.0);
            }
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

fn positions(engine: &SimulationEngine) -> Vec<Vec2> {
    engine
        .groups()
        .iter()
        .flat_map(|g| g.particles.iter().map(|p| p.position))
        .collect()
}

#[test]
fn test_parallel_matches_serial_exactly() {
    let mut parallel = build(lively_params(true), 99, true);
    let mut serial = build(lively_params(true), 99, false);

    for _ in 0..50 {
        parallel.advance().unwrap();
        serial.advance().unwrap();
    }

    assert_eq!(positions(&parallel), positions(&serial));
}

#[test]
fn test_same_seed_replays_same_run() {
    let mut a = build(lively_params(true), 1234, true);
    let mut b = build(lively_params(true), 1234, true);

    for _ in 0..50 {
        a.advance().unwrap();
        b.advance().unwrap();
    }

    assert_eq!(positions(&a), positions(&b));
}

// ============================================================================
// Setup, reset, clear
// ============================================================================

#[test]
fn test_setup_runs_warm_up_pass() {
    let engine = build(lively_params(true), 5, true);

    // Before the first advance, the warm-up pass has already produced
    // motion somewhere in the swarm.
    let moving = engine
        .groups()
        .iter()
        .flat_map(|g| &g.particles)
        .any(|p| p.velocity != Vec2::ZERO);
    assert!(moving);
}

#[test]
fn test_advance_preserves_group_identities_and_counts() {
    let mut engine = build(lively_params(true), 5, true);
    let groups = engine.advance().unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].name, "red");
    assert_eq!(groups[1].name, "green");
    assert_eq!(groups[2].name, "blue");
    for group in groups {
        assert_eq!(group.len(), 40);
    }
}

#[test]
fn test_reset_restores_seed_layout() {
    let mut engine = Simulation::new()
        .with_group(GroupConfig::new("red", 8, palette::RED).with_seeds(&spawn::GRID_2X2))
        .with_params(lively_params(true))
        .with_seed(17)
        .build()
        .unwrap();

    for _ in 0..20 {
        engine.advance().unwrap();
    }
    engine.reset();

    let group = &engine.groups()[0];
    assert_eq!(group.len(), 8);
    for (i, p) in group.particles.iter().enumerate() {
        assert_eq!(p.position, spawn::GRID_2X2[i % 4]);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
    // The matrix survives a reset.
    assert!(engine.rules().is_some());
}

#[test]
fn test_cleared_engine_fails_fast() {
    let mut engine = build(lively_params(true), 5, true);
    engine.clear();

    assert!(!engine.is_configured());
    assert!(engine.groups().is_empty());
    assert!(engine.rules().is_none());
    assert!(matches!(
        engine.advance(),
        Err(SimulationError::NotConfigured)
    ));
}

// ============================================================================
// Force model edge cases
// ============================================================================

#[test]
fn test_zero_affinity_means_no_motion() {
    let params = Params {
        momentum: 1.0,
        repulsion: 0.0,
        wrapped: false,
        ..Params::default()
    };
    let mut engine = Simulation::new()
        .with_group(GroupConfig::new("a", 5, palette::RED))
        .with_group(GroupConfig::new("b", 5, palette::GREEN))
        .with_group(GroupConfig::new("c", 5, palette::BLUE))
        .with_matrix(RuleMatrix::zeros(3))
        .with_params(params)
        .with_seed(3)
        .build()
        .unwrap();

    let before = positions(&engine);
    for _ in 0..25 {
        let groups = engine.advance().unwrap();
        for group in groups {
            for p in &group.particles {
                assert_eq!(p.velocity, Vec2::ZERO);
            }
        }
    }
    assert_eq!(positions(&engine), before);
}

#[test]
fn test_coincident_particles_jitter_apart_without_faults() {
    let params = Params {
        momentum: 1.0,
        repulsion: 0.004,
        wrapped: true,
        ..Params::default()
    };
    // Both particles on the same seed: every pair interaction is an exact
    // coincidence until the jitter separates them.
    let mut engine = Simulation::new()
        .with_group(GroupConfig::new("stacked", 2, palette::WHITE).with_seeds(&spawn::CENTER))
        .with_matrix(RuleMatrix::zeros(1))
        .with_params(params)
        .with_seed(11)
        .build()
        .unwrap();

    engine.advance().unwrap();

    let group = &engine.groups()[0];
    let mut any_motion = false;
    for p in &group.particles {
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
        assert!(p.velocity.x.abs() <= params.repulsion);
        assert!(p.velocity.y.abs() <= params.repulsion);
        assert!(p.position.x >= 0.0 && p.position.x < 1.0);
        assert!(p.position.y >= 0.0 && p.position.y < 1.0);
        if p.velocity != Vec2::ZERO {
            any_motion = true;
        }
    }
    assert!(any_motion);
}

// ============================================================================
// Rule-matrix export through the engine
// ============================================================================

#[test]
fn test_rule_accessors_and_csv_export() {
    let engine = build(lively_params(true), 77, true);
    let rules = engine.rules().unwrap();

    assert_eq!(rules.size(), 3);
    let csv = rules.to_csv();
    assert_eq!(csv.lines().count(), 3);
    for line in csv.lines() {
        assert_eq!(line.split(',').count(), 3);
    }
}

#[test]
fn test_export_writes_files() {
    let engine = build(lively_params(true), 77, true);
    let rules = engine.rules().unwrap();

    let dir = std::env::temp_dir();
    let csv_path = dir.join("plife_test_rules.csv");
    let png_path = dir.join("plife_test_rules.png");

    rules.write_csv(&csv_path).unwrap();
    rules.write_png(&png_path).unwrap();

    let written = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(written, rules.to_csv());
    assert!(std::fs::metadata(&png_path).unwrap().len() > 0);

    std::fs::remove_file(csv_path).ok();
    std::fs::remove_file(png_path).ok();
}
