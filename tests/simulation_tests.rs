//! End-to-end behaviour of the trail simulation: spawning, ageing,
//! rendering and kind selection driven through the public API.

use mouse_trails::prelude::*;
use mouse_trails::shapes;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sim(kind: ParticleKind) -> Simulation {
    Simulation::with_seed(200, 200, 1234).with_kind(kind)
}

// ============================================================================
// Spawning
// ============================================================================

#[test]
fn test_hearts_ignore_small_moves() {
    let mut sim = sim(ParticleKind::Hearts);
    sim.tick(Some(IVec2::new(100, 100)), 0.0);
    sim.tick(Some(IVec2::new(102, 101)), 0.0);
    assert!(sim.particles().is_empty());
}

#[test]
fn test_hearts_throw_one_per_large_move() {
    let mut sim = sim(ParticleKind::Hearts);
    sim.tick(Some(IVec2::new(100, 100)), 0.0);
    sim.tick(Some(IVec2::new(130, 100)), 0.0);
    assert_eq!(sim.particles().len(), 1);
    assert!(sim.particles()[0].velocity.y <= 0.0);
}

#[test]
fn test_fire_spawns_every_four_pixels() {
    let mut sim = sim(ParticleKind::Fire);
    sim.tick(Some(IVec2::new(40, 100)), 0.0);
    sim.tick(Some(IVec2::new(60, 100)), 0.0);
    assert_eq!(sim.particles().len(), 5);

    // Trail particles sit strictly between the two pointer positions.
    for p in sim.particles() {
        assert!(p.position.x > 40.0 && p.position.x < 60.0);
        assert_eq!(p.position.y, 100.0);
    }
}

#[test]
fn test_short_move_still_spawns_one() {
    let mut sim = sim(ParticleKind::Smoke);
    sim.tick(Some(IVec2::new(10, 10)), 0.0);
    sim.tick(Some(IVec2::new(11, 10)), 0.0);
    assert_eq!(sim.particles().len(), 1);
}

#[test]
fn test_standing_still_spawns_nothing() {
    let mut sim = sim(ParticleKind::Sparks);
    for _ in 0..5 {
        sim.tick(Some(IVec2::new(70, 70)), 0.016);
    }
    assert!(sim.particles().is_empty());
}

#[test]
fn test_rising_kinds_start_upward() {
    for kind in [ParticleKind::Stars, ParticleKind::Smoke, ParticleKind::Sword] {
        let mut sim = sim(kind);
        sim.tick(Some(IVec2::new(0, 100)), 0.0);
        sim.tick(Some(IVec2::new(190, 100)), 0.0);
        assert!(!sim.particles().is_empty());
        assert!(sim.particles().iter().all(|p| p.velocity.y <= 0.0), "{}", kind);
    }
}

// ============================================================================
// Ageing
// ============================================================================

#[test]
fn test_life_never_negative_after_tick() {
    let mut sim = sim(ParticleKind::Stars);
    let mut pointer = ScriptedPointer::circle(Vec2::new(100.0, 100.0), 60.0, 32)
        .with_speed(15.0)
        .looping(true);
    let mut clock = FrameClock::default().with_fixed_delta(0.03);

    for _ in 0..100 {
        sim.run_frame(&mut pointer, &mut clock);
        assert!(sim.particles().iter().all(|p| p.life > 0.0));
    }
}

#[test]
fn test_sparks_gone_shortly_after_pointer_stops() {
    let mut sim = sim(ParticleKind::Sparks);
    sim.tick(Some(IVec2::new(20, 100)), 0.0);
    sim.tick(Some(IVec2::new(120, 100)), 0.0);
    assert_eq!(sim.particles().len(), 50);

    for _ in 0..21 {
        sim.tick(None, 0.01);
    }
    assert!(sim.particles().is_empty());
    assert_eq!(sim.framebuffer().lit_count(), 0);
}

#[test]
fn test_fade_shrinks_monotonically() {
    let lifecycle = Lifecycle::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut p = Particle::new(ParticleKind::Smoke, Vec2::new(50.0, 50.0), 0.5).with_scale(1.4);

    let mut last = p.scale;
    while p.is_alive() {
        lifecycle.advance(&mut p, 0.02, &mut rng);
        assert!(p.scale <= last);
        last = p.scale;
    }
    assert!(last < 0.1);
}

#[test]
fn test_gravity_only_pulls_falling_kinds() {
    let lifecycle = Lifecycle::new();
    let mut rng = SmallRng::seed_from_u64(4);

    let mut smoke = Particle::new(ParticleKind::Smoke, Vec2::ZERO, 1.0);
    let mut fire = Particle::new(ParticleKind::Fire, Vec2::ZERO, 1.0);
    lifecycle.advance(&mut smoke, 0.1, &mut rng);
    lifecycle.advance(&mut fire, 0.1, &mut rng);

    assert!(smoke.velocity.y > 0.0);
    assert_eq!(fire.velocity.y, 0.0);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_star_stays_inside_its_bounding_box() {
    let mut fb = Framebuffer::new(100, 100);
    let mut rng = SmallRng::seed_from_u64(5);
    let star = Particle::new(ParticleKind::Stars, Vec2::new(50.0, 50.0), 0.4)
        .with_scale(1.5)
        .with_rotation(37.0, 0.0)
        .with_color(Rgb::new(255, 220, 40));

    assert!(shapes::draw(&mut fb, &star, &mut rng));
    assert!(fb.lit_count() > 0);
    // 16x16 mask at scale 1.5, any rotation, plus the 3x3 pixel block.
    for (x, y, _) in fb.lit_pixels() {
        assert!((30..=70).contains(&x), "x = {}", x);
        assert!((30..=70).contains(&y), "y = {}", y);
    }
}

#[test]
fn test_origin_translates_global_positions() {
    let mut fb = Framebuffer::new(40, 40).with_origin(IVec2::new(100, 100));
    let mut rng = SmallRng::seed_from_u64(6);
    let puff = Particle::new(ParticleKind::Smoke, Vec2::new(105.0, 105.0), 1.0)
        .with_scale(1.0)
        .with_color(Rgb::gray(200));

    assert!(shapes::draw(&mut fb, &puff, &mut rng));
    let centre = fb.get(5, 5).unwrap_or(0);
    assert!(centre >> 24 > 0);
    for (x, y, _) in fb.lit_pixels() {
        assert!((x - 5).abs() <= 8 && (y - 5).abs() <= 8);
    }
}

#[test]
fn test_off_buffer_particles_are_culled() {
    let mut fb = Framebuffer::new(50, 50).with_origin(IVec2::new(-50, 0));
    let mut rng = SmallRng::seed_from_u64(7);
    let star = Particle::new(ParticleKind::Stars, Vec2::new(10.0, 10.0), 0.4).with_scale(1.0);

    assert!(!shapes::draw(&mut fb, &star, &mut rng));
    assert_eq!(fb.lit_count(), 0);
}

#[test]
fn test_every_kind_renders_something() {
    for kind in ParticleKind::ALL {
        let mut sim = sim(kind);
        sim.tick(Some(IVec2::new(40, 120)), 0.0);
        let frame = sim.tick(Some(IVec2::new(160, 120)), 0.01);
        assert!(frame.lit_count() > 0, "{} drew nothing", kind);
    }
}

#[test]
fn test_render_clears_previous_frame() {
    let mut sim = sim(ParticleKind::Fire);
    sim.tick(Some(IVec2::new(40, 40)), 0.0);
    sim.tick(Some(IVec2::new(80, 40)), 0.0);
    assert!(sim.framebuffer().lit_count() > 0);

    sim.tick(None, 1.0);
    assert!(sim.particles().is_empty());
    assert_eq!(sim.framebuffer().lit_count(), 0);
}

// ============================================================================
// Kind selection and configuration
// ============================================================================

#[test]
fn test_unknown_menu_id_selects_smoke() {
    let mut sim = sim(ParticleKind::Fire);
    assert_eq!(sim.select_kind(99), ParticleKind::Smoke);
    assert_eq!(sim.active_kind(), ParticleKind::Smoke);
}

#[test]
fn test_switching_kind_keeps_live_particles() {
    let mut sim = sim(ParticleKind::Fire);
    sim.tick(Some(IVec2::new(40, 40)), 0.0);
    sim.tick(Some(IVec2::new(60, 40)), 0.0);
    let fire = sim.particles().len();

    sim.select_kind(2);
    sim.tick(Some(IVec2::new(100, 40)), 0.0);
    let kinds: Vec<_> = sim.particles().iter().map(|p| p.kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == ParticleKind::Fire).count(), fire);
    assert!(kinds.contains(&ParticleKind::Stars));
}

#[test]
fn test_config_driven_run_writes_png() {
    let config = TrailConfig::from_json(
        r#"{ "kind": "sword", "seed": 11, "width": 120, "height": 90, "origin": [-120, 0] }"#,
    )
    .unwrap();
    let mut sim = Simulation::from_config(&config).unwrap();

    sim.tick(Some(IVec2::new(-110, 45)), 0.0);
    sim.tick(Some(IVec2::new(-20, 45)), 0.016);
    assert!(sim.framebuffer().lit_count() > 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sword.png");
    sim.framebuffer().save_png(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (120, 90));
}
