use rand::rngs::SmallRng;
use rand::SeedableRng;
use sprout_backdrop::config::{
    ANGLE, EXIT_MARGIN, OPACITY, PARTICLE_COUNT, RIGHT_SPAWN_OFFSET_X, SIZE, SPEED, TOP_SPAWN_Y,
};
use sprout_backdrop::{Bounds, Color, ParticleSet, Shape};

fn in_ranges(set: &ParticleSet<SmallRng>) -> bool {
    set.particles().iter().all(|p| {
        SIZE.contains(&p.size)
            && SPEED.contains(&p.speed)
            && ANGLE.contains(&p.angle)
            && OPACITY.contains(&p.opacity)
            && Color::ALL.contains(&p.color)
            && Shape::ALL.contains(&p.shape)
    })
}

#[test]
fn attributes_stay_in_range_over_many_frames() {
    let bounds = Bounds::new(1280.0, 720.0);
    let mut set = ParticleSet::spawn_initial(SmallRng::seed_from_u64(42), bounds);
    for frame in 0..5_000 {
        set.tick(bounds);
        assert!(in_ranges(&set), "out of range at frame {frame}");
    }
    assert_eq!(set.particles().len(), PARTICLE_COUNT);
}

#[test]
fn every_particle_is_eventually_recycled_near_an_edge() {
    let bounds = Bounds::new(400.0, 300.0);
    let mut set = ParticleSet::spawn_initial(SmallRng::seed_from_u64(9), bounds);

    // Slowest speed is 0.5/frame; worst case travel is height + margin.
    let frames = ((bounds.height + EXIT_MARGIN) / SPEED.start) as usize + 1;
    let mut recycled = vec![false; PARTICLE_COUNT];
    for _ in 0..frames {
        let before: Vec<_> = set.particles().to_vec();
        set.tick(bounds);
        for (i, (b, a)) in before.iter().zip(set.particles()).enumerate() {
            if a.x > b.x || a.y < b.y {
                assert!(
                    a.y == TOP_SPAWN_Y || a.x == bounds.width + RIGHT_SPAWN_OFFSET_X,
                    "particle {i} respawned at ({}, {})",
                    a.x,
                    a.y
                );
                recycled[i] = true;
            }
        }
    }
    assert!(recycled.iter().all(|r| *r));
}

#[test]
fn resize_only_affects_the_exit_check() {
    let large = Bounds::new(1000.0, 800.0);
    let small = Bounds::new(500.0, 400.0);
    let mut set = ParticleSet::spawn_initial(SmallRng::seed_from_u64(1), large);
    let before: Vec<_> = set.particles().to_vec();

    set.tick(small);
    for (b, a) in before.iter().zip(set.particles()) {
        if b.y + b.speed > small.height + EXIT_MARGIN {
            assert!(a.y == TOP_SPAWN_Y || a.x == small.width + RIGHT_SPAWN_OFFSET_X);
        } else {
            assert_eq!((a.x, a.y), (b.x - b.speed, b.y + b.speed));
        }
    }
}
