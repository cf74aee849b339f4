//! Long trajectories must reproduce the double-precision explicit Euler
//! reference frame for frame, including the frame on which they exit.

use coriolis_disc::SimConfig;
use coriolis_disc::sim::SimState;
use glam::DVec2;

/// Frame count, exit position and exit velocity from the reference update
/// loop (`v += 2w(vy, -vx); p += v` in doubles), spawning with velocity (0, 2)
/// on the default 400/400/300 disc at 0.5 degrees per frame.
const GOLDEN: [((f64, f64), u64, (f64, f64), (f64, f64)); 4] = [
    (
        (340.0, 452.0),
        4459,
        (626.5698061671688, 596.6383569561116),
        (2.610914378501182, -2.9560176020265105),
    ),
    (
        (407.0, 377.0),
        3047,
        (699.6803946233147, 413.8603662836184),
        (0.7322672404151831, -3.09545606786339),
    ),
    (
        (400.0, 400.0),
        3396,
        (691.0841142469554, 474.1735935553789),
        (1.3828214858871757, -3.0562414059646366),
    ),
    (
        (400.0, 700.0),
        1,
        (400.0349065850399, 702.0),
        (0.03490658503988659, 2.0),
    ),
];

/// Run a particle spawned at `at` until it leaves; returns (frames, position, velocity)
fn run_until_exit(config: &SimConfig, at: DVec2) -> (u64, DVec2, DVec2) {
    let mut state = SimState::new(config);
    assert!(state.spawn(at, config).is_some(), "{at} rejected");
    let mut frames = 0;
    loop {
        frames += 1;
        if let Some(gone) = state.step_particle(config.omega()) {
            return (frames, gone.position(), gone.velocity());
        }
        assert!(frames < 20_000, "particle from {at} never left");
    }
}

/// Plain double-precision port of the reference update loop
fn reference_exit_frame(x: f64, y: f64) -> Option<u64> {
    let (cx, cy, radius) = (400.0_f64, 400.0_f64, 300.0_f64);
    if ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt() > radius {
        return None;
    }
    let (mut x, mut y) = (x, y);
    let (mut vx, mut vy) = (0.0_f64, 2.0_f64);
    let mut frames = 0;
    loop {
        let w = 0.5_f64.to_radians();
        let ax = 2.0 * w * vy;
        let ay = -2.0 * w * vx;
        vx += ax;
        vy += ay;
        x += vx;
        y += vy;
        frames += 1;
        let (dx, dy) = (x - cx, y - cy);
        if (dx * dx + dy * dy).sqrt() > radius {
            return Some(frames);
        }
    }
}

#[test]
fn golden_trajectories_match_exactly() {
    let config = SimConfig::default();
    for ((x, y), frames, (px, py), (vx, vy)) in GOLDEN {
        let (got_frames, pos, vel) = run_until_exit(&config, DVec2::new(x, y));
        assert_eq!(got_frames, frames, "exit frame from ({x}, {y})");
        assert_eq!(pos, DVec2::new(px, py), "exit position from ({x}, {y})");
        assert_eq!(vel, DVec2::new(vx, vy), "exit velocity from ({x}, {y})");
    }
}

#[test]
fn grid_exit_frames_match_reference_port() {
    let config = SimConfig::default();
    let mut checked = 0;
    let mut y = 100.0;
    while y <= 700.0 {
        let mut x = 100.0;
        while x <= 700.0 {
            if let Some(expected) = reference_exit_frame(x, y) {
                let (frames, _, _) = run_until_exit(&config, DVec2::new(x, y));
                assert_eq!(frames, expected, "exit frame from ({x}, {y})");
                checked += 1;
            }
            x += 22.5;
        }
        y += 22.5;
    }
    assert!(checked > 500);
}
