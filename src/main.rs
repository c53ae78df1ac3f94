//! Bounceform trace demo
//!
//! Headless stand-in for a render loop: builds the drop and toss
//! trajectories, samples both against a wall clock, and logs a position
//! trace until everything has settled. Presentation concerns - the
//! rendering-radius offset and horizontal wraparound - happen here, at the
//! edge, never in the solver.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use bounceform::consts::{BALL_RADIUS, SCREEN_WIDTH, TRACE_INTERVAL_MS};
use bounceform::{FrameClock, PlanarTrajectory, Scenario, VerticalTrajectory};

/// Map a raw position to integer screen coordinates: lift by the ball
/// radius so the circle sits on its tracked bottom point, and wrap
/// horizontally.
fn screen_pos(x: f64, y: f64) -> (i64, i64) {
    let wrapped = (x.round() as i64).rem_euclid(SCREEN_WIDTH as i64);
    (wrapped, (y - BALL_RADIUS).round() as i64)
}

fn main() -> ExitCode {
    env_logger::init();

    let scenario = Scenario::load();
    let drop = match VerticalTrajectory::new(scenario.drop) {
        Ok(traj) => traj,
        Err(e) => {
            log::error!("invalid drop config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let toss = match PlanarTrajectory::new(scenario.toss) {
        Ok(traj) => traj,
        Err(e) => {
            log::error!("invalid toss config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Run to the later settling time, or a fixed horizon when a trajectory
    // never settles (elastic restitution, zero gravity).
    let rest = drop
        .profile()
        .rest_time
        .max(toss.profile().rest_time);
    let horizon_ms = if rest.is_finite() {
        rest as u64 + 500
    } else {
        10_000
    };

    let clock = FrameClock::start();
    let mut next_sample = 0;
    loop {
        let now = clock.elapsed_ms();
        if now >= next_sample {
            let t = now as f64;
            let s = drop.position(t);
            let pos = toss.position(t);
            let (dx, dy) = screen_pos(SCREEN_WIDTH / 2.0, s);
            let (tx, ty) = screen_pos(pos.x, pos.y);
            log::info!("t={now} drop=({dx},{dy}) toss=({tx},{ty})");
            next_sample = now + TRACE_INTERVAL_MS;
        }
        if now >= horizon_ms {
            break;
        }
        thread::sleep(Duration::from_millis(16));
    }

    ExitCode::SUCCESS
}
