//! Coriolis Disc entry point
//!
//! Runs a headless session driven by the autopilot and prints the final
//! snapshot as JSON. Drawing is left to whatever host embeds the library.

use std::process::ExitCode;

use coriolis_disc::sim::{Hemisphere, SimEvent, SimState, Snapshot, tick};
use coriolis_disc::{Autopilot, FrameClock, SimConfig, Variant};

const USAGE: &str = "usage: coriolis-disc [--config PATH] [--variant NAME] \
                     [--hemisphere north|south] [--seed N] [--frames N]";

#[derive(Debug, PartialEq)]
struct Options {
    config: Option<String>,
    variant: Option<Variant>,
    hemisphere: Option<Hemisphere>,
    seed: u64,
    frames: u64,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        config: None,
        variant: None,
        hemisphere: None,
        seed: 42,
        frames: 600,
    };

    while let Some(arg) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--config" => options.config = Some(value()?),
            "--variant" => {
                let name = value()?;
                options.variant = match Variant::from_str(&name) {
                    Some(variant) => Some(variant),
                    None => return Err(format!("unknown variant {name}")),
                };
            }
            "--hemisphere" => {
                let name = value()?;
                options.hemisphere = match Hemisphere::from_str(&name) {
                    Some(hemisphere) => Some(hemisphere),
                    None => return Err(format!("unknown hemisphere {name}")),
                };
            }
            "--seed" => {
                options.seed = value()?.parse().map_err(|e| format!("bad seed: {e}"))?;
            }
            "--frames" => {
                options.frames = value()?
                    .parse()
                    .map_err(|e| format!("bad frame count: {e}"))?;
            }
            other => return Err(format!("unknown argument {other}")),
        }
    }
    Ok(options)
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(config: &mut SimConfig, options: &Options) {
    if let Some(variant) = options.variant {
        config.variant = variant;
    }
    if let Some(hemisphere) = options.hemisphere {
        config.hemisphere = hemisphere;
        if config.starting_hemisphere() != hemisphere {
            log::warn!(
                "{} variant is southern only, ignoring --hemisphere {}",
                config.variant.as_str(),
                hemisphere.as_str()
            );
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = match &options.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    apply_overrides(&mut config, &options);

    log::info!(
        "Coriolis Disc (headless) starting: variant={} hemisphere={} seed={} frames={}",
        config.variant.as_str(),
        config.starting_hemisphere().as_str(),
        options.seed,
        options.frames
    );

    let mut state = SimState::new(&config);
    let mut pilot = Autopilot::new(options.seed);
    let mut clock = FrameClock::new(config.frame_rate);

    let (mut spawned, mut rejected, mut exited, mut toggles) = (0u32, 0u32, 0u32, 0u32);
    // Feed the clock one nominal frame of wall time per iteration
    while state.frame < options.frames {
        for _ in 0..clock.advance(clock.frame_dt()) {
            let input = pilot.next_input(&state, &config);
            for event in tick(&mut state, &config, &input).events {
                match event {
                    SimEvent::Spawned { id, at } => {
                        spawned += 1;
                        log::info!("frame {}: particle {id} spawned at {at}", state.frame);
                    }
                    SimEvent::SpawnRejected { .. } => rejected += 1,
                    SimEvent::HemisphereToggled { now, .. } => {
                        toggles += 1;
                        log::info!("frame {}: hemisphere now {}", state.frame, now.as_str());
                    }
                    SimEvent::ParticleExited { id, at } => {
                        exited += 1;
                        log::info!("frame {}: particle {id} left the disc at {at}", state.frame);
                    }
                }
            }
            if state.frame >= options.frames {
                break;
            }
        }
    }

    log::info!(
        "Session done: {spawned} spawned, {rejected} rejected, {exited} exited, {toggles} toggles"
    );

    match serde_json::to_string_pretty(&Snapshot::capture(&state)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to encode snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
