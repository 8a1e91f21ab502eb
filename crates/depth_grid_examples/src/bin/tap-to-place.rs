use depth_grid::prelude::*;
use depth_grid_examples::{init_tracing, Room, SyntheticSession};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let room = Room::new(FrameDimensions::new(640, 480)).with_pitch_degrees(30.0);
    let session = SyntheticSession::new(room, 11);
    let mut sampler = AreaSampler::default();

    let taps = [(320, 240), (100, 400), (600, 300), (320, 10)];

    // Taps before the model has loaded are ignored.
    let frame = session.clean_frame();
    if let Some(hit) = frame.hit_test(320, 240).first() {
        if sampler.on_tap(hit).is_none() {
            info!("Model not loaded yet; tap ignored.");
        }
    }

    sampler.set_model_ready(true);
    let mut anchors = Vec::new();
    for (x, y) in taps {
        let Some(hit) = frame.hit_test(x, y).into_iter().next() else {
            warn!("Tap at ({x}, {y}) hit no surface.");
            continue;
        };
        if let Some(placement) = sampler.on_tap(&hit) {
            println!("Tap at ({x}, {y}):\n{}\n", sampler.display().debug());
            anchors.push(placement.anchor);
        }
    }

    info!("Placed {} anchors.", anchors.len());
    Ok(())
}
