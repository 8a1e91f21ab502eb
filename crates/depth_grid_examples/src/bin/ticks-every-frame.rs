use depth_grid::prelude::*;
use depth_grid_examples::{
    display_table, init_tracing, render_overlay_to_png, OverlayStyle, Room, SyntheticSession,
};
use tracing::info;

const FPS: f64 = 60.0;
const SECONDS: f64 = 3.0;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Session needs a handful of frames before it knows the camera resolution,
    // then loses tracking now and then.
    let room = Room::new(FrameDimensions::new(640, 480));
    let session = SyntheticSession::new(room, 2025)
        .with_warmup(5)
        .with_tracking_loss(0.1)
        .with_depth_noise(0.02);

    let mut sampler = AreaSampler::try_new(SamplerConfig::default())?;
    let mut source = EveryFrame;

    let mut last = None;
    let frames = (FPS * SECONDS) as u32;
    for i in 0..frames {
        let now = i as f64 / FPS;
        if let Some(report) = sampler.drive(&mut source, &session, now) {
            if report.status != TickStatus::SessionUnavailable {
                last = Some(report);
            }
        }
    }

    let state = sampler.state();
    info!(
        "Frames: {} | rendered: {} | dropped: {} | max interval: {:.4}s.",
        frames, state.rendered_ticks, state.dropped_ticks, state.max_tick_interval
    );
    println!("{}", sampler.display().debug());
    println!("{}", display_table(sampler.display(), sampler.config().grid.cols as usize));

    if let (Some(grid), Some(report)) = (sampler.grid(), last) {
        render_overlay_to_png(
            &session.clean_frame(),
            grid,
            &report.samples,
            &OverlayStyle::default(),
            "ticks-every-frame.png",
        )?;
    }

    Ok(())
}
