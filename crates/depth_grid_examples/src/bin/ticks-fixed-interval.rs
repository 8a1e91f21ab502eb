use depth_grid::prelude::*;
use depth_grid_examples::{display_table, init_tracing, Room, SyntheticSession};
use tracing::{debug, info};

const FPS: f64 = 60.0;
const SECONDS: f64 = 5.0;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let room = Room::new(FrameDimensions::new(1280, 720)).with_wall_distance(4.5);
    let session = SyntheticSession::new(room, 7)
        .with_warmup(2)
        .with_tracking_loss(0.25)
        .with_depth_noise(0.05);

    let config = SamplerConfig::default().with_percent_of_view(0.03);
    let mut sampler = AreaSampler::try_new(config)?;
    let mut timer = FixedInterval::try_new(0.5)?;

    // Forward sampler events to the log.
    let mut sink = FnSink::new(|event| match event {
        SamplerEvent::GridInitialized { grid } => info!("{}", grid.describe()),
        SamplerEvent::TickDropped { now, center_distance, .. } => {
            info!("Tick at {now:.2}s dropped (center: {center_distance:?}).")
        }
        SamplerEvent::TickRendered { now, published, .. } => {
            info!("Tick at {now:.2}s published {published} regions.")
        }
        other => debug!("{other:?}"),
    });

    // The render loop runs every frame, the timer decides when to sample.
    for i in 0..(FPS * SECONDS) as u32 {
        let now = i as f64 / FPS;
        if timer.poll(now) {
            sampler.on_tick_with_events(&session, now, &mut sink);
        }
    }

    let state = sampler.state();
    info!(
        "Rendered: {} | dropped: {} | last interval: {:?}.",
        state.rendered_ticks, state.dropped_ticks, state.last_tick_interval
    );
    println!("{}", display_table(sampler.display(), sampler.config().grid.cols as usize));
    if let Some(center) = sampler.display().center() {
        println!("{center}");
    }

    Ok(())
}
