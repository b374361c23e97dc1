use recycler::{Lifecycle, MovementMode, RecyclerOptions, ViewUnit, Viewport};
use recycler_adapter::Controller;

#[derive(Default)]
struct Card;

impl Lifecycle for Card {}

impl ViewUnit<&'static str> for Card {
    fn bind(&mut self, _item: &&'static str, _index: usize) {}

    fn width(&self) -> f32 {
        200.0
    }

    fn height(&self) -> f32 {
        80.0
    }
}

fn main() {
    // Example: a frame-driven controller for a UI without a native scroll container.
    //
    // An adapter would:
    // - forward pointer drags (rubber-banded past the edges in elastic mode)
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to its content and place units at their positions
    let data = vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
    let opts = RecyclerOptions::new()
        .with_viewport(Viewport::vertical(200.0, 240.0))
        .with_factory(|| Card)
        .with_movement(MovementMode::Elastic)
        .with_centralize_on_stop(true);
    let mut c = Controller::new(opts, data, 0).expect("valid configuration");

    // Pull past the top edge.
    c.begin_drag(0);
    for step in 1..=5 {
        let shown = c.drag(-20.0, step * 16);
        println!("drag: shown={shown:.2}");
    }
    c.end_drag(80);

    let mut now_ms = 80u64;
    while now_ms < 2_000 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            println!("t={now_ms} off={off:.2}");
        }
    }

    println!(
        "done: off={} centered={:?}",
        c.recycler().content_offset(),
        c.recycler().centered_index()
    );
}
