// Example: swapping the data source and keeping the centered element.
use recycler::{Directions, Lifecycle, Recycler, RecyclerOptions, ViewUnit, Viewport};

#[derive(Default)]
struct Tile {
    value: u32,
}

impl Lifecycle for Tile {}

impl ViewUnit<u32> for Tile {
    fn bind(&mut self, item: &u32, _index: usize) {
        self.value = *item;
    }

    fn width(&self) -> f32 {
        120.0
    }

    fn height(&self) -> f32 {
        120.0
    }
}

fn main() {
    let opts = RecyclerOptions::new()
        .with_viewport(Viewport::horizontal(600.0, 120.0))
        .with_factory(Tile::default);
    let mut r = Recycler::initiate(opts, (0..500u32).collect::<Vec<_>>(), 250)
        .expect("valid configuration");
    println!(
        "centered={:?} can_move_start={} can_move_end={}",
        r.centered_index(),
        r.can_move(Directions::START),
        r.can_move(Directions::END)
    );

    // Shrink the list: the window restarts at the old centered index, clamped to the new length.
    r.change_list((0..100u32).rev().collect(), None)
        .expect("no explicit start");
    println!(
        "after change: window={:?} centered={:?} can_move_end={}",
        r.window_indices().collect::<Vec<_>>(),
        r.centered_index(),
        r.can_move(Directions::END)
    );

    let err = r.change_list(Vec::new(), Some(3)).unwrap_err();
    println!("rejected: {err}");
}
