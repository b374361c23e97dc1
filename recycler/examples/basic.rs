// Example: a long vertical list rendered by a handful of pooled rows.
use recycler::{Lifecycle, Navigation, Recycler, RecyclerOptions, ViewUnit, Viewport};

#[derive(Default)]
struct Row {
    text: String,
    y: f32,
}

impl Lifecycle for Row {}

impl ViewUnit<String> for Row {
    fn bind(&mut self, item: &String, _index: usize) {
        self.text.clone_from(item);
    }

    fn width(&self) -> f32 {
        320.0
    }

    fn height(&self) -> f32 {
        40.0
    }

    fn place(&mut self, position: f32) {
        self.y = position;
    }
}

fn main() {
    let data: Vec<String> = (0..100_000).map(|i| format!("row #{i}")).collect();
    let opts = RecyclerOptions::new()
        .with_viewport(Viewport::vertical(320.0, 400.0))
        .with_factory(Row::default)
        .with_spacing(8.0);
    let mut r = Recycler::initiate(opts, data, 0).expect("valid configuration");

    println!("len={} created={}", r.data().len(), r.pool().created());

    let mut offset = 0.0;
    for _ in 0..1_000 {
        offset = r.on_scroll(offset + 24.0);
    }
    println!(
        "offset={offset} window={:?} created={}",
        r.window_indices().collect::<Vec<_>>(),
        r.pool().created()
    );
    r.for_each_active(|s| println!("  y={:>8.1} {}", s.unit().y, s.unit().text));

    let target = r
        .move_to_index(50_000, Navigation::total(300), 0)
        .expect("index in range");
    let mut now = 0;
    while r.tick(now).is_some() {
        now += 16;
    }
    println!(
        "navigated: target={target} centered={:?}",
        r.centered_index()
    );
}
