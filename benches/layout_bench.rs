use criterion::{Criterion, criterion_group, criterion_main};
use plot_rs::Plot;
use plot_rs::api::{DataRange, DataRanger, GlyphBoxer, Renderer};
use plot_rs::core::{Axis, DrawArea, GlyphBox, pad_horizontal, pad_vertical};
use plot_rs::render::{RecordingSurface, Surface};
use std::hint::black_box;

struct Scatter {
    glyphs: Vec<GlyphBox>,
}

impl Renderer for Scatter {
    fn plot(&self, surface: &mut dyn Surface, area: DrawArea, _: &Plot, _: &Axis, _: &Axis) {
        for glyph in &self.glyphs {
            surface.fill(&glyph.device_rect(area).path());
        }
    }

    fn glyph_boxer(&self) -> Option<&dyn GlyphBoxer> {
        Some(self)
    }

    fn data_ranger(&self) -> Option<&dyn DataRanger> {
        Some(self)
    }
}

impl GlyphBoxer for Scatter {
    fn glyph_boxes(&self, _: &Plot, _: &Axis, _: &Axis) -> Vec<GlyphBox> {
        self.glyphs.clone()
    }
}

impl DataRanger for Scatter {
    fn data_range(&self) -> DataRange {
        DataRange::new(0.0, 10_000.0, -1.0, 1.0)
    }
}

fn scatter_glyphs(count: usize) -> Vec<GlyphBox> {
    (0..count)
        .map(|i| {
            let x = i as f64 / (count - 1) as f64;
            let y = 0.5 + 0.5 * (x * 40.0).sin();
            GlyphBox::centered(x, y, 6.0, 6.0)
        })
        .collect()
}

fn bench_padding_10k(c: &mut Criterion) {
    let area = DrawArea::with_size(1920.0, 1080.0);
    let glyphs = scatter_glyphs(10_000);

    c.bench_function("padding_10k_glyphs", |b| {
        b.iter(|| {
            let padded = pad_horizontal(black_box(area), black_box(&glyphs), &[]);
            let _ = pad_vertical(padded, black_box(&glyphs), &[]);
        })
    });
}

fn bench_full_draw_pass(c: &mut Criterion) {
    let mut plot = Plot::new().expect("plot");
    plot.title_mut().text = "Benchmark".to_owned();
    plot.add(Scatter {
        glyphs: scatter_glyphs(1_000),
    });
    let area = DrawArea::with_size(1920.0, 1080.0);

    c.bench_function("draw_pass_1k_glyphs", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            plot.draw(&mut surface, black_box(area));
            black_box(surface.commands().len());
        })
    });
}

criterion_group!(benches, bench_padding_10k, bench_full_draw_pass);
criterion_main!(benches);
