use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use embedded_graphics::{
    Drawable,
    pixelcolor::BinaryColor,
    prelude::{Point, Primitive, Size},
    primitives::{Circle, PrimitiveStyle, Rectangle},
};
use st7565_core::{CArray, PageBuffer, Raster, Rgba};

const WIDTH: u32 = 128;
const HEIGHT: u32 = 64;

fn display_raster() -> Raster {
    let mut raster = Raster::filled(WIDTH, HEIGHT, Rgba::WHITE);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if (x ^ y) % 3 == 0 {
                raster.set_pixel(x, y, Rgba::new(0x30, 0x30, 0x30, 0xFF));
            }
        }
    }
    raster
}

fn bench_pack(c: &mut Criterion) {
    let raster = display_raster();

    c.bench_function("flip_128x64", |b| {
        b.iter(|| black_box(&raster).flip_vertical())
    });

    c.bench_function("pack_128x64", |b| {
        b.iter(|| PageBuffer::pack(black_box(&raster)).unwrap())
    });

    let bitmap = PageBuffer::pack(&raster).unwrap();
    c.bench_function("listing_128x64", |b| {
        b.iter(|| CArray::new("bench.png", black_box(&bitmap)).to_string())
    });
}

fn bench_draw(c: &mut Criterion) {
    c.bench_function("draw_128x64", |b| {
        b.iter(|| {
            let mut buffer = PageBuffer::new(WIDTH, HEIGHT).unwrap();
            Rectangle::new(Point::new(4, 4), Size::new(120, 56))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
                .draw(&mut buffer)
                .unwrap();
            Circle::new(Point::new(40, 8), 48)
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut buffer)
                .unwrap();
            black_box(buffer)
        })
    });
}

criterion_group!(benches, bench_pack, bench_draw);
criterion_main!(benches);
