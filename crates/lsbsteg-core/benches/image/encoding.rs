use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use lsbsteg_core::{CodecOptions, LsbCodec};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image =
            RgbaImage::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]));
        let secret: Vec<u8> = (0..16 * 1024).map(|i| i as u8).collect();

        b.iter(|| {
            LsbCodec::hide_bytes(&mut plain_image, &secret, &CodecOptions::default())
                .expect("Cannot hide secret");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
