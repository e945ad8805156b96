use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use lsbsteg_core::{CodecOptions, LsbCodec};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut secret_image =
            RgbaImage::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]));
        let secret: Vec<u8> = (0..16 * 1024).map(|i| i as u8).collect();
        LsbCodec::hide_bytes(&mut secret_image, &secret, &CodecOptions::default())
            .expect("Cannot hide secret");

        b.iter(|| {
            LsbCodec::unveil(&secret_image, &CodecOptions::default())
                .expect("Cannot unveil secret");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
