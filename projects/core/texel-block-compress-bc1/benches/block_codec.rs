use criterion::{black_box, criterion_group, criterion_main, Criterion};
use texel_block_compress_bc1::{decode_block, encode_block};
use texel_block_compress_common::Rgba;

fn gradient_block() -> [Rgba; 16] {
    let mut px = [Rgba::default(); 16];
    for (i, p) in px.iter_mut().enumerate() {
        *p = Rgba::new((i * 16) as u8, 255 - (i * 16) as u8, 128, 255);
    }
    px
}

fn bench_encode(c: &mut Criterion) {
    let pixels = gradient_block();
    c.bench_function("bc1_encode_block", |b| b.iter(|| encode_block(black_box(&pixels), 0)));
}

fn bench_decode(c: &mut Criterion) {
    let pixels = gradient_block();
    let block = encode_block(&pixels, 0);
    c.bench_function("bc1_decode_block", |b| b.iter(|| decode_block(black_box(&block))));
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
