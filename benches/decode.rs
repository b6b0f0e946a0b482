#![feature(test)]

use dlbuf::{CodecConfig, Decode, DoubleBuffer, StringBuffer, WireOrder, deserialize, serialize};
use test::Bencher;

extern crate test;

const NUM_VALUES: usize = 1 << 16;

fn sample() -> DoubleBuffer {
    (0..NUM_VALUES).map(|i| (i as f64).sin()).collect()
}

#[bench]
fn deserialize_doubles(bencher: &mut Bencher) {
    let bytes = serialize(&sample());

    bencher.iter(|| {
        deserialize(&bytes).unwrap();
    });
}

#[bench]
fn deserialize_doubles_big_endian(bencher: &mut Bencher) {
    let config = CodecConfig::new(WireOrder::Big);
    let bytes = dlbuf::serialize_with(&sample(), &config);

    bencher.iter(|| {
        dlbuf::deserialize_with(&bytes, &config).unwrap();
    });
}

#[bench]
fn decode_strings(bencher: &mut Bencher) {
    use dlbuf::Encode;

    let strings: StringBuffer = (0..NUM_VALUES / 16).map(|i| format!("row-{i}")).collect();
    let bytes = strings.encode(WireOrder::Little).unwrap();

    bencher.iter(|| {
        StringBuffer::decode(&bytes, WireOrder::Little).unwrap();
    });
}
