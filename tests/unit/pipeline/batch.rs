use super::*;

use crate::{filters::sharpen::BorderPolicy, pipeline::kind::FilterKind};

fn buffers(n: u8) -> Vec<PixelBuffer> {
    (0..n)
        .map(|i| {
            let mut buf = PixelBuffer::filled(4, 4, [i * 20, 255 - i * 15, i * 7, 255]).unwrap();
            buf.put_pixel(1, 2, [255, i, 0, 200]).unwrap();
            buf
        })
        .collect()
}

fn chain() -> FilterChain {
    FilterChain::new(BorderPolicy::CopySource)
        .push(FilterKind::Sepia)
        .push(FilterKind::Sharpen { amount: 1.25 })
}

#[test]
fn batch_matches_sequential_and_keeps_order() {
    let chain = chain();
    let expected: Vec<PixelBuffer> = buffers(9)
        .into_iter()
        .map(|b| chain.apply(b).unwrap())
        .collect();

    let out = apply_batch(buffers(9), &chain, &BatchOpts { threads: Some(3) }).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn empty_batch_is_ok() {
    let out = apply_batch(Vec::new(), &chain(), &BatchOpts::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn zero_threads_is_rejected() {
    let err = apply_batch(buffers(1), &chain(), &BatchOpts { threads: Some(0) }).unwrap_err();
    assert!(matches!(err, FilterError::InvalidParameter(_)));
}

#[test]
fn failing_chain_fails_batch() {
    let bad = FilterChain::default().push(FilterKind::Sharpen { amount: -3.0 });
    assert!(apply_batch(buffers(4), &bad, &BatchOpts::default()).is_err());
}
