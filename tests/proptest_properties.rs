use pixel_pack::{
    Canvas, CodecError, Config, XorKey,
    autocrop::autocrop,
    canvas::pixel_value,
    chunk::split,
    constants::PAYLOAD_OFFSET,
    decode, encode,
    pipeline::{decode_stream, encode_stream},
    xor,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        payload in proptest::collection::vec(any::<u8>(), 0..2048),
        name in "[a-zA-Z0-9_. -]{0,64}",
        width in proptest::option::of(1u32..400),
    ) {
        let canvas = encode(&payload, &name, width).unwrap();
        let decoded = decode(&canvas).unwrap();
        prop_assert_eq!(decoded.payload, payload);
        prop_assert_eq!(decoded.name, name);
    }

    #[test]
    fn prop_flipped_payload_byte_is_detected(
        payload in proptest::collection::vec(any::<u8>(), 1..1024),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut canvas = encode(&payload, "x", None).unwrap();
        let index = index.index(payload.len());
        let position = PAYLOAD_OFFSET + index / 3;
        let mut rgb = canvas.rgb(position);
        rgb[index % 3] ^= flip;
        canvas.set(position, pixel_value(rgb));

        let is_checksum_mismatch = matches!(decode(&canvas), Err(CodecError::ChecksumMismatch { .. }));
        prop_assert!(is_checksum_mismatch);
    }

    #[test]
    fn prop_xor_is_an_involution(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        key in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let once = xor::apply(&data, &key);
        prop_assert_eq!(xor::apply(&once, &key), data.clone());
        prop_assert_eq!(xor::apply(&data, &[]), data);
    }

    #[test]
    fn prop_autocrop_recovers_embedded_canvas(
        payload in proptest::collection::vec(any::<u8>(), 0..600),
        px in 0u32..60,
        py in 0u32..20,
        extra_w in 0u32..60,
        extra_h in 0u32..20,
        width in proptest::option::of(Just(128u32)),
    ) {
        let canvas = encode(&payload, "embedded", width).unwrap();
        let mut outer = Canvas::filled(
            canvas.width() + px + extra_w,
            canvas.height() + py + extra_h,
            [12, 34, 56],
        );
        outer.paste(&canvas, px, py);

        let decoded = decode(&autocrop(&outer).unwrap()).unwrap();
        prop_assert_eq!(decoded.payload, payload);
        prop_assert_eq!(decoded.name, "embedded");
    }

    #[test]
    fn prop_split_preserves_order_and_bounds(
        data in proptest::collection::vec(any::<u8>(), 0..4096),
        max in 1usize..1024,
    ) {
        let chunks = split(&data, max);
        prop_assert!(chunks.iter().all(|chunk| chunk.len() <= max));
        prop_assert!(chunks.iter().rev().skip(1).all(|chunk| chunk.len() == max));
        prop_assert_eq!(chunks.concat(), data);
    }

    #[test]
    fn prop_stream_roundtrip_with_key(
        data in proptest::collection::vec(any::<u8>(), 0..3000),
        split_size in 1usize..1500,
        key in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let config = Config {
            split_size: Some(split_size),
            key: XorKey::Bytes(key),
            ..Config::default()
        };
        let canvases = encode_stream(&data, "stream", &config).unwrap();
        prop_assert_eq!(canvases.len(), data.len().div_ceil(split_size).max(1));

        let decoded = decode_stream(&canvases, &config).unwrap();
        prop_assert_eq!(decoded.payload, data);
    }
}
