mod common;

use aseprite_tags::{dedup_structured, dedup_summary, extract, extract_tags, Direction, Rgb};
use common::*;
use proptest::prelude::*;

fn arb_tag() -> impl Strategy<Value = (String, u16, u16, u8, [u8; 3])> {
    ("[a-zA-Z ]{0,12}", any::<u16>(), any::<u16>(), 0u8..6, any::<[u8; 3]>())
}

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(
        body in proptest::collection::vec(any::<u8>(), 0..512),
        frames in any::<u16>(),
    ) {
        let mut data = vec![0u8; 128];
        data[4..6].copy_from_slice(&0xA5E0u16.to_le_bytes());
        data[6..8].copy_from_slice(&frames.to_le_bytes());
        data.extend_from_slice(&body);

        let first = extract(&data);
        prop_assert!(first.bytes_consumed <= first.total_bytes);
        prop_assert_eq!(first, extract(&data));
    }

    #[test]
    fn generated_tags_come_back_in_order(tags in proptest::collection::vec(arb_tag(), 0..8)) {
        let records: Vec<Tag> = tags
            .iter()
            .map(|(name, from, to, dir, rgb)| tag(name, *from, *to, *dir, *rgb))
            .collect();
        let doc = document(&[frame(&[chunk(TAGS, &tags_payload(&records))], Count::Modern)]);
        let decoded = extract_tags(&doc);

        prop_assert_eq!(decoded.len(), tags.len());
        for (got, (name, from, to, dir, rgb)) in decoded.iter().zip(&tags) {
            prop_assert_eq!(&got.name, name);
            prop_assert_eq!(got.from, *from);
            prop_assert_eq!(got.to, *to);
            prop_assert_eq!(got.direction, Direction::from(*dir));
            prop_assert_eq!(got.color, Rgb(rgb[0], rgb[1], rgb[2]));
        }
    }

    #[test]
    fn truncated_prefix_is_prefix_of_full(
        tags in proptest::collection::vec(arb_tag(), 1..6),
        frames in 1usize..4,
        cut_ratio in 0.0f64..1.0,
    ) {
        let records: Vec<Tag> = tags
            .iter()
            .map(|(name, from, to, dir, rgb)| tag(name, *from, *to, *dir, *rgb))
            .collect();
        let one = frame(&[chunk(LAYER, &[7; 5]), chunk(TAGS, &tags_payload(&records))], Count::Legacy);
        let doc = document(&vec![one; frames]);
        let full = extract_tags(&doc);
        let cut = (doc.len() as f64 * cut_ratio) as usize;
        let partial = extract_tags(&doc[..cut]);
        prop_assert!(full.starts_with(&partial));
    }

    #[test]
    fn dedup_is_idempotent(tags in proptest::collection::vec(arb_tag(), 0..16)) {
        let records: Vec<Tag> = tags
            .iter()
            .map(|(name, from, to, dir, rgb)| tag(name, *from, *to, *dir, *rgb))
            .collect();
        let doc = document(&[frame(&[chunk(TAGS, &tags_payload(&records))], Count::Modern)]);
        let decoded = extract_tags(&doc);

        let once = dedup_structured(decoded.clone());
        prop_assert_eq!(dedup_structured(once.clone()), once.clone());
        let summary = dedup_summary(decoded);
        prop_assert_eq!(dedup_summary(summary.clone()), summary.clone());
        prop_assert!(summary.len() <= once.len());
    }
}
