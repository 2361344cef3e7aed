//! Tests for the tag index - ordering and file rendering.

use ahk_tags::{HEADERS, TagEntry, TagExtractor, TagIndex, TagKind};

fn entry_lines(index: &TagIndex) -> Vec<String> {
    index
        .serialize()
        .lines()
        .skip(HEADERS.len())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_round_trip_single_function() {
    let mut index = TagIndex::new();
    index.append(TagExtractor::extract("./lib.ahk", "DoThing() {", [TagKind::Function]));

    assert_eq!(
        entry_lines(&index),
        ["DoThing\tlib.ahk\t/^DoThing() {$/;\"\tfunction\tline:1"]
    );
}

#[test]
fn test_headers_come_first() {
    let mut index = TagIndex::new();
    index.append([TagEntry::new("a", "a.ahk", "/^a:$/", TagKind::Label, 1)]);

    let text = index.serialize();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEADERS.len() + 1);
    assert!(lines[..HEADERS.len()].iter().all(|l| l.starts_with("!_TAG_")));
    assert_eq!(lines[1], "!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted, 2=foldcase/");
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_sorted_regardless_of_append_order() {
    let a = TagExtractor::extract("a.ahk", "zeta:\nAlpha() {\n}\n", TagKind::ALL).collect::<Vec<_>>();
    let b = TagExtractor::extract("b.ahk", "beta:\n_init:\nMid() {\n}\n", TagKind::ALL)
        .collect::<Vec<_>>();

    let mut forward = TagIndex::new();
    forward.append(a.clone());
    forward.append(b.clone());

    let mut backward = TagIndex::new();
    backward.append(b);
    backward.append(a);

    let names: Vec<String> = entry_lines(&forward)
        .iter()
        .map(|l| l.split('\t').next().unwrap_or_default().to_string())
        .collect();
    // Byte order: uppercase < underscore < lowercase.
    assert_eq!(names, ["Alpha", "Mid", "_init", "beta", "zeta"]);
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(entry_lines(&forward), entry_lines(&backward));
}

#[test]
fn test_duplicates_are_kept() {
    let mut index = TagIndex::new();
    index.append(TagExtractor::extract("a.ahk", "Go:\nGo:\n", [TagKind::Label]));
    index.append(TagExtractor::extract("b.ahk", "Go:\n", [TagKind::Label]));

    assert_eq!(index.len(), 3);
    assert_eq!(
        entry_lines(&index),
        [
            "Go\ta.ahk\t/^Go:$/;\"\tlabel\tline:1",
            "Go\ta.ahk\t/^Go:$/;\"\tlabel\tline:2",
            "Go\tb.ahk\t/^Go:$/;\"\tlabel\tline:1",
        ]
    );
}

#[test]
fn test_display_matches_serialize() {
    let mut index = TagIndex::new();
    index.extend(TagExtractor::extract("a.ahk", "x := 1\n", [TagKind::Variable]));
    assert_eq!(index.to_string(), index.serialize());
}
