use emosent_data::{EmojiRecord, EmojiTable};

/// Builds a record whose neutral share fills the remainder to one.
pub(crate) fn record(
    char: &str,
    occurrences: u32,
    position: f64,
    negative: f64,
    positive: f64,
) -> EmojiRecord {
    let neutral = 1.0 - negative - positive;
    EmojiRecord::new(
        char,
        format!("EMOJI {char}"),
        f64::from(occurrences),
        position,
        negative,
        neutral,
        positive,
    )
}

/// One clearly positive and one clearly negative popular emoji.
pub(crate) fn scenario_table() -> EmojiTable {
    [
        record("😀", 600, 0.7, 0.1, 0.7),
        record("😡", 600, 0.2, 0.8, 0.1),
    ]
    .into_iter()
    .collect()
}
