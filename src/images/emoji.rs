//! Built-in emoji fallback table, keyed by lowercase English words.

const EMOJI_TABLE: &[(&str, &str)] = &[
    ("apple", "🍎"),
    ("banana", "🍌"),
    ("book", "📖"),
    ("bread", "🍞"),
    ("car", "🚗"),
    ("cat", "🐱"),
    ("coffee", "☕"),
    ("dog", "🐶"),
    ("family", "👪"),
    ("fish", "🐟"),
    ("flower", "🌸"),
    ("friend", "🤝"),
    ("goodbye", "👋"),
    ("hello", "👋"),
    ("home", "🏠"),
    ("house", "🏠"),
    ("love", "❤️"),
    ("milk", "🥛"),
    ("moon", "🌙"),
    ("music", "🎵"),
    ("night", "🌃"),
    ("no", "🙅"),
    ("rain", "🌧️"),
    ("rice", "🍚"),
    ("school", "🏫"),
    ("sleep", "😴"),
    ("snow", "❄️"),
    ("sun", "☀️"),
    ("tea", "🍵"),
    ("thank", "🙏"),
    ("thanks", "🙏"),
    ("train", "🚆"),
    ("tree", "🌳"),
    ("water", "💧"),
    ("yes", "👍"),
];

/// Emoji for a lookup key, if the table has one.
pub fn emoji_for(key: &str) -> Option<&'static str> {
    EMOJI_TABLE
        .binary_search_by(|(word, _)| (*word).cmp(key))
        .ok()
        .map(|i| EMOJI_TABLE[i].1)
}
