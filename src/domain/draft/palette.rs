// src/domain/draft/palette.rs

/// Glyphs offered by the emoji picker.
pub const EMOJI_PALETTE: [&str; 20] = [
    "😀", "😂", "🤔", "👍", "👎", "❤️", "🔥", "✨", "🎉", "📚", "✅", "❌", "⚠️", "💡", "📝",
    "🧪", "🔬", "📊", "📈", "🎓",
];

pub fn is_palette_emoji(glyph: &str) -> bool {
    EMOJI_PALETTE.contains(&glyph)
}
