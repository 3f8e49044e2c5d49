//! Room-type labels and prompt composition for the design generator.
//!
//! Room types arrive as URL-friendly keys (`living-room`) from the upload
//! form. The generator works better with a human label ("Living Room") and a
//! fixed style suffix appended to whatever the user typed.

use log::warn;

/// Known room keys and their display labels.
pub const ROOM_TYPES: &[(&str, &str)] = &[
    ("living-room", "Living Room"),
    ("bedroom", "Bedroom"),
    ("dining-room", "Dining Room"),
    ("kitchen", "Kitchen"),
    ("bathroom", "Bathroom"),
    ("office", "Office"),
    ("outdoor", "Outdoor Space"),
];

/// Style guidance appended to every prompt.
pub const PROMPT_SUFFIX: &str =
    "Professional interior design, high quality, realistic lighting, modern aesthetic";

/// Iterate `(key, label)` pairs in display order.
pub fn room_types() -> impl Iterator<Item = (&'static str, &'static str)> {
    ROOM_TYPES.iter().copied()
}

/// Display label for a room key. Unknown keys pass through unchanged.
pub fn lookup_label(room_key: &str) -> &str {
    ROOM_TYPES
        .iter()
        .find(|(key, _)| *key == room_key)
        .map(|(_, label)| *label)
        .unwrap_or(room_key)
}

pub fn is_known_room_type(room_key: &str) -> bool {
    ROOM_TYPES.iter().any(|(key, _)| *key == room_key)
}

/// Combine the user's text, the room label, and the style suffix.
///
/// ```
/// # use roomprep::prompt::compose_prompt;
/// assert_eq!(
///     compose_prompt("Warm wood tones", "office"),
///     "Warm wood tones. Office interior design. \
///      Professional interior design, high quality, realistic lighting, modern aesthetic."
/// );
/// ```
pub fn compose_prompt(user_text: &str, room_key: &str) -> String {
    if !is_known_room_type(room_key) {
        warn!("unknown room type {room_key:?}, using it as the label");
    }
    format!(
        "{user_text}. {} interior design. {PROMPT_SUFFIX}.",
        lookup_label(room_key)
    )
}
