//! Key names used in the configuration file.
//!
//! Bindings are stored as readable names (`W`, `ENTER`, `F5`) rather than raw
//! key codes. Lookup is case-insensitive.

use raylib::prelude::KeyboardKey;

const KEY_NAMES: &[(&str, KeyboardKey)] = &[
    ("A", KeyboardKey::KEY_A),
    ("B", KeyboardKey::KEY_B),
    ("C", KeyboardKey::KEY_C),
    ("D", KeyboardKey::KEY_D),
    ("E", KeyboardKey::KEY_E),
    ("F", KeyboardKey::KEY_F),
    ("G", KeyboardKey::KEY_G),
    ("H", KeyboardKey::KEY_H),
    ("I", KeyboardKey::KEY_I),
    ("J", KeyboardKey::KEY_J),
    ("K", KeyboardKey::KEY_K),
    ("L", KeyboardKey::KEY_L),
    ("M", KeyboardKey::KEY_M),
    ("N", KeyboardKey::KEY_N),
    ("O", KeyboardKey::KEY_O),
    ("P", KeyboardKey::KEY_P),
    ("Q", KeyboardKey::KEY_Q),
    ("R", KeyboardKey::KEY_R),
    ("S", KeyboardKey::KEY_S),
    ("T", KeyboardKey::KEY_T),
    ("U", KeyboardKey::KEY_U),
    ("V", KeyboardKey::KEY_V),
    ("W", KeyboardKey::KEY_W),
    ("X", KeyboardKey::KEY_X),
    ("Y", KeyboardKey::KEY_Y),
    ("Z", KeyboardKey::KEY_Z),
    ("0", KeyboardKey::KEY_ZERO),
    ("1", KeyboardKey::KEY_ONE),
    ("2", KeyboardKey::KEY_TWO),
    ("3", KeyboardKey::KEY_THREE),
    ("4", KeyboardKey::KEY_FOUR),
    ("5", KeyboardKey::KEY_FIVE),
    ("6", KeyboardKey::KEY_SIX),
    ("7", KeyboardKey::KEY_SEVEN),
    ("8", KeyboardKey::KEY_EIGHT),
    ("9", KeyboardKey::KEY_NINE),
    ("UP", KeyboardKey::KEY_UP),
    ("DOWN", KeyboardKey::KEY_DOWN),
    ("LEFT", KeyboardKey::KEY_LEFT),
    ("RIGHT", KeyboardKey::KEY_RIGHT),
    ("ENTER", KeyboardKey::KEY_ENTER),
    ("ESCAPE", KeyboardKey::KEY_ESCAPE),
    ("SPACE", KeyboardKey::KEY_SPACE),
    ("TAB", KeyboardKey::KEY_TAB),
    ("BACKSPACE", KeyboardKey::KEY_BACKSPACE),
    ("LEFT_SHIFT", KeyboardKey::KEY_LEFT_SHIFT),
    ("RIGHT_SHIFT", KeyboardKey::KEY_RIGHT_SHIFT),
    ("LEFT_CONTROL", KeyboardKey::KEY_LEFT_CONTROL),
    ("RIGHT_CONTROL", KeyboardKey::KEY_RIGHT_CONTROL),
    ("F1", KeyboardKey::KEY_F1),
    ("F2", KeyboardKey::KEY_F2),
    ("F3", KeyboardKey::KEY_F3),
    ("F4", KeyboardKey::KEY_F4),
    ("F5", KeyboardKey::KEY_F5),
    ("F6", KeyboardKey::KEY_F6),
    ("F7", KeyboardKey::KEY_F7),
    ("F8", KeyboardKey::KEY_F8),
    ("F9", KeyboardKey::KEY_F9),
    ("F10", KeyboardKey::KEY_F10),
    ("F11", KeyboardKey::KEY_F11),
    ("F12", KeyboardKey::KEY_F12),
];

/// Parse a key name such as `"w"`, `"Enter"` or `"F3"`.
pub fn key_from_name(name: &str) -> Option<KeyboardKey> {
    let name = name.trim();
    KEY_NAMES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, key)| *key)
}

/// Canonical name of a key, if it is one of the bindable keys.
pub fn key_name(key: KeyboardKey) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(_, k)| *k == key)
        .map(|(name, _)| *name)
}
