/// Consoles offered for selection, in display order.
pub const CONSOLE_CATALOG: &[&str] = &[
    "Atari 2600",
    "Nintendo Entertainment System (NES)",
    "Super Nintendo Entertainment System (SNES)",
    "Nintendo 64",
    "Sega Genesis",
    "Sega Saturn",
    "Sega Dreamcast",
    "Sony PlayStation",
    "Sony PlayStation 2",
    "Nintendo GameCube",
    "Nintendo Wii",
    "Xbox",
    "Xbox 360",
    "Nintendo Game Boy (GBC)",
    "Nintendo Game Boy Advance",
    "Nintendo DS",
    "Nintendo 3DS",
    "PlayStation Portable (PSP)",
    "PlayStation Vita",
    "Atari Lynx",
    "Neo Geo Pocket",
    "TurboGrafx-16 Portable",
];

pub fn is_known_console(name: &str) -> bool {
    CONSOLE_CATALOG.contains(&name)
}

/// Case-insensitive lookup returning the catalog spelling.
pub fn find_console(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    CONSOLE_CATALOG
        .iter()
        .copied()
        .find(|console| console.eq_ignore_ascii_case(needle))
}
