//! Predefined XTTS-v2 speaker identities.

/// Female speakers, in display order.
pub const FEMALE_SPEAKERS: &[&str] = &[
    "Claribel Dervla",
    "Daisy Studious",
    "Gracie Wise",
    "Tammie Ema",
    "Alison Dietlinde",
    "Ana Florence",
    "Annmarie Nele",
    "Asya Anara",
    "Brenda Stern",
    "Gitta Nikolina",
    "Henriette Usha",
    "Sofia Hellen",
    "Tammy Grit",
    "Tanja Adelina",
    "Vjollca Johnnie",
];

/// Male speakers, in display order.
pub const MALE_SPEAKERS: &[&str] = &[
    "Andrew Chipper",
    "Badr Odhiambo",
    "Dionisio Schuyler",
    "Royston Min",
    "Viktor Eka",
    "Abrahan Mack",
    "Adde Michal",
    "Baldur Sanjin",
    "Craig Gutsy",
    "Damien Black",
    "Gilberto Mathias",
    "Ilkin Urbano",
    "Kazuhiko Atallah",
    "Ludvig Milivoj",
    "Suad Qasim",
    "Torcull Diarmuid",
    "Viktor Menelaos",
    "Zacharie Aimilios",
];

/// Speaker used when none is given or the given one is unknown.
///
/// Must be a member of [`MALE_SPEAKERS`] or [`FEMALE_SPEAKERS`].
pub const DEFAULT_SPEAKER: &str = "Damien Black";

/// Iterate over every known speaker, female voices first.
pub fn all_speakers() -> impl Iterator<Item = &'static str> {
    FEMALE_SPEAKERS.iter().chain(MALE_SPEAKERS.iter()).copied()
}

/// Look up a speaker by exact name.
pub fn find_speaker(name: &str) -> Option<&'static str> {
    all_speakers().find(|speaker| *speaker == name)
}

/// Outcome of mapping a requested speaker name onto the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerResolution {
    pub name: &'static str,
    /// True when the requested name was not in the catalog.
    pub substituted: bool,
}

/// Map a requested speaker name onto the catalog.
///
/// `None` resolves to [`DEFAULT_SPEAKER`] without counting as a substitution.
pub fn resolve_speaker(requested: Option<&str>) -> SpeakerResolution {
    match requested {
        None => SpeakerResolution {
            name: DEFAULT_SPEAKER,
            substituted: false,
        },
        Some(name) => match find_speaker(name) {
            Some(name) => SpeakerResolution {
                name,
                substituted: false,
            },
            None => SpeakerResolution {
                name: DEFAULT_SPEAKER,
                substituted: true,
            },
        },
    }
}
