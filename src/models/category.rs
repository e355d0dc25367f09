use serde::{Deserialize, Serialize};
use std::fmt;

/// Service category offered by a vendor
///
/// Free-form category strings coming from vendors and couples are folded onto
/// this set through [`Category::parse`]. Anything unrecognized lands in
/// [`Category::Other`], which keeps the normalized text so two different
/// unknown categories never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Venue,
    Catering,
    Photography,
    Videography,
    PhotoBooth,
    Florist,
    Decoration,
    LightsAndSound,
    Music,
    Host,
    HairAndMakeup,
    Attire,
    Jewelry,
    Cake,
    Invitations,
    Souvenirs,
    Planner,
    Officiant,
    Transportation,
    Accommodation,
    Parking,
    Rentals,
    /// Unrecognized category, holds the normalized input
    Other(String),
}

/// Normalized alias -> category
///
/// Keys are lowercase words joined without separators, `&` reads as `and`.
const ALIASES: &[(&str, Category)] = &[
    ("venue", Category::Venue),
    ("venues", Category::Venue),
    ("reception", Category::Venue),
    ("ceremonyvenue", Category::Venue),
    ("church", Category::Venue),
    ("catering", Category::Catering),
    ("caterer", Category::Catering),
    ("caterers", Category::Catering),
    ("food", Category::Catering),
    ("photography", Category::Photography),
    ("photographer", Category::Photography),
    ("photographers", Category::Photography),
    ("photo", Category::Photography),
    ("videography", Category::Videography),
    ("videographer", Category::Videography),
    ("videographers", Category::Videography),
    ("video", Category::Videography),
    ("film", Category::Videography),
    ("photobooth", Category::PhotoBooth),
    ("booth", Category::PhotoBooth),
    ("florist", Category::Florist),
    ("florists", Category::Florist),
    ("flowers", Category::Florist),
    ("floral", Category::Florist),
    ("decoration", Category::Decoration),
    ("decorations", Category::Decoration),
    ("decor", Category::Decoration),
    ("styling", Category::Decoration),
    ("stylist", Category::Decoration),
    ("lightsandsound", Category::LightsAndSound),
    ("lightsandsounds", Category::LightsAndSound),
    ("lights", Category::LightsAndSound),
    ("sound", Category::LightsAndSound),
    ("music", Category::Music),
    ("band", Category::Music),
    ("dj", Category::Music),
    ("entertainment", Category::Music),
    ("host", Category::Host),
    ("emcee", Category::Host),
    ("mc", Category::Host),
    ("hairandmakeup", Category::HairAndMakeup),
    ("makeup", Category::HairAndMakeup),
    ("hair", Category::HairAndMakeup),
    ("beauty", Category::HairAndMakeup),
    ("attire", Category::Attire),
    ("gown", Category::Attire),
    ("gowns", Category::Attire),
    ("dress", Category::Attire),
    ("suit", Category::Attire),
    ("suits", Category::Attire),
    ("barong", Category::Attire),
    ("jewelry", Category::Jewelry),
    ("rings", Category::Jewelry),
    ("cake", Category::Cake),
    ("cakes", Category::Cake),
    ("desserts", Category::Cake),
    ("pastry", Category::Cake),
    ("invitations", Category::Invitations),
    ("invitation", Category::Invitations),
    ("stationery", Category::Invitations),
    ("souvenirs", Category::Souvenirs),
    ("souvenir", Category::Souvenirs),
    ("favors", Category::Souvenirs),
    ("giveaways", Category::Souvenirs),
    ("planner", Category::Planner),
    ("planners", Category::Planner),
    ("planning", Category::Planner),
    ("coordinator", Category::Planner),
    ("coordination", Category::Planner),
    ("officiant", Category::Officiant),
    ("transportation", Category::Transportation),
    ("transport", Category::Transportation),
    ("bridalcar", Category::Transportation),
    ("accommodation", Category::Accommodation),
    ("accommodations", Category::Accommodation),
    ("hotel", Category::Accommodation),
    ("hotels", Category::Accommodation),
    ("suite", Category::Accommodation),
    ("lodging", Category::Accommodation),
    ("parking", Category::Parking),
    ("valet", Category::Parking),
    ("rentals", Category::Rentals),
    ("rental", Category::Rentals),
    ("equipment", Category::Rentals),
    ("chairs", Category::Rentals),
    ("tables", Category::Rentals),
    ("tents", Category::Rentals),
];

impl Category {
    /// Every named category, in declaration order
    pub const ALL: [Category; 22] = [
        Category::Venue,
        Category::Catering,
        Category::Photography,
        Category::Videography,
        Category::PhotoBooth,
        Category::Florist,
        Category::Decoration,
        Category::LightsAndSound,
        Category::Music,
        Category::Host,
        Category::HairAndMakeup,
        Category::Attire,
        Category::Jewelry,
        Category::Cake,
        Category::Invitations,
        Category::Souvenirs,
        Category::Planner,
        Category::Officiant,
        Category::Transportation,
        Category::Accommodation,
        Category::Parking,
        Category::Rentals,
    ];

    /// Parse a free-form category string
    ///
    /// Matching is case-insensitive and splits the input into words on anything
    /// that is not a letter or digit. The words joined together are tried as an
    /// exact alias first. Otherwise the longest alias spelled by a run of whole
    /// words wins, so `"Wedding Photography"` resolves to
    /// [`Category::Photography`] while `"Chairs and Tables"` never picks up
    /// `hair`.
    pub fn parse(raw: &str) -> Category {
        let words = words(raw);
        let normalized = words.concat();

        if let Some(category) = alias(&normalized) {
            return category;
        }

        let mut best: Option<(usize, Category)> = None;
        for start in 0..words.len() {
            let mut joined = String::new();
            for word in &words[start..] {
                joined.push_str(word);
                if let Some(category) = alias(&joined) {
                    if best.as_ref().map_or(true, |(len, _)| joined.len() > *len) {
                        best = Some((joined.len(), category));
                    }
                }
            }
        }

        best.map(|(_, category)| category)
            .unwrap_or(Category::Other(normalized))
    }

    /// Whether this is an unrecognized category
    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other(_))
    }

    /// Stable snake_case identifier, the normalized text for unknown categories
    pub fn id(&self) -> &str {
        match self {
            Category::Venue => "venue",
            Category::Catering => "catering",
            Category::Photography => "photography",
            Category::Videography => "videography",
            Category::PhotoBooth => "photo_booth",
            Category::Florist => "florist",
            Category::Decoration => "decoration",
            Category::LightsAndSound => "lights_and_sound",
            Category::Music => "music",
            Category::Host => "host",
            Category::HairAndMakeup => "hair_and_makeup",
            Category::Attire => "attire",
            Category::Jewelry => "jewelry",
            Category::Cake => "cake",
            Category::Invitations => "invitations",
            Category::Souvenirs => "souvenirs",
            Category::Planner => "planner",
            Category::Officiant => "officiant",
            Category::Transportation => "transportation",
            Category::Accommodation => "accommodation",
            Category::Parking => "parking",
            Category::Rentals => "rentals",
            Category::Other(key) if key.is_empty() => "other",
            Category::Other(key) => key.as_str(),
        }
    }

    /// Human-readable label used in match reasons
    pub fn label(&self) -> &str {
        match self {
            Category::Venue => "Venue",
            Category::Catering => "Catering",
            Category::Photography => "Photography",
            Category::Videography => "Videography",
            Category::PhotoBooth => "Photo Booth",
            Category::Florist => "Florist",
            Category::Decoration => "Decoration",
            Category::LightsAndSound => "Lights & Sound",
            Category::Music => "Music",
            Category::Host => "Host",
            Category::HairAndMakeup => "Hair & Makeup",
            Category::Attire => "Attire",
            Category::Jewelry => "Jewelry",
            Category::Cake => "Cake",
            Category::Invitations => "Invitations",
            Category::Souvenirs => "Souvenirs",
            Category::Planner => "Planner",
            Category::Officiant => "Officiant",
            Category::Transportation => "Transportation",
            Category::Accommodation => "Accommodation",
            Category::Parking => "Parking",
            Category::Rentals => "Rentals",
            Category::Other(key) if key.is_empty() => "Other",
            Category::Other(key) => key.as_str(),
        }
    }
}

fn alias(normalized: &str) -> Option<Category> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, category)| category.clone())
}

/// Lowercase words, `&` spelled out as `and`
fn words(raw: &str) -> Vec<String> {
    raw.replace('&', " and ")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse(&raw)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::parse(raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(key) if !key.is_empty() => key,
            other => other.id().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
