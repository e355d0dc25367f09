use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Same-family categories, e.g. photography and videography
const RELATED: &[(Category, &[Category])] = &[
    (Category::Venue, &[Category::Rentals]),
    (Category::Catering, &[Category::Cake]),
    (Category::Photography, &[Category::Videography, Category::PhotoBooth]),
    (Category::Videography, &[Category::Photography, Category::PhotoBooth]),
    (Category::PhotoBooth, &[Category::Photography, Category::Videography]),
    (Category::Florist, &[Category::Decoration]),
    (Category::Decoration, &[Category::Florist, Category::LightsAndSound]),
    (Category::LightsAndSound, &[Category::Music, Category::Decoration]),
    (Category::Music, &[Category::Host, Category::LightsAndSound]),
    (Category::Host, &[Category::Music]),
    (Category::HairAndMakeup, &[Category::Attire]),
    (Category::Attire, &[Category::HairAndMakeup, Category::Jewelry]),
    (Category::Jewelry, &[Category::Attire]),
    (Category::Cake, &[Category::Catering]),
    (Category::Invitations, &[Category::Souvenirs]),
    (Category::Souvenirs, &[Category::Invitations]),
    (Category::Planner, &[Category::Officiant]),
    (Category::Officiant, &[Category::Planner]),
    (Category::Transportation, &[Category::Parking]),
    (Category::Rentals, &[Category::Venue]),
];

/// Categories often booked together with a category
const COMPLEMENTARY: &[(Category, &[Category])] = &[
    (Category::Venue, &[Category::Transportation, Category::Accommodation, Category::Parking]),
    (Category::Catering, &[Category::Rentals, Category::Decoration]),
    (Category::Photography, &[Category::HairAndMakeup, Category::Attire]),
    (Category::Videography, &[Category::Music, Category::LightsAndSound]),
    (Category::PhotoBooth, &[Category::Souvenirs]),
    (Category::Florist, &[Category::Attire, Category::Venue]),
    (Category::Decoration, &[Category::Venue, Category::Rentals]),
    (Category::LightsAndSound, &[Category::Venue]),
    (Category::Music, &[Category::Venue]),
    (Category::Host, &[Category::LightsAndSound]),
    (Category::HairAndMakeup, &[Category::Photography]),
    (Category::Attire, &[Category::Photography, Category::Florist]),
    (Category::Jewelry, &[Category::Photography]),
    (Category::Cake, &[Category::Souvenirs]),
    (Category::Invitations, &[Category::Planner]),
    (Category::Planner, &[Category::Venue, Category::Catering, Category::Decoration]),
    (Category::Officiant, &[Category::Venue]),
    (Category::Transportation, &[Category::Accommodation]),
    (Category::Accommodation, &[Category::Transportation]),
];

/// Category relationship graph
///
/// Relations are directional: `photography -> videography` does not imply the
/// reverse edge unless it is listed. Lookups are total and return an empty set
/// for categories without an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGraph {
    related: BTreeMap<Category, BTreeSet<Category>>,
    complementary: BTreeMap<Category, BTreeSet<Category>>,
}

/// Per-category replacements for the built-in tables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphOverrides {
    #[serde(default)]
    pub related: BTreeMap<Category, Vec<Category>>,
    #[serde(default)]
    pub complementary: BTreeMap<Category, Vec<Category>>,
}

impl CategoryGraph {
    /// Empty graph, every lookup yields nothing
    pub fn empty() -> Self {
        Self {
            related: BTreeMap::new(),
            complementary: BTreeMap::new(),
        }
    }

    /// Built-in graph with selected entries replaced
    ///
    /// An override replaces the whole entry for its category. An empty list
    /// removes the entry.
    pub fn with_overrides(overrides: &GraphOverrides) -> Self {
        let mut graph = Self::default();
        apply(&mut graph.related, &overrides.related);
        apply(&mut graph.complementary, &overrides.complementary);
        graph
    }

    pub fn related_of(&self, category: &Category) -> &BTreeSet<Category> {
        lookup(&self.related, category)
    }

    pub fn complementary_of(&self, category: &Category) -> &BTreeSet<Category> {
        lookup(&self.complementary, category)
    }

    pub fn set_related<I>(&mut self, category: Category, related: I)
    where
        I: IntoIterator<Item = Category>,
    {
        self.related.insert(category, related.into_iter().collect());
    }

    pub fn set_complementary<I>(&mut self, category: Category, complementary: I)
    where
        I: IntoIterator<Item = Category>,
    {
        self.complementary.insert(category, complementary.into_iter().collect());
    }
}

impl Default for CategoryGraph {
    fn default() -> Self {
        Self {
            related: table(RELATED),
            complementary: table(COMPLEMENTARY),
        }
    }
}

static EMPTY: BTreeSet<Category> = BTreeSet::new();

fn lookup<'g>(
    map: &'g BTreeMap<Category, BTreeSet<Category>>,
    category: &Category,
) -> &'g BTreeSet<Category> {
    map.get(category).unwrap_or(&EMPTY)
}

fn table(entries: &[(Category, &[Category])]) -> BTreeMap<Category, BTreeSet<Category>> {
    entries
        .iter()
        .map(|(category, others)| (category.clone(), others.iter().cloned().collect()))
        .collect()
}

fn apply(
    target: &mut BTreeMap<Category, BTreeSet<Category>>,
    overrides: &BTreeMap<Category, Vec<Category>>,
) {
    for (category, others) in overrides {
        if others.is_empty() {
            target.remove(category);
        } else {
            target.insert(category.clone(), others.iter().cloned().collect());
        }
    }
}
