use crate::core::categories::CategoryGraph;
use crate::models::Category;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// How strongly a category is wanted in this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Complementary,
    Related,
    Required,
}

impl PriorityLevel {
    /// Multiplier applied to the category component
    pub fn weight(self) -> f64 {
        match self {
            PriorityLevel::Required => 1.0,
            PriorityLevel::Related => 0.8,
            PriorityLevel::Complementary => 0.5,
        }
    }
}

/// Per-run category weights derived from the required categories
///
/// Categories missing from the model weigh zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryPriorityModel {
    levels: BTreeMap<Category, PriorityLevel>,
}

impl CategoryPriorityModel {
    /// Build the model for a set of required categories
    ///
    /// Levels are assigned tier by tier (required, then related, then
    /// complementary) and the first assignment sticks, so a category never
    /// gets downgraded by a weaker relation.
    pub fn build(required: &BTreeSet<Category>, graph: &CategoryGraph) -> Self {
        let mut levels = BTreeMap::new();

        for category in required {
            levels.insert(category.clone(), PriorityLevel::Required);
        }

        for category in required {
            for related in graph.related_of(category) {
                levels.entry(related.clone()).or_insert(PriorityLevel::Related);
            }
        }

        for category in required {
            for complementary in graph.complementary_of(category) {
                levels.entry(complementary.clone()).or_insert(PriorityLevel::Complementary);
            }
        }

        Self { levels }
    }

    pub fn level(&self, category: &Category) -> Option<PriorityLevel> {
        self.levels.get(category).copied()
    }

    pub fn weight(&self, category: &Category) -> f64 {
        self.level(category).map_or(0.0, PriorityLevel::weight)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.levels.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Categories ordered by descending weight, then by category order
    pub fn by_priority(&self) -> Vec<(&Category, PriorityLevel)> {
        let mut entries: Vec<_> = self.levels.iter().map(|(c, l)| (c, *l)).collect();
        // BTreeMap iteration is already category-ordered and the sort is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(categories: &[Category]) -> BTreeSet<Category> {
        categories.iter().cloned().collect()
    }

    #[test]
    fn test_levels_from_default_graph() {
        let graph = CategoryGraph::default();
        let model = CategoryPriorityModel::build(&required(&[Category::Photography]), &graph);

        assert_eq!(model.level(&Category::Photography), Some(PriorityLevel::Required));
        assert_eq!(model.level(&Category::Videography), Some(PriorityLevel::Related));
        assert_eq!(model.level(&Category::HairAndMakeup), Some(PriorityLevel::Complementary));
        assert_eq!(model.level(&Category::Venue), None);
        assert_eq!(model.weight(&Category::Venue), 0.0);
    }

    #[test]
    fn test_required_never_downgraded() {
        // Photography is related to videography and complementary to makeup
        let graph = CategoryGraph::default();
        let model = CategoryPriorityModel::build(
            &required(&[Category::Videography, Category::HairAndMakeup, Category::Photography]),
            &graph,
        );

        assert_eq!(model.weight(&Category::Photography), 1.0);
        assert_eq!(model.weight(&Category::Videography), 1.0);
        assert_eq!(model.weight(&Category::HairAndMakeup), 1.0);
    }

    #[test]
    fn test_related_beats_complementary() {
        let mut graph = CategoryGraph::empty();
        graph.set_complementary(Category::Venue, [Category::Cake]);
        graph.set_related(Category::Catering, [Category::Cake]);

        let model =
            CategoryPriorityModel::build(&required(&[Category::Venue, Category::Catering]), &graph);

        assert_eq!(model.level(&Category::Cake), Some(PriorityLevel::Related));
    }

    #[test]
    fn test_unknown_required_category_has_no_relations() {
        let model =
            CategoryPriorityModel::build(&required(&[Category::parse("fireworks")]), &CategoryGraph::default());

        assert_eq!(model.len(), 1);
        assert_eq!(model.level(&Category::parse("Fire Works")), Some(PriorityLevel::Required));
        assert_eq!(model.level(&Category::parse("drone")), None);
    }

    #[test]
    fn test_empty_required_gives_empty_model() {
        let model = CategoryPriorityModel::build(&BTreeSet::new(), &CategoryGraph::default());
        assert!(model.is_empty());
    }

    #[test]
    fn test_by_priority_orders_by_weight() {
        let graph = CategoryGraph::default();
        let model = CategoryPriorityModel::build(&required(&[Category::Venue]), &graph);
        let ordered = model.by_priority();

        assert_eq!(ordered[0], (&Category::Venue, PriorityLevel::Required));
        assert_eq!(ordered[1], (&Category::Rentals, PriorityLevel::Related));
        let weights: Vec<f64> = ordered.iter().map(|(_, l)| l.weight()).collect();
        assert!(weights.windows(2).all(|w| w[0] >= w[1]));
    }
}
