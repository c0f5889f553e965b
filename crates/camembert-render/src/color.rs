//! Categorical color assignment.

use indexmap::IndexMap;

/// Stable label-to-color mapping: every label gets the next palette entry on
/// first sight and keeps it for the lifetime of the scale, so slices and
/// legend rows agree on colors. The palette cycles when the domain outgrows
/// it.
#[derive(Debug, Clone)]
pub struct OrdinalColorScale {
    palette: Vec<String>,
    domain: IndexMap<String, usize>,
}

impl OrdinalColorScale {
    pub fn new(palette: &[String]) -> Self {
        Self {
            palette: palette.to_vec(),
            domain: IndexMap::new(),
        }
    }

    pub fn color_for(&mut self, label: &str) -> String {
        let next = self.domain.len();
        let index = *self.domain.entry(label.to_string()).or_insert(next);
        self.palette[index % self.palette.len()].clone()
    }

    /// Labels in first-seen order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn assigns_colors_in_first_seen_order() {
        let mut scale = OrdinalColorScale::new(&palette(&["red", "green", "blue"]));
        assert_eq!(scale.color_for("b"), "red");
        assert_eq!(scale.color_for("a"), "green");
        assert_eq!(scale.color_for("b"), "red");
        let domain: Vec<&str> = scale.domain().collect();
        assert_eq!(domain, vec!["b", "a"]);
    }

    #[test]
    fn cycles_when_the_domain_outgrows_the_palette() {
        let mut scale = OrdinalColorScale::new(&palette(&["red", "green"]));
        scale.color_for("a");
        scale.color_for("b");
        assert_eq!(scale.color_for("c"), "red");
        assert_eq!(scale.color_for("d"), "green");
    }
}
