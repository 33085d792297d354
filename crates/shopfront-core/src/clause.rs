//! Filter clause builder
//!
//! Translates a filter payload into the flat boolean filter string the
//! vector index expects: same-key fragments grouped and OR-joined inside
//! parentheses, groups AND-joined in the fixed key order color, size,
//! price. The index treats the string as a flat boolean expression, not a
//! structured AST, so group order matters.

use crate::filter::FilterPayload;

/// A built filter clause
///
/// `has_constraints` is an explicit flag rather than an emptiness check on
/// `expression`; the price group is always emitted, so the two would only
/// coincide by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub expression: String,
    pub has_constraints: bool,
}

impl FilterClause {
    /// The expression, or `None` when the clause carries no constraints
    pub fn as_filter(&self) -> Option<&str> {
        self.has_constraints.then_some(self.expression.as_str())
    }
}

/// Build the filter clause for a payload. Never fails.
///
/// An empty color or size selection emits a single equality-to-empty-string
/// sentinel fragment ("match nothing" for that category); the grammar has
/// no way to say "no constraint" for a category once any filter is active.
pub fn build_clause(payload: &FilterPayload) -> FilterClause {
    let color_group = equality_group("color", payload.color.iter().map(|c| c.as_str()));
    let size_group = equality_group("size", payload.size.iter().map(|s| s.as_str()));
    // Price is a single closed-range fragment, never OR-combined with itself
    let price_group = vec![format!(
        "price >= {} AND price <= {}",
        payload.price[0], payload.price[1]
    )];

    let groups = [color_group, size_group, price_group];

    let expression = groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| format!("({})", group.join(" OR ")))
        .collect::<Vec<_>>()
        .join(" AND ");

    let has_constraints = groups.iter().any(|group| !group.is_empty());

    FilterClause {
        expression,
        has_constraints,
    }
}

/// One quoted equality fragment per value, or the empty-match sentinel when
/// there are no values
fn equality_group<'a>(key: &str, values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let fragments: Vec<String> = values
        .map(|value| format!("\"{key}\" = \"{value}\""))
        .collect();

    if fragments.is_empty() {
        vec![format!("\"{key}\" = \"\"")]
    } else {
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Size, SortOrder};
    use proptest::prelude::*;

    fn payload(color: Vec<Color>, size: Vec<Size>, price: [f64; 2]) -> FilterPayload {
        FilterPayload {
            sort: SortOrder::None,
            color,
            size,
            price,
        }
    }

    #[test]
    fn test_empty_selections_emit_sentinels() {
        let clause = build_clause(&payload(vec![], vec![], [0.0, 100.0]));
        assert_eq!(
            clause.expression,
            "(\"color\" = \"\") AND (\"size\" = \"\") AND (price >= 0 AND price <= 100)"
        );
        assert!(clause.has_constraints);
    }

    #[test]
    fn test_multi_select_groups_or_joined() {
        let clause = build_clause(&payload(
            vec![Color::Blue, Color::Green],
            vec![Size::M],
            [0.0, 40.0],
        ));
        assert_eq!(
            clause.expression,
            "(\"color\" = \"blue\" OR \"color\" = \"green\") AND (\"size\" = \"M\") AND (price >= 0 AND price <= 40)"
        );
    }

    #[test]
    fn test_fragment_order_follows_selection_order() {
        let reversed = build_clause(&payload(
            vec![Color::Green, Color::Blue],
            vec![Size::M],
            [0.0, 40.0],
        ));
        assert!(reversed
            .expression
            .starts_with("(\"color\" = \"green\" OR \"color\" = \"blue\")"));
    }

    #[test]
    fn test_one_fragment_per_selected_color() {
        let all = Color::ALL.to_vec();
        let clause = build_clause(&payload(all.clone(), vec![Size::S], [0.0, 100.0]));
        let color_group = clause.expression.split(" AND (").next().unwrap();
        assert_eq!(color_group.matches("\"color\" = ").count(), all.len());
    }

    #[test]
    fn test_fractional_prices_unquoted() {
        let clause = build_clause(&payload(vec![], vec![], [12.5, 37.25]));
        assert!(clause
            .expression
            .ends_with("(price >= 12.5 AND price <= 37.25)"));
    }

    #[test]
    fn test_as_filter_present_when_constrained() {
        let clause = build_clause(&payload(vec![Color::White], vec![Size::L], [0.0, 20.0]));
        assert_eq!(clause.as_filter(), Some(clause.expression.as_str()));
    }

    proptest! {
        // Exactly one price group for any pair, inverted pairs included;
        // the builder does not reorder the bounds.
        #[test]
        fn prop_price_group_is_single_closed_range(min in -1000.0f64..1000.0, max in -1000.0f64..1000.0) {
            let clause = build_clause(&payload(vec![Color::Blue], vec![Size::S], [min, max]));
            let suffix = format!("(price >= {min} AND price <= {max})");
            prop_assert_eq!(clause.expression.matches("price >= ").count(), 1);
            prop_assert_eq!(clause.expression.matches("price <= ").count(), 1);
            prop_assert!(clause.expression.ends_with(&suffix));
        }

        // Group count and order are fixed: color, size, price.
        #[test]
        fn prop_groups_and_joined_in_key_order(
            colors in proptest::sample::subsequence(Color::ALL.to_vec(), 0..=5),
            sizes in proptest::sample::subsequence(Size::ALL.to_vec(), 0..=3),
        ) {
            let clause = build_clause(&payload(colors.clone(), sizes.clone(), [0.0, 100.0]));
            let groups: Vec<&str> = clause.expression.split(" AND (").collect();
            prop_assert_eq!(groups.len(), 3);
            prop_assert!(groups[0].starts_with("(\"color\""));
            prop_assert!(groups[1].starts_with("\"size\""));
            prop_assert!(groups[2].starts_with("price >= "));
            prop_assert!(clause.has_constraints);

            // |C| fragments for a non-empty selection, one sentinel otherwise
            let expected = colors.len().max(1);
            prop_assert_eq!(groups[0].matches("\"color\" = ").count(), expected);
        }
    }
}
