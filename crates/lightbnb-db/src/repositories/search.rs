//! Property search query builder
//!
//! Assembles the `SELECT` for [`PropertySearch`] with `sqlx::QueryBuilder`.
//! Placeholders are numbered by the builder from the bind count, so the
//! statement stays parameterized whichever filters are present.

use sqlx::{Postgres, QueryBuilder};

use lightbnb_core::traits::{clamp_limit, PropertySearch};

const SEARCH_BASE: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Hands out the keyword that joins the next predicate
#[derive(Default)]
struct Conditions {
    applied: usize,
}

impl Conditions {
    /// `WHERE` for the first predicate, `AND` afterwards
    fn next_keyword(&mut self) -> &'static str {
        let keyword = if self.applied == 0 { " WHERE " } else { " AND " };
        self.applied += 1;
        keyword
    }
}

/// Escape LIKE metacharacters so the city filter is a plain substring match
fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Build the property search statement
///
/// Filters map to predicates as follows:
/// - `city`: `properties.city LIKE '%city%'`
/// - `owner_id`: `properties.owner_id = owner`
/// - `minimum_price_per_night`: `properties.cost_per_night >= dollars * 100`
/// - `maximum_price_per_night`: `properties.cost_per_night <= dollars * 100`
/// - `minimum_rating`: `HAVING` average rating `>= rating`, skipped when `<= 0`
///
/// Results are grouped per property, cheapest first, capped at `limit`.
pub fn build_search_query(search: &PropertySearch, limit: i64) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SEARCH_BASE);
    let mut conditions = Conditions::default();

    if let Some(city) = search.city_filter() {
        builder
            .push(conditions.next_keyword())
            .push("properties.city LIKE ")
            .push_bind(like_pattern(city));
    }

    if let Some(owner_id) = search.owner_id {
        builder
            .push(conditions.next_keyword())
            .push("properties.owner_id = ")
            .push_bind(owner_id.into_inner());
    }

    if let Some(min_cost) = search.min_cost() {
        builder
            .push(conditions.next_keyword())
            .push("properties.cost_per_night >= ")
            .push_bind(min_cost.into_inner());
    }

    if let Some(max_cost) = search.max_cost() {
        builder
            .push(conditions.next_keyword())
            .push("properties.cost_per_night <= ")
            .push_bind(max_cost.into_inner());
    }

    builder.push(" GROUP BY properties.id");

    // filters on the aggregate, so it cannot live in WHERE
    if let Some(rating) = search.rating_filter() {
        builder
            .push(" HAVING avg(property_reviews.rating)::float8 >= ")
            .push_bind(rating);
    }

    builder
        .push(" ORDER BY properties.cost_per_night, properties.id LIMIT ")
        .push_bind(clamp_limit(limit));

    builder
}
