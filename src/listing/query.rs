use super::filter::FilterState;
use super::page::PaginationState;
use super::sort::{SortDirection, SortField, SortState};

/// The complete listing state as encoded in a URL query string. This is the
/// one external interface of the pipeline, so both directions live in one
/// place: `to_query_string` omits anything at its default value, and the
/// parsers never fail, since a query string is user-editable input; malformed
/// values degrade to defaults instead of erroring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQuery {
    pub filters: FilterState,
    pub sort: SortState,
    pub pagination: PaginationState,
}

impl ListingQuery {
    /// Build from decoded key/value pairs (e.g. an already-parsed query map).
    /// Unknown keys are ignored.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in params {
            match key {
                "q" => query.filters.search = value.trim().to_string(),
                "categories" => {
                    query.filters.categories = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "minPrice" => query.filters.min_price = parse_number(value),
                "maxPrice" => query.filters.max_price = parse_number(value),
                "minRating" => query.filters.min_rating = parse_number(value),
                "inStock" => query.filters.in_stock = parse_flag(value),
                "onSale" => query.filters.on_sale = parse_flag(value),
                "sortBy" => query.sort.field = SortField::parse(value),
                "sortOrder" => query.sort.direction = SortDirection::parse(value),
                "page" => {
                    query.pagination.page = value.parse::<usize>().unwrap_or(1).max(1);
                }
                "limit" => {
                    query.pagination.limit = value
                        .parse::<usize>()
                        .ok()
                        .filter(|v| *v >= 1)
                        .unwrap_or(super::page::DEFAULT_LIMIT);
                }
                _ => {}
            }
        }
        query
    }

    /// Parse a raw query string (`a=b&c=d`, percent-encoded).
    pub fn from_query_string(qs: &str) -> Self {
        let pairs: Vec<(String, String)> = qs
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = parts.next().unwrap_or("");
                let value = parts.next().unwrap_or("");
                (decode(key), decode(value))
            })
            .collect();
        Self::from_params(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Canonical serialization: fixed key order, defaults omitted, so equal
    /// states always produce byte-identical query strings.
    pub fn to_query_string(&self) -> String {
        let mut out = Vec::new();
        if !self.filters.search.is_empty() {
            out.push(format!("q={}", encode(&self.filters.search)));
        }
        if !self.filters.categories.is_empty() {
            out.push(format!(
                "categories={}",
                encode(&self.filters.categories.join(","))
            ));
        }
        if let Some(min) = self.filters.min_price {
            out.push(format!("minPrice={}", format_number(min)));
        }
        if let Some(max) = self.filters.max_price {
            out.push(format!("maxPrice={}", format_number(max)));
        }
        if let Some(min) = self.filters.min_rating {
            out.push(format!("minRating={}", format_number(min)));
        }
        if let Some(flag) = self.filters.in_stock {
            out.push(format!("inStock={flag}"));
        }
        if let Some(flag) = self.filters.on_sale {
            out.push(format!("onSale={flag}"));
        }
        if self.sort.field != SortField::default() {
            out.push(format!("sortBy={}", self.sort.field.as_str()));
        }
        if self.sort.direction != SortDirection::default() {
            out.push(format!("sortOrder={}", self.sort.direction.as_str()));
        }
        if self.pagination.page != super::page::DEFAULT_PAGE {
            out.push(format!("page={}", self.pagination.page));
        }
        if self.pagination.limit != super::page::DEFAULT_LIMIT {
            out.push(format!("limit={}", self.pagination.limit));
        }
        out.join("&")
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Tri-state coercion: only the literal strings "true"/"false" count,
/// anything else means "unset".
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Integral values print without a trailing `.0` so that a round trip through
/// parse/format is stable ("500" stays "500").
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

const UNRESERVED: &[u8] = b"-_.~,";

fn encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes().peekable();
    while let Some(byte) = iter.next() {
        match byte {
            b'%' => {
                let hi = iter.next();
                let lo = iter.next();
                let pair = match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        let hex = [hi, lo];
                        std::str::from_utf8(&hex)
                            .ok()
                            .and_then(|h| u8::from_str_radix(h, 16).ok())
                    }
                    _ => None,
                };
                match pair {
                    Some(decoded) => bytes.push(decoded),
                    None => bytes.push(b'%'),
                }
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(byte),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_serializes_to_an_empty_query() {
        assert_eq!(ListingQuery::default().to_query_string(), "");
        assert_eq!(
            ListingQuery::from_query_string(""),
            ListingQuery::default()
        );
    }

    #[test]
    fn round_trip_preserves_state() {
        let mut query = ListingQuery::default();
        query.filters.search = "wireless headphones".into();
        query.filters.categories = vec!["electronics".into(), "audio".into()];
        query.filters.min_price = Some(50.0);
        query.filters.max_price = Some(399.99);
        query.filters.min_rating = Some(4.0);
        query.filters.in_stock = Some(true);
        query.sort = SortState::new(SortField::Price, SortDirection::Asc);
        query.pagination.page = 3;
        query.pagination.limit = 24;

        let qs = query.to_query_string();
        assert_eq!(ListingQuery::from_query_string(&qs), query);
    }

    #[test]
    fn serialization_is_canonical() {
        let qs = "limit=4&page=2&categories=electronics,laptops";
        let query = ListingQuery::from_query_string(qs);
        let canonical = query.to_query_string();
        assert_eq!(canonical, "categories=electronics,laptops&page=2&limit=4");
        // A second round trip is a fixpoint.
        assert_eq!(
            ListingQuery::from_query_string(&canonical).to_query_string(),
            canonical
        );
    }

    #[test]
    fn deserializes_delimited_categories() {
        let query = ListingQuery::from_query_string("categories=electronics,laptops&page=2&limit=4");
        assert_eq!(
            query.filters.categories,
            vec!["electronics".to_string(), "laptops".to_string()]
        );
        assert_eq!(query.pagination.page, 2);
        assert_eq!(query.pagination.limit, 4);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let query =
            ListingQuery::from_query_string("minPrice=abc&maxPrice=&page=zero&limit=-3&minRating=NaN");
        assert_eq!(query.filters.min_price, None);
        assert_eq!(query.filters.max_price, None);
        assert_eq!(query.filters.min_rating, None);
        assert_eq!(query.pagination.page, 1);
        assert_eq!(query.pagination.limit, super::super::page::DEFAULT_LIMIT);
    }

    #[test]
    fn flags_are_tri_state() {
        let query = ListingQuery::from_query_string("inStock=true&onSale=banana");
        assert_eq!(query.filters.in_stock, Some(true));
        assert_eq!(query.filters.on_sale, None);

        let query = ListingQuery::from_query_string("inStock=false");
        assert_eq!(query.filters.in_stock, Some(false));
    }

    #[test]
    fn unknown_sort_values_fall_back() {
        let query = ListingQuery::from_query_string("sortBy=shoeSize&sortOrder=sideways");
        assert_eq!(query.sort, SortState::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ListingQuery::from_query_string("utm_source=mailer&q=ipad");
        assert_eq!(query.filters.search, "ipad");
    }

    #[test]
    fn integral_prices_round_trip_without_decimal_noise() {
        let query = ListingQuery::from_query_string("minPrice=500&maxPrice=1500");
        assert_eq!(query.to_query_string(), "minPrice=500&maxPrice=1500");
    }

    #[test]
    fn search_text_is_percent_encoded() {
        let mut query = ListingQuery::default();
        query.filters.search = "4k tv & soundbar".into();
        let qs = query.to_query_string();
        assert_eq!(qs, "q=4k%20tv%20%26%20soundbar");
        assert_eq!(ListingQuery::from_query_string(&qs), query);
    }
}
