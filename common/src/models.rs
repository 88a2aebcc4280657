//! Inbound request models.

use std::collections::HashMap;

use utoipa::IntoParams;

/// Query string of `GET /api/fetchData`.
///
/// Parameters the caller leaves out are interpolated as empty strings.
/// A repeated parameter keeps every value, joined with `,`.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct FetchDataQuery {
    /// Aurora Vision resource, e.g. `energy`.
    pub resource: String,
    /// Measured quantity, e.g. `production`.
    pub data_type: String,
    /// Value kind, e.g. `real`.
    pub value_type: String,
    /// Start of the range, passed through as given.
    pub start_date: String,
    /// End of the range, passed through as given.
    pub end_date: String,
}

impl FetchDataQuery {
    /// Builds the query from decoded `key=value` pairs. Never fails.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key).or_default().push(value);
        }

        let mut take = |name: &str| {
            values
                .remove(name)
                .map(|v| v.join(","))
                .unwrap_or_default()
        };

        Self {
            resource: take("resource"),
            data_type: take("dataType"),
            value_type: take("valueType"),
            start_date: take("startDate"),
            end_date: take("endDate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_reads_camel_case_keys() {
        let query = FetchDataQuery::from_pairs(pairs(&[
            ("resource", "energy"),
            ("dataType", "production"),
            ("valueType", "real"),
            ("startDate", "2024-01-01"),
            ("endDate", "2024-01-02"),
        ]));

        assert_eq!(query.resource, "energy");
        assert_eq!(query.data_type, "production");
        assert_eq!(query.value_type, "real");
        assert_eq!(query.start_date, "2024-01-01");
        assert_eq!(query.end_date, "2024-01-02");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let query = FetchDataQuery::from_pairs(pairs(&[("resource", "energy"), ("other", "x")]));
        assert_eq!(query.resource, "energy");
        assert!(query.data_type.is_empty());
        assert!(query.end_date.is_empty());
    }

    #[test]
    fn test_repeated_keys_are_joined() {
        let query = FetchDataQuery::from_pairs(pairs(&[
            ("resource", "energy"),
            ("resource", "power"),
            ("startDate", ""),
            ("startDate", "2024-01-05"),
        ]));

        assert_eq!(query.resource, "energy,power");
        assert_eq!(query.start_date, ",2024-01-05");
    }
}
