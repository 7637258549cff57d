//! Request parameter parsing and bounds checking.
//!
//! Validation runs before any resolution or composition work. It collects
//! every violation rather than stopping at the first, and it never replaces
//! an invalid value that was actually supplied with a default: defaults
//! apply only to parameters that are absent (or present but empty).
//!
//! The one deliberate exception is `theme`, which is coerced to `dark` when
//! unrecognised instead of being rejected.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::error::{ErrorCode, IconError, Violation};
use crate::theme::Theme;

/// Default single-icon canvas size.
pub const DEFAULT_ICON_SIZE: u32 = 48;

/// Allowed single-icon canvas sizes.
pub const ICON_SIZE_RANGE: RangeInclusive<u32> = 16..=256;

/// Default number of icons per grid row.
pub const DEFAULT_PER_LINE: u32 = 10;

/// Allowed icons per grid row.
pub const PER_LINE_RANGE: RangeInclusive<u32> = 5..=10;

/// Maximum number of icons in one grid request.
pub const MAX_ICONS_PER_REQUEST: usize = 50;

/// Maximum length of one icon identifier.
pub const MAX_ICON_ID_LEN: usize = 50;

/// Maximum raw length of the `i` parameter.
pub const MAX_ICON_LIST_BYTES: usize = 4096;

// ============================================================================
// Query Parameters
// ============================================================================

/// Decoded query-string parameters. The first occurrence of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parses an `application/x-www-form-urlencoded` query string
    /// (without the leading `?`).
    pub fn parse(query: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the value of `name`, treating an empty value as absent.
    fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::default();
        for (key, value) in iter {
            params
                .values
                .entry(key.into())
                .or_insert_with(|| value.into());
        }
        params
    }
}

// ============================================================================
// Validated Requests
// ============================================================================

/// A bounds-checked single-icon request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleIconRequest {
    pub id: String,
    pub theme: Theme,
    pub size: u32,
}

/// A bounds-checked grid request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRequest {
    /// Identifiers in request order; duplicates are kept.
    pub ids: Vec<String>,
    pub theme: Theme,
    pub per_line: u32,
}

/// Validates the parameters of a single-icon request.
pub fn validate_single(params: &QueryParams) -> Result<SingleIconRequest, IconError> {
    let mut violations = Vec::new();

    let id = match params.get("i") {
        None => {
            violations.push(missing_icon_parameter("i=react"));
            None
        }
        Some(raw) if raw.len() > MAX_ICON_LIST_BYTES => {
            violations.push(too_large(raw));
            None
        }
        Some(raw) => match check_icon_id("i", raw) {
            Ok(()) => Some(raw.to_string()),
            Err(violation) => {
                violations.push(violation);
                None
            }
        },
    };

    let theme = Theme::coerce(params.get("theme"));
    let size = check_integer(params, "size", ICON_SIZE_RANGE, DEFAULT_ICON_SIZE)
        .map_err(|v| violations.push(v))
        .ok();

    match (id, size) {
        (Some(id), Some(size)) if violations.is_empty() => {
            Ok(SingleIconRequest { id, theme, size })
        }
        _ => Err(IconError::Validation(violations)),
    }
}

/// Validates the parameters of a grid request.
pub fn validate_grid(params: &QueryParams) -> Result<GridRequest, IconError> {
    let mut violations = Vec::new();

    let ids = match params.get("i") {
        None => {
            violations.push(missing_icon_parameter("i=react,rust,docker"));
            None
        }
        Some(raw) => check_icon_list(raw, &mut violations),
    };

    let theme = Theme::coerce(params.get("theme"));
    let per_line = check_integer(params, "perline", PER_LINE_RANGE, DEFAULT_PER_LINE)
        .map_err(|v| violations.push(v))
        .ok();

    match (ids, per_line) {
        (Some(ids), Some(per_line)) if violations.is_empty() => Ok(GridRequest {
            ids,
            theme,
            per_line,
        }),
        _ => Err(IconError::Validation(violations)),
    }
}

// ============================================================================
// Field Checks
// ============================================================================

/// Returns true if `id` is 1..=50 ASCII letters, digits or hyphens.
pub fn is_valid_icon_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ICON_ID_LEN
        && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn check_icon_id(field: &str, id: &str) -> Result<(), Violation> {
    let message = if id.is_empty() {
        "Icon ID must not be empty"
    } else if id.len() > MAX_ICON_ID_LEN {
        "Icon ID too long"
    } else if !is_valid_icon_id(id) {
        "Icon ID must contain only letters, numbers, and hyphens"
    } else {
        return Ok(());
    };
    Err(Violation::new(field, ErrorCode::InvalidIconId, message)
        .with_value(id)
        .with_constraint(format!("^[A-Za-z0-9-]{{1,{MAX_ICON_ID_LEN}}}$")))
}

fn check_icon_list(raw: &str, violations: &mut Vec<Violation>) -> Option<Vec<String>> {
    if raw.len() > MAX_ICON_LIST_BYTES {
        violations.push(too_large(raw));
        return None;
    }

    let ids: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    let before = violations.len();
    if ids.is_empty() {
        violations.push(
            Violation::new("i", ErrorCode::InvalidParameter, "At least one icon ID is required")
                .with_value(raw)
                .with_constraint(format!("1..={MAX_ICONS_PER_REQUEST} icons")),
        );
    } else if ids.len() > MAX_ICONS_PER_REQUEST {
        violations.push(
            Violation::new(
                "i",
                ErrorCode::TooManyIcons,
                format!("Maximum {MAX_ICONS_PER_REQUEST} icons allowed"),
            )
            .with_value(ids.len().to_string())
            .with_constraint(format!("1..={MAX_ICONS_PER_REQUEST} icons")),
        );
    }

    for (index, id) in ids.iter().enumerate() {
        if let Err(violation) = check_icon_id(&format!("i[{index}]"), id) {
            violations.push(violation);
        }
    }

    (violations.len() == before).then(|| ids.into_iter().map(str::to_string).collect())
}

/// Parses an optional integer parameter and checks it against `range`.
fn check_integer(
    params: &QueryParams,
    field: &str,
    range: RangeInclusive<u32>,
    default: u32,
) -> Result<u32, Violation> {
    let Some(raw) = params.non_empty(field) else {
        return Ok(default);
    };
    let constraint = format!("integer in {}..={}", range.start(), range.end());

    let invalid = |message: String| {
        Violation::new(field, ErrorCode::InvalidParameter, message)
            .with_value(raw)
            .with_constraint(constraint.clone())
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| invalid(format!("{field} must be an integer")))?;

    if value < i64::from(*range.start()) {
        return Err(invalid(format!("{field} must be at least {}", range.start())));
    }
    if value > i64::from(*range.end()) {
        return Err(invalid(format!("{field} must be at most {}", range.end())));
    }
    // In range, so it fits in u32.
    Ok(value as u32)
}

fn too_large(raw: &str) -> Violation {
    Violation::new("i", ErrorCode::RequestTooLarge, "Parameter 'i' is too large")
        .with_value(format!("{} bytes", raw.len()))
        .with_constraint(format!("at most {MAX_ICON_LIST_BYTES} bytes"))
}

fn missing_icon_parameter(usage: &str) -> Violation {
    Violation::new(
        "i",
        ErrorCode::MissingParameter,
        format!("Missing required parameter 'i'. Usage: ?{usage}"),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> QueryParams {
        QueryParams::parse(query)
    }

    fn violations(err: IconError) -> Vec<Violation> {
        match err {
            IconError::Validation(v) => v,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn single_defaults() {
        let req = validate_single(&params("i=react")).unwrap();
        assert_eq!(req.id, "react");
        assert_eq!(req.theme, Theme::Dark);
        assert_eq!(req.size, 48);
    }

    #[test]
    fn single_accepts_bounds() {
        assert_eq!(validate_single(&params("i=react&size=48")).unwrap().size, 48);
        assert_eq!(validate_single(&params("i=react&size=256")).unwrap().size, 256);
        assert_eq!(validate_single(&params("i=react&size=16")).unwrap().size, 16);
    }

    #[test]
    fn single_rejects_out_of_range_size() {
        for size in ["500", "0", "257", "15", "-5"] {
            let err = validate_single(&params(&format!("i=react&size={size}"))).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidParameter, "size={size}");
            let v = violations(err);
            assert_eq!(v[0].field, "size");
            assert_eq!(v[0].value.as_deref(), Some(size));
            assert_eq!(v[0].constraint.as_deref(), Some("integer in 16..=256"));
        }
    }

    #[test]
    fn non_integer_size_is_rejected_not_defaulted() {
        let err = validate_single(&params("i=react&size=48px")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
        assert_eq!(violations(err)[0].message, "size must be an integer");
    }

    #[test]
    fn empty_size_uses_default() {
        assert_eq!(validate_single(&params("i=react&size=")).unwrap().size, 48);
    }

    #[test]
    fn missing_icon_id() {
        let err = validate_single(&params("theme=light")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingParameter);
        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_icon_ids() {
        for id in ["", "react.js", "a b", "<svg>", &"x".repeat(51)] {
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("i", id)
                .finish();
            let err = validate_single(&params(&query)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidIconId, "id={id:?}");
        }
        assert!(validate_single(&params(&format!("i={}", "x".repeat(50)))).is_ok());
        assert!(validate_single(&params("i=Visual-Studio-2022")).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let err = validate_single(&params("i=bad.id&size=9000")).unwrap_err();
        let v = violations(err);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].code, ErrorCode::InvalidIconId);
        assert_eq!(v[1].field, "size");
    }

    #[test]
    fn invalid_theme_is_coerced() {
        let req = validate_single(&params("i=react&theme=purple")).unwrap();
        assert_eq!(req.theme, Theme::Dark);
        let req = validate_single(&params("i=react&theme=light")).unwrap();
        assert_eq!(req.theme, Theme::Light);
    }

    #[test]
    fn grid_parses_and_trims() {
        let req = validate_grid(&params("i=react,%20rust%20,,docker,react&perline=5")).unwrap();
        assert_eq!(req.ids, vec!["react", "rust", "docker", "react"]);
        assert_eq!(req.per_line, 5);
        assert_eq!(req.theme, Theme::Dark);
    }

    #[test]
    fn grid_defaults_per_line() {
        assert_eq!(validate_grid(&params("i=react")).unwrap().per_line, 10);
    }

    #[test]
    fn grid_per_line_bounds() {
        for bad in ["4", "11", "ten"] {
            let err = validate_grid(&params(&format!("i=react&perline={bad}"))).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidParameter, "perline={bad}");
        }
        assert!(validate_grid(&params("i=react&perline=10")).is_ok());
    }

    #[test]
    fn grid_list_length_bounds() {
        let fifty = vec!["react"; 50].join(",");
        assert_eq!(
            validate_grid(&params(&format!("i={fifty}"))).unwrap().ids.len(),
            50
        );

        let fifty_one = vec!["react"; 51].join(",");
        let err = validate_grid(&params(&format!("i={fifty_one}"))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TooManyIcons);
    }

    #[test]
    fn grid_requires_identifiers() {
        let err = validate_grid(&params("perline=5")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingParameter);

        let err = validate_grid(&params("i=,%20,")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
    }

    #[test]
    fn grid_reports_each_bad_element() {
        let err = validate_grid(&params("i=react,bad.one,rust,also_bad")).unwrap_err();
        let v = violations(err);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].field, "i[1]");
        assert_eq!(v[1].field, "i[3]");
        assert!(v.iter().all(|v| v.code == ErrorCode::InvalidIconId));
    }

    #[test]
    fn oversized_list_is_rejected_early() {
        let huge = vec!["abcdefgh"; 600].join(",");
        let err = validate_grid(&params(&format!("i={huge}"))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RequestTooLarge);
        assert_eq!(violations(err).len(), 1);

        let err = validate_single(&params(&format!("i={}", "a".repeat(5000)))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RequestTooLarge);
    }

    #[test]
    fn first_query_value_wins() {
        let p = params("i=react&i=rust");
        assert_eq!(p.get("i"), Some("react"));
        let p: QueryParams = [("i", "a"), ("i", "b")].into_iter().collect();
        assert_eq!(p.get("i"), Some("a"));
    }

    #[test]
    fn icon_id_predicate() {
        assert!(is_valid_icon_id("nodejs"));
        assert!(is_valid_icon_id("A-1"));
        assert!(!is_valid_icon_id(""));
        assert!(!is_valid_icon_id("ünicode"));
        assert!(!is_valid_icon_id("a_b"));
    }
}
