use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Genre assigned when the user leaves the field blank
pub const DEFAULT_GENRE: &str = "Other";

/// Runtime (minutes) assigned when the user gives none, zero or garbage
pub const DEFAULT_RUNTIME: u32 = 90;

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    if movie.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie id cannot be empty".to_string(),
        ));
    }
    parse_title(&movie.title)?;
    if movie.year == 0 {
        return Err(DomainError::InvariantViolation(
            "Movie year cannot be zero".to_string(),
        ));
    }
    if movie.genre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie genre cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Title is trimmed and cannot be empty
pub fn parse_title(raw: &str) -> DomainResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}

/// Year must be a non-zero integer
pub fn parse_year(raw: &str) -> DomainResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(year) if year != 0 => Ok(year),
        _ => Err(DomainError::InvalidInput(format!(
            "Year must be a number, got {:?}",
            raw
        ))),
    }
}

/// Blank genre falls back to "Other"
pub fn normalize_genre(raw: &str) -> String {
    let genre = raw.trim();
    if genre.is_empty() {
        DEFAULT_GENRE.to_string()
    } else {
        genre.to_string()
    }
}

/// Non-numeric, zero or negative runtime falls back to 90 minutes
pub fn normalize_runtime(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(runtime) if runtime > 0 => runtime,
        _ => DEFAULT_RUNTIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::with_id("tt1375666", "Inception", 2010, "Sci-Fi", 148);
        assert!(validate_movie(&movie).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(parse_title("   ").is_err());
        assert_eq!(parse_title("  Up ").unwrap(), "Up");
    }

    #[test]
    fn test_year_parsing() {
        assert_eq!(parse_year(" 1999 ").unwrap(), 1999);
        assert!(parse_year("").is_err());
        assert!(parse_year("0").is_err());
        assert!(parse_year("nineteen").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(normalize_genre(""), "Other");
        assert_eq!(normalize_genre(" Horror "), "Horror");
        assert_eq!(normalize_runtime(""), 90);
        assert_eq!(normalize_runtime("0"), 90);
        assert_eq!(normalize_runtime("-5"), 90);
        assert_eq!(normalize_runtime("abc"), 90);
        assert_eq!(normalize_runtime("121"), 121);
    }
}
