//! Pure formatting rules for rendered fields.
//!
//! Kept free of ratatui types so the rules can be tested directly.

use crate::catalog::Genre;

/// Shown in place of a poster when the catalog carries none.
/// List items only; the detail screen renders no fallback.
pub const PLACEHOLDER_POSTER_URL: &str = "https://placehold.co/500x750?text=Poster+tidak+tersedia";

/// Marker for an absent rating. No star glyph.
pub const RATING_UNAVAILABLE: &str = "N/A";

/// Marker for a zero currency amount.
pub const AMOUNT_UNAVAILABLE: &str = "Tidak tersedia";

/// Poster URL for a list item: image base + relative path, or the
/// fixed placeholder when the path is absent.
pub fn poster_url(image_base: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => image_url(image_base, path),
        None => PLACEHOLDER_POSTER_URL.to_string(),
    }
}

/// Image URL from the configured base and an API-supplied relative
/// path (which starts with a slash).
pub fn image_url(image_base: &str, path: &str) -> String {
    format!("{}{}", image_base.trim_end_matches('/'), path)
}

/// Rating string: "⭐ 7.5" style, or the fixed marker when absent.
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(vote) => format!("⭐ {:.1}", vote),
        None => RATING_UNAVAILABLE.to_string(),
    }
}

/// Currency amount: "$10,000,000" for nonzero values, the fixed
/// marker for zero.
pub fn currency_label(amount: u64) -> String {
    if amount == 0 {
        return AMOUNT_UNAVAILABLE.to_string();
    }
    format!("${}", group_thousands(amount))
}

/// Comma-joined genre names; an empty list renders as an empty string.
pub fn genre_label(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: u64, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn poster_url_joins_base_and_path() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn poster_url_falls_back_to_placeholder() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", None),
            PLACEHOLDER_POSTER_URL
        );
    }

    #[test]
    fn image_url_tolerates_trailing_slash_on_base() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500/", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
    }

    #[test]
    fn rating_renders_one_decimal() {
        assert_eq!(rating_label(Some(7.25)), "⭐ 7.2");
        assert_eq!(rating_label(Some(8.0)), "⭐ 8.0");
    }

    #[test]
    fn absent_rating_has_no_star() {
        let label = rating_label(None);
        assert_eq!(label, "N/A");
        assert!(!label.contains('⭐'));
    }

    #[test]
    fn zero_amount_renders_marker() {
        assert_eq!(currency_label(0), "Tidak tersedia");
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(currency_label(10_000_000), "$10,000,000");
        assert_eq!(currency_label(999), "$999");
        assert_eq!(currency_label(1_000), "$1,000");
        assert_eq!(currency_label(1_234_567_890), "$1,234,567,890");
    }

    #[test]
    fn genres_join_with_comma() {
        let genres = [genre(18, "Drama"), genre(27, "Horor")];
        assert_eq!(genre_label(&genres), "Drama, Horor");
    }

    #[test]
    fn empty_genres_render_empty_string() {
        assert_eq!(genre_label(&[]), "");
    }
}
