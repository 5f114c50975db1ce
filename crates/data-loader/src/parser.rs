//! Parsers for MovieLens data files.
//!
//! Handles the `::`-delimited .dat formats:
//! - ratings.dat: userId::movieId::rating::timestamp
//! - movies.dat: movieId::title::genres
//! - tags.dat: userId::movieId::tag::timestamp (10M dataset, optional)

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Read a file with ISO-8859-1 encoding (Latin-1).
///
/// The MovieLens datasets are ISO-8859-1, not UTF-8. Each byte maps directly
/// to the Unicode code point with the same value.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Pull the next `::`-separated field, with file/line context on failure.
fn next_field<'a>(
    parts: &mut std::str::Split<'a, &str>,
    file: &str,
    line_no: usize,
    field: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("missing {}", field),
    })
}

/// Parse a numeric field, with file/line context on failure.
fn parse_number<T>(value: &str, file: &str, line_no: usize, field: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("invalid {}: {}", field, e),
    })
}

fn parse_rating_line(line: &str, line_no: usize) -> Result<Rating> {
    const FILE: &str = "ratings.dat";
    let mut parts = line.split("::");

    let user_id = next_field(&mut parts, FILE, line_no, "userId")?;
    let movie_id = next_field(&mut parts, FILE, line_no, "movieId")?;
    let rating = next_field(&mut parts, FILE, line_no, "rating")?;
    let timestamp = next_field(&mut parts, FILE, line_no, "timestamp")?;

    Ok(Rating {
        user_id: parse_number(user_id, FILE, line_no, "userId")?,
        movie_id: parse_number(movie_id, FILE, line_no, "movieId")?,
        rating: parse_number(rating, FILE, line_no, "rating")?,
        timestamp: parse_number(timestamp, FILE, line_no, "timestamp")?,
    })
}

fn parse_movie_line(line: &str, line_no: usize) -> Result<Movie> {
    const FILE: &str = "movies.dat";
    let mut parts = line.split("::");

    let movie_id = next_field(&mut parts, FILE, line_no, "movieId")?;
    let title = next_field(&mut parts, FILE, line_no, "title")?;
    let genres = next_field(&mut parts, FILE, line_no, "genres")?;

    Ok(Movie {
        id: parse_number(movie_id, FILE, line_no, "movieId")?,
        title: title.to_string(),
        year: extract_year_from_title(title),
        genres: parse_genres(genres),
    })
}

fn parse_tag_line(line: &str, line_no: usize) -> Result<TagRecord> {
    const FILE: &str = "tags.dat";
    let mut parts = line.split("::");

    // The tagging user is not used downstream
    let _user_id = next_field(&mut parts, FILE, line_no, "userId")?;
    let movie_id = next_field(&mut parts, FILE, line_no, "movieId")?;
    let tag = next_field(&mut parts, FILE, line_no, "tag")?;

    Ok(TagRecord {
        movie_id: parse_number(movie_id, FILE, line_no, "movieId")?,
        tag: tag.to_string(),
    })
}

/// Parse the ratings.dat file
///
/// Format: userId::movieId::rating::timestamp
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    let lines = read_lines_latin1(path)?;
    let mut ratings = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        ratings.push(parse_rating_line(line, idx + 1)?);
    }

    Ok(ratings)
}

/// Parse the movies.dat file
///
/// Format: movieId::title::genres
///
/// The title usually includes the year in parentheses: "Toy Story (1995)".
/// Genres are pipe-separated: "Animation|Children's|Comedy".
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let lines = read_lines_latin1(path)?;
    let mut movies = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        movies.push(parse_movie_line(line, idx + 1)?);
    }

    Ok(movies)
}

/// Parse the tags.dat file (MovieLens 10M format)
///
/// Format: userId::movieId::tag::timestamp
pub fn parse_tags(path: &Path) -> Result<Vec<TagRecord>> {
    let lines = read_lines_latin1(path)?;
    let mut tags = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        tags.push(parse_tag_line(line, idx + 1)?);
    }

    Ok(tags)
}

/// Extract year from movie title
///
/// Example: "Toy Story (1995)" -> Some(1995)
///          "Movie Title" -> None
fn extract_year_from_title(title: &str) -> Option<u16> {
    let start = title.rfind('(')?;
    let end = title.rfind(')')?;
    if start < end {
        if let Ok(year) = title[start + 1..end].parse::<u16>() {
            return Some(year);
        }
    }
    None
}

/// Map a genre label onto the fixed genre set.
///
/// Accepts both the 1M spellings ("Children's") and the 10M spellings
/// ("Children"). Labels outside the fixed 18 have no feature position and
/// return None.
fn parse_genre_label(s: &str) -> Option<Genre> {
    match s {
        "Action" => Some(Genre::Action),
        "Adventure" => Some(Genre::Adventure),
        "Animation" => Some(Genre::Animation),
        "Children's" | "Children" => Some(Genre::Children),
        "Comedy" => Some(Genre::Comedy),
        "Crime" => Some(Genre::Crime),
        "Documentary" => Some(Genre::Documentary),
        "Drama" => Some(Genre::Drama),
        "Fantasy" => Some(Genre::Fantasy),
        "Film-Noir" => Some(Genre::FilmNoir),
        "Horror" => Some(Genre::Horror),
        "Musical" => Some(Genre::Musical),
        "Mystery" => Some(Genre::Mystery),
        "Romance" => Some(Genre::Romance),
        "Sci-Fi" => Some(Genre::SciFi),
        "Thriller" => Some(Genre::Thriller),
        "War" => Some(Genre::War),
        "Western" => Some(Genre::Western),
        _ => None,
    }
}

/// Parse pipe-separated genres, dropping labels outside the fixed set
/// (including the 10M "(no genres listed)" marker).
fn parse_genres(s: &str) -> Vec<Genre> {
    s.split('|').filter_map(parse_genre_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_line() {
        let rating = parse_rating_line("1::1193::5::978300760", 1).unwrap();
        assert_eq!(rating.user_id, 1);
        assert_eq!(rating.movie_id, 1193);
        assert_eq!(rating.rating, 5.0);
        assert_eq!(rating.timestamp, 978300760);
    }

    #[test]
    fn test_parse_rating_line_half_star() {
        let rating = parse_rating_line("2::47::3.5::1141415820", 1).unwrap();
        assert_eq!(rating.rating, 3.5);
    }

    #[test]
    fn test_parse_rating_line_missing_field() {
        let err = parse_rating_line("1::1193::5", 7).unwrap_err();
        match err {
            DataLoadError::ParseError { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_movie_line() {
        let movie = parse_movie_line("1::Toy Story (1995)::Animation|Children's|Comedy", 1).unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Toy Story (1995)");
        assert_eq!(movie.year, Some(1995));
        assert_eq!(
            movie.genres,
            vec![Genre::Animation, Genre::Children, Genre::Comedy]
        );
    }

    #[test]
    fn test_parse_movie_line_unknown_genres_dropped() {
        let movie = parse_movie_line("2::Some IMAX Thing (2009)::Action|IMAX", 1).unwrap();
        assert_eq!(movie.genres, vec![Genre::Action]);

        let movie = parse_movie_line("3::Untagged (2010)::(no genres listed)", 2).unwrap();
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_parse_tag_line() {
        let tag = parse_tag_line("15::4973::excellent!::1215184630", 1).unwrap();
        assert_eq!(tag.movie_id, 4973);
        assert_eq!(tag.tag, "excellent!");
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year_from_title("Toy Story (1995)"), Some(1995));
        assert_eq!(extract_year_from_title("Movie Title"), None);
    }
}
