use super::entity::Movie;

/// Built-in catalog used on first run, spanning distinct genres
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::with_id("tt0111161", "The Shawshank Redemption", 1994, "Drama", 142),
        Movie::with_id("tt0068646", "The Godfather", 1972, "Crime", 175),
        Movie::with_id("tt0133093", "The Matrix", 1999, "Sci-Fi", 136),
        Movie::with_id("tt4154796", "Avengers: Endgame", 2019, "Action", 181),
        Movie::with_id("tt0097576", "Indiana Jones and the Last Crusade", 1989, "Adventure", 127),
        Movie::with_id("tt0245429", "Spirited Away", 2001, "Animation", 125),
        Movie::with_id("tt1049413", "Up", 2009, "Animation", 96),
        Movie::with_id("tt0114709", "Toy Story", 1995, "Animation", 81),
        Movie::with_id("tt0118799", "Life is Beautiful", 1997, "Comedy", 116),
        Movie::with_id("tt4154756", "Avengers: Infinity War", 2018, "Action", 149),
        Movie::with_id(
            "tt0120737",
            "The Lord of the Rings: The Fellowship of the Ring",
            2001,
            "Fantasy",
            178,
        ),
        Movie::with_id(
            "tt0167260",
            "The Lord of the Rings: The Return of the King",
            2003,
            "Fantasy",
            201,
        ),
        Movie::with_id("tt1375666", "Inception", 2010, "Sci-Fi", 148),
        Movie::with_id("tt2582802", "Whiplash", 2014, "Drama", 106),
        Movie::with_id("tt6751668", "Parasite", 2019, "Thriller", 132),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_movie;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_fifteen_unique_valid_movies() {
        let movies = seed_movies();
        assert_eq!(movies.len(), 15);

        let ids: HashSet<_> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 15);

        for movie in &movies {
            assert!(validate_movie(movie).is_ok(), "{} is invalid", movie.title);
        }
    }
}
