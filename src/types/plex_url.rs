use nutype::nutype;
use once_cell::sync::Lazy;
use regex::Regex;

// SOURCE: https://stackoverflow.com/a/3809435
static PLEX_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)").unwrap()
});

#[nutype(
    derive(Clone, Debug, Default, Deserialize, Display, Serialize, AsRef, Deref, PartialEq),
    default = "http://127.0.0.1:32400",
    validate(not_empty, regex = PLEX_URL_REGEX)
)]
pub struct PlexUrl(String);

#[cfg(test)]
mod plex_url_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_valid_plex_url() {
        let valid = "http://127.0.0.1:32400";
        let result = PlexUrl::try_new(valid).unwrap();
        assert_eq!(valid, result.into_inner());

        let valid = "http://127.0.0.1:2112";
        let result = PlexUrl::try_new(valid).unwrap();
        assert_eq!(valid, result.into_inner());

        let valid = "https://plex.domain.com";
        let result = PlexUrl::try_new(valid).unwrap();
        assert_eq!(valid, result.into_inner());

        let valid = "https://domain.com/plex";
        let result = PlexUrl::try_new(valid).unwrap();
        assert_eq!(valid, result.into_inner());
    }

    #[test]
    fn test_invalid_plex_url_empty() {
        let expected = Err(PlexUrlError::NotEmptyViolated);
        let result = PlexUrl::try_new("");
        assert_eq!(expected, result);
    }

    #[test]
    fn test_invalid_plex_url_regex() {
        let expected = Err(PlexUrlError::RegexViolated);

        let result = PlexUrl::try_new("me@thegoogle.com");
        assert_eq!(result, expected);

        let result = PlexUrl::try_new("htt://127.0.0.1:32400");
        assert_eq!(result, expected);

        let result = PlexUrl::try_new("127.0.0.1:32400");
        assert_eq!(result, expected);
    }
}
