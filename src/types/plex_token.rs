use nutype::nutype;

#[nutype(
    derive(Clone, Debug, Default, Deserialize, Display, Serialize, AsRef, Deref, PartialEq),
    default = "PLEXPLEX1-TOKENTOKEN",
    sanitize(trim),
    validate(not_empty)
)]
pub struct PlexToken(String);

#[cfg(test)]
mod plex_token_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_valid_token() {
        let fake_plex_token = "NJlYINZmB-Hdy78xubjR";
        let plex_token = PlexToken::try_new(fake_plex_token).unwrap();
        assert_eq!(fake_plex_token, plex_token.into_inner())
    }

    #[test]
    fn test_token_is_trimmed() {
        let plex_token = PlexToken::try_new("  NJlYINZmB-Hdy78xubjR ").unwrap();
        assert_eq!("NJlYINZmB-Hdy78xubjR", plex_token.into_inner())
    }

    #[test]
    fn test_invalid_token_empty() {
        let expected = Err(PlexTokenError::NotEmptyViolated);
        let result = PlexToken::try_new("");
        assert_eq!(expected, result);

        let result = PlexToken::try_new("   ");
        assert_eq!(expected, result)
    }
}
