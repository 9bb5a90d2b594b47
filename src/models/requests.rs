/// Query string of the match proxy endpoint
///
/// Only `matchId` is recognised. When it is repeated the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub match_id: Option<String>,
}

impl MatchQuery {
    pub const MATCH_ID_PARAM: &'static str = "matchId";

    /// Build from decoded query pairs; never fails
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let match_id = pairs
            .into_iter()
            .find(|(key, _)| key == Self::MATCH_ID_PARAM)
            .map(|(_, value)| value);

        Self { match_id }
    }
}
