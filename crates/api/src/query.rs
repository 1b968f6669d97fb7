//! Query-string parameter types for API handlers.

/// Query parameters for `GET /api/dogs` (`?status=&name=`).
///
/// Interpreted by [`shelter_core::dog::DogListFilter::from_params`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DogListParams {
    pub status: Option<String>,
    pub name: Option<String>,
}

impl DogListParams {
    /// Pick parameters out of decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "status" => &mut params.status,
                "name" => &mut params.name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}
