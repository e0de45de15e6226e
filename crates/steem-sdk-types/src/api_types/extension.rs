use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// A reward-split entry routing `weight` basis points of a post's author
/// reward to `account`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub account: String,
    pub weight: u16,
}

impl Beneficiary {
    pub fn new(account: impl Into<String>, weight: u16) -> Self {
        Self {
            account: account.into(),
            weight,
        }
    }
}

/// Extensions accepted by `comment_options`.
///
/// Serialized as the chain's static-variant pair `[discriminant, payload]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommentOptionsExtension {
    Beneficiaries(Vec<Beneficiary>),
}

#[derive(Serialize)]
struct BeneficiariesPayload<'a> {
    beneficiaries: &'a [Beneficiary],
}

impl CommentOptionsExtension {
    pub const BENEFICIARIES_TAG: u8 = 0;

    pub fn discriminant(&self) -> u8 {
        match self {
            Self::Beneficiaries(_) => Self::BENEFICIARIES_TAG,
        }
    }
}

impl Serialize for CommentOptionsExtension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.discriminant())?;
        match self {
            Self::Beneficiaries(beneficiaries) => {
                tuple.serialize_element(&BeneficiariesPayload { beneficiaries })?
            }
        }
        tuple.end()
    }
}
