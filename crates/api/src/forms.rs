//! Form bodies.
//!
//! Every field is optional so deserialization never fails on a missing key;
//! the `bags` crate's command parsers decide what is acceptable.  The
//! capitalised aliases match forms posted by older clients.

use serde::Deserialize;

use bags::{BagError, NewBag, NewClub};

/// `POST /bags`
#[derive(Debug, Default, Deserialize)]
pub struct CreateBagForm {
    #[serde(alias = "Player")]
    pub player: Option<String>,
    #[serde(alias = "Capacity")]
    pub capacity: Option<String>,
}

impl TryFrom<CreateBagForm> for NewBag {
    type Error = BagError;

    fn try_from(form: CreateBagForm) -> Result<Self, Self::Error> {
        NewBag::parse(form.player.as_deref(), form.capacity.as_deref())
    }
}

/// `POST /bags/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct AddClubForm {
    #[serde(alias = "Name")]
    pub name: Option<String>,
}

impl TryFrom<AddClubForm> for NewClub {
    type Error = BagError;

    fn try_from(form: AddClubForm) -> Result<Self, Self::Error> {
        NewClub::parse(form.name.as_deref())
    }
}
