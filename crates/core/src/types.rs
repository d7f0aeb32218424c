//! Domain types for Kin.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A postal address.
///
/// Fields are private and never change after [`Address::new`]. No format or
/// range checks: whatever the caller supplies is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    house_number: i32,
    postcode: String,
    city: String,
}

impl Address {
    /// Build an address from its four parts, stored verbatim.
    pub fn new(
        street: impl Into<String>,
        house_number: i32,
        postcode: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            house_number,
            postcode: postcode.into(),
            city: city.into(),
        }
    }

    /// Street name as supplied.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// House number as supplied; may be zero or negative.
    pub fn house_number(&self) -> i32 {
        self.house_number
    }

    /// Postcode as supplied, unchecked.
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// City as supplied.
    pub fn city(&self) -> &str {
        &self.city
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// An individual with one address and an ordered list of hobbies.
///
/// `H` is the hobby type, left entirely to the caller. Pass `Arc<T>` (or a
/// reference) when hobby values are shared between people; `Person` only
/// holds whatever it is given, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person<H> {
    first_name: String,
    second_name: String,
    address: Address,
    hobbies: Vec<H>,
}

impl<H> Person<H> {
    /// Build a person; `hobbies` is collected in iteration order.
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        address: Address,
        hobbies: impl IntoIterator<Item = H>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            address,
            hobbies: hobbies.into_iter().collect(),
        }
    }

    /// First name as supplied.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Second name as supplied.
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// The address this person owns.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Hobbies in insertion order. Empty if none were supplied.
    pub fn hobbies(&self) -> &[H] {
        &self.hobbies
    }

    /// Consumes the person, returning `(first_name, second_name, address, hobbies)`.
    pub fn into_parts(self) -> (String, String, Address, Vec<H>) {
        (
            self.first_name,
            self.second_name,
            self.address,
            self.hobbies,
        )
    }
}

// Compile-time thread-safety assertions.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Address>();
    assert_send_sync::<Person<String>>();
};
