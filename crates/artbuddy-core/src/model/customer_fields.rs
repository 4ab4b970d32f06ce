//! Value types carried by a [`Customer`](super::Customer)

use once_cell::sync::Lazy;
use regex::Regex;

use super::value::{starts_non_blank, validated_string};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[[:alnum:]]+([+_.-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*[[:alnum:]]+(-[[:alnum:]]+)*$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+( [[:alnum:]]+)*$").expect("valid tag regex"));

validated_string!(
    /// A customer's name; the customer's identity (exact, case-sensitive)
    Name,
    field = "name",
    constraints = "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    validator = |raw| NAME_RE.is_match(raw),
);

validated_string!(
    /// A customer's phone number
    Phone,
    field = "phone",
    constraints = "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    validator = |raw| PHONE_RE.is_match(raw),
);

validated_string!(
    /// A customer's email address
    Email,
    field = "email",
    constraints = "Emails should be of the format local-part@domain: the local-part holds alphanumerics \
                   separated by single +_.- characters, and the domain is made of labels separated by \
                   periods, the last of which is at least 2 characters long",
    validator = is_valid_email,
);

validated_string!(
    /// A customer's street address
    Address,
    field = "address",
    constraints = "Addresses can take any values, and it should not be blank",
    validator = starts_non_blank,
);

validated_string!(
    /// A free-form label attached to customers and commissions
    Tag,
    field = "tag",
    constraints = "Tag names should be alphanumeric words separated by single spaces",
    validator = |raw| TAG_RE.is_match(raw),
);

fn is_valid_email(raw: &str) -> bool {
    if !EMAIL_RE.is_match(raw) {
        return false;
    }
    raw.rsplit(['.', '@'])
        .next()
        .is_some_and(|last_label| last_label.len() >= 2)
}
