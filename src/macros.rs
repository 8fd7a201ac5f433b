/// Builds a [`ClaimSet`](crate::ClaimSet) from literal keys and values.
///
/// `null`, `true`, and `false` are recognized as keywords; every other value goes
/// through [`ClaimValue::from`](crate::ClaimValue::from). Parenthesize compound
/// expressions. For array or object payloads, push a pre-rendered
/// [`ClaimValue`](crate::ClaimValue) with [`Claim::new`](crate::Claim::new)
/// instead.
///
/// # Examples
///
/// ```rust
/// use jwt_claims::claims;
///
/// let set = claims! {
///     "iss": "auth0",
///     "iat": 1516239022,
///     "active": true,
///     "middle_name": null,
/// };
///
/// assert_eq!(
///     set.to_fragment().unwrap(),
///     r#""iss":"auth0","iat":1516239022,"active":true,"middle_name":null"#
/// );
/// ```
#[macro_export]
macro_rules! claims {
    // Empty set
    () => {
        $crate::ClaimSet::new()
    };

    // One entry per "key": value pair, input order preserved
    ( $( $key:literal : $value:tt ),* $(,)? ) => {{
        let mut set = $crate::ClaimSet::new();
        $(
            set.push($crate::Claim::new($key, $crate::claim_value!($value)));
        )*
        set
    }};
}

/// Converts a value-position token from [`claims!`] into a
/// [`ClaimValue`](crate::ClaimValue).
#[macro_export]
macro_rules! claim_value {
    (null) => {
        $crate::ClaimValue::Null
    };

    (true) => {
        $crate::ClaimValue::Boolean(true)
    };

    (false) => {
        $crate::ClaimValue::Boolean(false)
    };

    ($value:expr) => {
        $crate::ClaimValue::from($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::ClaimValue;

    #[test]
    fn test_claims_macro_empty() {
        let set = claims! {};
        assert!(set.is_empty());
    }

    #[test]
    fn test_claims_macro_keywords() {
        let set = claims! {
            "active": true,
            "deleted": false,
            "middle_name": null,
        };
        assert_eq!(set.get("active").map(|c| c.value().clone()), Some(ClaimValue::Boolean(true)));
        assert_eq!(set.get("deleted").map(|c| c.value().clone()), Some(ClaimValue::Boolean(false)));
        assert_eq!(set.get("middle_name").map(|c| c.value().clone()), Some(ClaimValue::Null));
    }

    #[test]
    fn test_claims_macro_order_and_types() {
        let set = claims! {
            "iss": "auth0",
            "iat": 1516239022,
            "score": 0.5,
        };
        let keys: Vec<_> = set.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["iss", "iat", "score"]);
        assert_eq!(
            set.to_fragment().unwrap(),
            r#""iss":"auth0","iat":1516239022,"score":0.5"#
        );
    }

    #[test]
    fn test_claims_macro_expression_values() {
        let subject = String::from("user-1");
        let set = claims! { "sub": (subject.clone()) };
        assert_eq!(set.get("sub").and_then(|c| c.value().as_str()), Some("user-1"));
    }
}
