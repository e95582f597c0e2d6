use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// A typed entity living in a collection on a remote service.
///
/// Implementing `Resource` ties a decodable Rust type to the path segment of
/// its collection. The default path is derived from the type name: the last
/// path segment, lower-cased, with an `s` appended, so `Article` maps to
/// `articles`. The derivation is deliberately naive and does not attempt
/// irregular plurals; types like `Person` or `Category` should override
/// [`Resource::path`].
///
/// ```
/// use restkit::Resource;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Article {
///     title: String,
/// }
///
/// impl Resource for Article {}
///
/// assert_eq!(Article::path(), "articles");
/// ```
pub trait Resource: DeserializeOwned {
    /// Path segment addressing this resource's collection, with no leading
    /// or trailing slash.
    fn path() -> Cow<'static, str> {
        Cow::Owned(derived_path(std::any::type_name::<Self>()))
    }
}

/// A [`Resource`] with a unique identifier, addressable at an item URL.
///
/// Separating identity into its own trait keeps collection-only operations
/// available to types that have no usable id field (aggregates, reports),
/// while item lookup, update and delete require the full capability.
pub trait IdentifiedResource: Resource {
    /// Identifier type; its `Display` form becomes the final URL segment.
    type Id: std::fmt::Display + PartialEq;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;
}

/// Collection path derived from a Rust type name.
///
/// Strips generic arguments and module qualifiers, lower-cases the rest and
/// appends an `s`.
pub(crate) fn derived_path(type_name: &str) -> String {
    let without_generics = type_name.split('<').next().unwrap_or(type_name);
    let short = without_generics.rsplit("::").next().unwrap_or(without_generics);
    format!("{}s", short.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Widget {
        #[allow(dead_code)]
        id: u64,
    }

    impl Resource for Widget {}

    #[derive(Deserialize)]
    struct Person {
        id: u64,
    }

    impl Resource for Person {
        fn path() -> Cow<'static, str> {
            Cow::Borrowed("people")
        }
    }

    impl IdentifiedResource for Person {
        type Id = u64;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn default_path_lowercases_and_pluralizes() {
        assert_eq!(Widget::path(), "widgets");
    }

    #[test]
    fn overridden_path_wins() {
        assert_eq!(Person::path(), "people");
    }

    #[test]
    fn derived_path_strips_modules_and_generics() {
        assert_eq!(derived_path("my_crate::models::Article"), "articles");
        assert_eq!(derived_path("Account"), "accounts");
        assert_eq!(
            derived_path("my_crate::models::Envelope<my_crate::models::Article>"),
            "envelopes"
        );
    }

    #[test]
    fn identifier_is_exposed_by_reference() {
        let person = Person { id: 7 };
        assert_eq!(*person.id(), 7);
    }
}
