/// Defines a newtype ID wrapper around an opaque string identifier
/// and generates:
/// - derives (Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display`
/// - `From<String>`, `From<&str>` and `From<$name> for String`
/// - `new`, `as_str`, `is_empty` and `generate` (random v4 UUID)
///
/// Usage:
///   define_id_type!(InspectionId);
#[macro_export]
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub ::std::string::String);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(v: ::std::string::String) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name(v.to_string())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<::std::string::String>) -> Self {
                $name(value.into())
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                $name(::uuid::Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    define_id_type!(WidgetId);

    #[test]
    fn test_id_display_and_conversions() {
        let id = WidgetId::new("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(WidgetId::from("abc"), id);

        let raw: String = id.into();
        assert_eq!(raw, "abc");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = WidgetId::generate();
        let b = WidgetId::generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = WidgetId::new("64f1c0ffee");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"64f1c0ffee\"");
        let back: WidgetId = serde_json::from_str("\"64f1c0ffee\"").unwrap();
        assert_eq!(back, id);
    }
}
