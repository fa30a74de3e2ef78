//! Naming conventions for generated classes
//!
//! Class names, namespaces, file paths and table names follow the host
//! framework's conventions: namespaces are separated by `\`, the root
//! namespace maps onto the application directory, and each class lives in a
//! `.php` file named after it.

use inflector::Inflector;
use std::path::{Path, PathBuf};

/// Namespace separator
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Extension of generated class files
pub const CLASS_FILE_EXTENSION: &str = "php";

/// Naming helpers for code generation
pub struct NameHelpers;

impl NameHelpers {
    /// Uppercase the first character, leaving the rest untouched
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::capitalize_first("userProfile"), "UserProfile");
    /// assert_eq!(NameHelpers::capitalize_first("user_profile"), "User_profile");
    /// ```
    #[must_use]
    pub fn capitalize_first(input: &str) -> String {
        let mut chars = input.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Whether `segment` is a valid class or namespace identifier
    ///
    /// Identifiers start with a letter, `_` or a non-ASCII character, followed
    /// by letters, digits, `_` or non-ASCII characters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert!(NameHelpers::is_identifier("UserRepository"));
    /// assert!(!NameHelpers::is_identifier(".."));
    /// assert!(!NameHelpers::is_identifier("9Lives"));
    /// ```
    #[must_use]
    pub fn is_identifier(segment: &str) -> bool {
        let mut chars = segment.chars();
        chars.next().is_some_and(|first| {
            (first.is_ascii_alphabetic() || first == '_' || !first.is_ascii())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii())
        })
    }

    /// Whether a class argument names a class the generator can place
    ///
    /// Leading separators are ignored. Every segment between `\` or `/`
    /// separators must be an identifier, so empty, `.` and `..` segments
    /// are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert!(NameHelpers::is_valid_class_name("Admin/UserRepository"));
    /// assert!(!NameHelpers::is_valid_class_name("../../escaped"));
    /// assert!(!NameHelpers::is_valid_class_name("Admin//UserRepository"));
    /// ```
    #[must_use]
    pub fn is_valid_class_name(name: &str) -> bool {
        let name = name.trim_start_matches(['\\', '/']);
        !name.is_empty() && name.split(['\\', '/']).all(Self::is_identifier)
    }

    /// Last segment of a namespaced class reference
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::class_basename(r"App\Domain\Widget"), "Widget");
    /// assert_eq!(NameHelpers::class_basename("Widget"), "Widget");
    /// ```
    #[must_use]
    pub fn class_basename(reference: &str) -> &str {
        reference
            .trim_end_matches(NAMESPACE_SEPARATOR)
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or_default()
    }

    /// Namespace part of a qualified class name (empty for a bare name)
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::namespace_of(r"App\Repositories\UserRepository"), r"App\Repositories");
    /// assert_eq!(NameHelpers::namespace_of("UserRepository"), "");
    /// ```
    #[must_use]
    pub fn namespace_of(qualified: &str) -> &str {
        qualified
            .rsplit_once(NAMESPACE_SEPARATOR)
            .map_or("", |(namespace, _)| namespace)
    }

    /// Fully qualify a class name under `default_namespace`
    ///
    /// Leading separators are dropped and `/` is accepted in place of `\`.
    /// A name already inside `root_namespace` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert_eq!(
    ///     NameHelpers::qualify_class("Admin/UserRepository", "App", r"App\Repositories"),
    ///     r"App\Repositories\Admin\UserRepository"
    /// );
    /// assert_eq!(
    ///     NameHelpers::qualify_class(r"App\Custom\UserRepository", "App", r"App\Repositories"),
    ///     r"App\Custom\UserRepository"
    /// );
    /// ```
    #[must_use]
    pub fn qualify_class(name: &str, root_namespace: &str, default_namespace: &str) -> String {
        let name = name
            .trim_start_matches(['\\', '/'])
            .replace('/', "\\");
        let root = root_namespace.trim_matches(NAMESPACE_SEPARATOR);

        if name.starts_with(&format!("{root}{NAMESPACE_SEPARATOR}")) {
            return name;
        }

        let default_namespace = default_namespace.trim_matches(NAMESPACE_SEPARATOR);
        if default_namespace.is_empty() {
            format!("{root}{NAMESPACE_SEPARATOR}{name}")
        } else {
            format!("{default_namespace}{NAMESPACE_SEPARATOR}{name}")
        }
    }

    /// File path of a qualified class, relative to the project root
    ///
    /// The root namespace is replaced by `app_dir`; the remaining segments
    /// become directories.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// # use std::path::{Path, PathBuf};
    /// assert_eq!(
    ///     NameHelpers::class_path(r"App\Repositories\UserRepository", "App", Path::new("app")),
    ///     PathBuf::from("app/Repositories/UserRepository.php")
    /// );
    /// ```
    #[must_use]
    pub fn class_path(qualified: &str, root_namespace: &str, app_dir: &Path) -> PathBuf {
        let root = root_namespace.trim_matches(NAMESPACE_SEPARATOR);
        let qualified = qualified.trim_start_matches(NAMESPACE_SEPARATOR);
        let relative = qualified
            .strip_prefix(&format!("{root}{NAMESPACE_SEPARATOR}"))
            .unwrap_or(qualified);

        let mut path = app_dir.to_path_buf();
        path.extend(relative.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()));
        path.set_extension(CLASS_FILE_EXTENSION);
        path
    }

    /// Conventional table name for a model class (`snake_case` plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use repokit::scaffold::naming::NameHelpers;
    /// assert_eq!(NameHelpers::table_name_for("OrderItem"), "order_items");
    /// assert_eq!(NameHelpers::table_name_for(r"App\Models\Category"), "categories");
    /// ```
    #[must_use]
    pub fn table_name_for(class: &str) -> String {
        Self::class_basename(class).to_snake_case().to_plural()
    }
}
