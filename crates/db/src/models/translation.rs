//! Helpers shared by translatable models.

use herald_core::locale::Locale;

/// A per-locale row of a translatable model.
pub trait Translation {
    /// Raw locale code stored on the row.
    fn locale_code(&self) -> &str;
}

/// Locales a record has content in, in translation insertion order.
///
/// Rows carrying an unsupported locale code are skipped. A record left with
/// no usable rows is still presented once, in the default locale.
pub fn available_locales<T: Translation>(translations: &[T]) -> Vec<Locale> {
    let locales: Vec<Locale> = translations
        .iter()
        .filter_map(|t| match t.locale_code().parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(_) => {
                tracing::warn!(locale = t.locale_code(), "Skipping translation with unsupported locale");
                None
            }
        })
        .collect();

    if locales.is_empty() {
        tracing::warn!("No usable translations, falling back to the default locale");
        return vec![Locale::default()];
    }
    locales
}

/// Pick the translation for `locale`, falling back to the default locale and
/// then to the first translation.
pub fn translation_for<'a, T: Translation>(translations: &'a [T], locale: &Locale) -> Option<&'a T> {
    translations
        .iter()
        .find(|t| t.locale_code() == locale.as_str())
        .or_else(|| translations.iter().find(|t| t.locale_code() == herald_core::locale::DEFAULT_LOCALE))
        .or_else(|| translations.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl Translation for Row {
        fn locale_code(&self) -> &str {
            self.0
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("en", "English"), Row("fr", "Français"), Row("bogus", "?")]
    }

    #[test]
    fn locales_keep_insertion_order_and_skip_invalid() {
        let locales: Vec<String> = available_locales(&rows())
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(locales, vec!["en", "fr"]);
    }

    #[test]
    fn no_usable_translations_fall_back_to_default_locale() {
        let bogus_only = vec![Row("bogus", "?")];
        let locales: Vec<String> = available_locales(&bogus_only)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(locales, vec!["en"]);

        let empty: Vec<Row> = Vec::new();
        assert_eq!(available_locales(&empty), vec![Locale::default()]);
    }

    #[test]
    fn exact_match_preferred() {
        let fr: Locale = "fr".parse().unwrap();
        assert_eq!(translation_for(&rows(), &fr).unwrap().1, "Français");
    }

    #[test]
    fn falls_back_to_default_locale() {
        let de: Locale = "de".parse().unwrap();
        assert_eq!(translation_for(&rows(), &de).unwrap().1, "English");
    }

    #[test]
    fn falls_back_to_first_without_default() {
        let only_fr = vec![Row("fr", "Français")];
        let de: Locale = "de".parse().unwrap();
        assert_eq!(translation_for(&only_fr, &de).unwrap().1, "Français");
        let empty: Vec<Row> = Vec::new();
        assert!(translation_for(&empty, &de).is_none());
    }
}
