use crate::models::CommentTranslation;
use crate::scrapers::Translator;
use tracing::{debug, warn};

/// The untranslated description, tagged as the default-language entry
pub fn original_comment(text: &str, source_language: &str) -> CommentTranslation {
    CommentTranslation {
        property_comment: text.to_string(),
        auto_translated: false,
        language: source_language.to_string(),
        default_language: true,
    }
}

/// Original first, then one entry per target language in the requested order.
/// A language whose translation fails is left out; the others are unaffected.
pub async fn translate_comment(
    translator: &dyn Translator,
    text: &str,
    source_language: &str,
    targets: &[String],
) -> Vec<CommentTranslation> {
    let mut comments = Vec::with_capacity(targets.len() + 1);
    comments.push(original_comment(text, source_language));

    for language in targets {
        match translator.translate(text, language).await {
            Ok(translated) => {
                debug!(language = %language, "Translated description");
                comments.push(CommentTranslation {
                    property_comment: translated,
                    auto_translated: true,
                    language: language.clone(),
                    default_language: false,
                });
            }
            Err(e) => {
                warn!(language = %language, error = %e, "Translation failed, skipping language");
            }
        }
    }

    comments
}
