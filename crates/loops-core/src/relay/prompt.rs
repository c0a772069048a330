//! System directive composition.
//!
//! The directive is the brand profile plus a fixed rule set. A forced
//! language mode appends a short hint after the rules; `auto` appends nothing
//! and the model is left to mirror the user's language.

use loops_types::chat::{Language, LanguageMode};
use loops_types::config::BrandProfile;

/// Hint appended to the directive when the reply language is forced.
pub fn language_hint(mode: LanguageMode) -> &'static str {
    match mode.forced() {
        Some(Language::En) => "(Reply only in English)",
        Some(Language::Si) => "(Reply only in Sinhala)",
        None => "",
    }
}

/// Build the full system directive for one relay call.
pub fn build_system_directive(brand: &BrandProfile, sentinel: &str, mode: LanguageMode) -> String {
    let mut directive = format!(
        "\nYou are {name}'s digital sales representative.\n\
         Always reply in the same language as the user (English or Sinhala).\n\
         \n\
         Brand info:\n\
         - Working Hours: {hours}\n\
         - Location: {location}\n\
         - Services: {services}\n\
         - Contact: {contact}\n\
         \n\
         Rules:\n\
         1. If a question is unrelated to {name} or marketing, start your reply with {sentinel}, and ask for name/email/message.\n\
         2. Keep responses short and friendly.\n\
         3. If language mode is forced (en or si), respond only in that language.\n",
        name = brand.name,
        hours = brand.working_hours,
        location = brand.location,
        services = brand.services.join(", "),
        contact = brand.contact,
    );
    directive.push_str(language_hint(mode));
    directive
}
