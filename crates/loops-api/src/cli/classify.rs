//! `loops classify` -- run the language classifier on a piece of text.

use console::style;

use loops_core::language::{LanguageClassifier, contains_romanized_sinhala, contains_sinhala_script};
use loops_types::config::DetectionPolicy;

pub fn classify_text(text: &str, policy: DetectionPolicy, json: bool) -> anyhow::Result<()> {
    let language = LanguageClassifier::new(policy).classify(text);

    if json {
        let out = serde_json::json!({
            "language": language,
            "policy": policy,
            "sinhala_script": contains_sinhala_script(text),
            "romanized_sinhala": contains_romanized_sinhala(text),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "  {} {}  {}",
            style("Language:").bold(),
            style(language).cyan().bold(),
            style(format!("({policy:?} policy)").to_lowercase()).dim()
        );
    }

    Ok(())
}
