use aasaan_rs::{detect_language, simplify_text, ScriptProfile};

fn main() {
    env_logger::init();

    let samples = [
        "میں نے آج ایک کتاب پڑھی",
        "تہاڈا کی حال اے؟",
        "ਤੁਹਾਡਾ ਕੀ ਹਾਲ ਹੈ?",
        "Main kal aapke ghar aaunga",
        "Tuhada ki haal hai?",
        "The weather is nice today",
        "hello world beautiful day",
    ];

    for input in samples {
        println!("Input: {}", input);

        let profile = ScriptProfile::new(input);
        println!(
            "  profile: total={}, arabic={}, gurmukhi={}, latin={}, urdu_marks={}",
            profile.total, profile.arabic, profile.gurmukhi, profile.latin, profile.urdu_marks
        );
        println!("  arabic ratio: {:.3}", profile.arabic_ratio());

        let detection = detect_language(input);
        println!(
            "  detected: {} ({:.2}) - {}",
            detection.language,
            detection.confidence,
            detection.language.display_name()
        );
        println!(
            "  branch: {}",
            if detection.language.uses_script_rules() {
                "script tables"
            } else {
                "token lookup"
            }
        );
        println!("  simplified: {}\n", simplify_text(input));
    }
}
