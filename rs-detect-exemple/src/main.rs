use rs_detect_core::detector::Detector;
use rs_detect_core::detector::combined::CombinedDetector;
use rs_detect_core::detector::ngram::NgramDetector;
use rs_detect_core::detector::stopwords::StopwordDetector;
use rs_detect_core::profile::source::DirectorySource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load all profiles from the "profiles" directory (.bin files).
    // An empty or missing directory is fine: the n-gram detector then
    // simply never produces results and the stopword signal carries
    // detection alone.
    let ngram = NgramDetector::from_source(&DirectorySource::new("./profiles"))?;
    println!("Loaded profiles: {:?}", ngram.languages());

    // The stopword/char-hint tables are built in, no loading needed
    let combined = CombinedDetector::new(ngram, StopwordDetector::new());

    let samples = [
        // Plain English sentence
        "the quick brown fox jumps over the lazy dog",
        // Short Norwegian input: stopword evidence is trusted alone
        "Dette er en test",
        // A single hint character is enough evidence on its own
        "ß",
        // German with diacritics surviving normalization
        "der schnelle braune Fuchs springt über den faulen Hund",
        // Nothing scorable at all
        "12345 !!!",
    ];

    for text in samples {
        println!();
        println!("Input: {text:?}");

        // Top choice, or none when there is no evidence
        match combined.detect(text) {
            Some(language) => println!("Detected: {language}"),
            None => println!("Detected: (no evidence)"),
        }

        // Full ranking; scores are relative within this call only
        for result in combined.detect_all(text).iter().take(3) {
            println!("  {} {:.4}", result.language, result.score);
        }
    }

    Ok(())
}
