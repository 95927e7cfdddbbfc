//! Stopword and diacritic-hint detection.
//!
//! Two independent evidence types, combined additively per language:
//! membership of input tokens in per-language stopword lists, and the
//! mere presence of diacritic characters that are strong signals for
//! a small set of languages (`ß` for German, `þ` for Icelandic, ...).
//! Both carry their own IDF weighting so that words and characters
//! shared by many languages contribute little or nothing.

use std::collections::{HashMap, HashSet};

use super::{DetectionResult, Detector, tokenize};

/// Per-language stopword lists, ONIX 3-letter codes.
const STOPWORDS: &[(&str, &[&str])] = &[
	("eng", &[
		"the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
		"have", "has", "had", "do", "does", "did", "will", "would", "shall",
		"should", "may", "might", "must", "can", "could", "this", "that",
		"these", "those", "not", "and", "but", "or", "if", "then", "than",
	]),
	("fre", &[
		"le", "la", "les", "un", "une", "des", "du", "de", "est", "sont",
		"suis", "nous", "vous", "ils", "elles", "ce", "cette", "ces", "mon",
		"ton", "son", "notre", "votre", "leur", "que", "qui", "dans", "pour",
		"pas", "avec", "sur", "mais", "ou", "et", "au", "aux",
	]),
	("ger", &[
		"der", "die", "das", "ein", "eine", "ist", "sind", "war", "waren",
		"und", "oder", "aber", "nicht", "auch", "ich", "du", "er", "sie",
		"wir", "ihr", "den", "dem", "des", "auf", "mit", "von", "zu",
		"haben", "wird", "kann", "nach", "aus", "wie", "noch", "wenn",
	]),
	("spa", &[
		"el", "la", "los", "las", "un", "una", "unos", "unas", "es", "son",
		"fue", "del", "de", "en", "que", "por", "con", "para", "como",
		"pero", "este", "esta", "estos", "estas", "ese", "esa", "hay",
		"muy", "todo", "sino", "desde", "hasta", "sobre", "entre",
	]),
	("ita", &[
		"il", "lo", "la", "gli", "le", "un", "uno", "una", "di", "del",
		"della", "dei", "delle", "che", "non", "sono", "per", "con",
		"questo", "questa", "questi", "quello", "quella", "anche", "come",
		"suo", "sua", "loro", "fra", "tra", "tutto", "ogni", "molto", "sempre",
	]),
	("por", &[
		"o", "os", "um", "uma", "uns", "umas", "de", "do", "da", "dos",
		"das", "em", "no", "na", "nos", "nas", "que", "por", "com", "para",
		"como", "mas", "ou", "se", "este", "esta", "esse", "essa", "isso",
		"muito", "mais", "foi", "ser", "ter", "seu", "sua",
	]),
	("dut", &[
		"de", "het", "een", "van", "en", "in", "is", "dat", "op", "te",
		"aan", "met", "voor", "er", "zijn", "die", "dit", "niet", "ook",
		"maar", "om", "bij", "nog", "wel", "dan", "naar", "uit", "wat",
		"als", "werd", "meer", "hun", "waar", "kunnen", "heeft",
	]),
	("nob", &[
		"og", "i", "er", "det", "en", "et", "at", "den", "til", "av",
		"som", "med", "har", "var", "men", "om", "vi", "kan", "han",
		"hun", "jeg", "ikke", "seg", "skulle", "ville", "ble", "fra",
		"denne", "dette", "eller", "etter", "over", "under", "bare",
	]),
	("nno", &[
		"og", "i", "er", "det", "ei", "eit", "den", "til", "av", "som",
		"med", "har", "var", "men", "om", "vi", "kan", "han", "ho",
		"eg", "ikkje", "seg", "skulle", "ville", "vart", "frå", "denne",
		"dette", "eller", "etter", "kva", "nokon", "noko", "sjølv",
	]),
	("swe", &[
		"och", "i", "att", "en", "det", "som", "den", "av", "med", "har",
		"till", "var", "jag", "kan", "inte", "men", "ett", "om", "hans",
		"ska", "efter", "hade", "sedan", "mycket", "alla", "sina",
		"detta", "dessa", "skulle", "bara", "utan", "eller", "vid", "varit",
	]),
	("dan", &[
		"og", "i", "er", "det", "en", "den", "til", "af", "som", "med",
		"har", "var", "men", "om", "vi", "kan", "han", "hun", "jeg",
		"ikke", "sig", "skulle", "ville", "blev", "fra", "denne", "dette",
		"eller", "efter", "over", "under", "kun", "også", "meget",
	]),
	("cat", &[
		"el", "la", "els", "les", "un", "una", "uns", "unes", "de", "del",
		"dels", "al", "als", "amb", "per", "que", "com", "tot", "aquesta",
		"aquest", "aquestes", "aquell", "aquella", "molt", "seva", "seu",
		"han", "hem", "heu", "ser", "dins", "sobre",
	]),
	("pol", &[
		"nie", "to", "się", "jest", "na", "co", "tak", "za", "do",
		"jak", "ale", "czy", "tym", "po", "te", "jej", "go", "tego",
		"od", "ich", "dla", "przez", "tylko", "oraz", "jego", "jeszcze",
		"który", "która", "które", "bardzo", "już", "także", "może", "tutaj",
	]),
	("rum", &[
		"de", "la", "al", "ale", "din", "pe", "cu", "este", "sunt", "fost",
		"fi", "nu", "ce", "care", "mai", "dar", "sau", "ca", "lui", "ei",
		"lor", "acest", "această", "prin", "pentru", "aici", "doar",
		"dacă", "foarte", "toate", "chiar", "avea", "putea", "trebui",
	]),
	("tur", &[
		"bir", "ve", "bu", "da", "de", "ile", "gibi", "için",
		"ama", "var", "olan", "olarak", "daha", "en", "kadar",
		"çok", "bazı", "sonra", "herhangi", "ya", "aynı",
		"hem", "ise", "ancak", "bile", "tarafından", "oldu",
		"şey", "her", "olmuştur", "bunun", "eden",
	]),
	("fin", &[
		"ja", "on", "ei", "se", "että", "oli", "olla", "ole",
		"hän", "mutta", "tai", "niin", "kuin", "kun", "jo",
		"vain", "mitä", "joka", "myös", "ovat", "siitä",
		"heidän", "tämä", "tässä", "tällä", "sen", "sitä", "mikä",
		"kanssa", "ennen", "kaikki", "paljon", "hyvin", "vielä",
	]),
	("hun", &[
		"a", "az", "egy", "is", "nem", "hogy", "volt", "van", "meg",
		"ez", "aki", "ami", "ezt", "mint", "de", "csak", "még",
		"vagy", "mind", "azt", "igen", "kell", "lesz", "lett",
		"fel", "arra", "erre", "több", "és", "sem",
		"már", "nagyon", "akkor", "mikor",
	]),
	("cze", &[
		"je", "to", "na", "se", "ne", "si", "ale", "jak", "tak", "pod",
		"pro", "za", "po", "aby", "jsou", "jako", "bylo", "jeho",
		"její", "který", "která", "které", "nebo",
		"byl", "byla", "tento", "tato", "tedy", "však",
		"jen", "již", "velmi", "také", "jejich",
	]),
	("slo", &[
		"je", "to", "na", "sa", "ne", "si", "ale", "ako", "tak", "za",
		"po", "aby", "bol", "bola", "boli", "jeho", "jej",
		"ktorý", "ktorá", "ktoré", "alebo",
		"tento", "táto", "preto", "však",
		"len", "veľmi", "tiež", "ich", "sme", "som", "ste",
	]),
	("hrv", &[
		"je", "to", "na", "se", "ne", "su", "ali", "kao", "tako", "za",
		"po", "bio", "bila", "bili", "njegov", "njezin",
		"koji", "koja", "koje", "ili", "ovaj", "ova",
		"zato", "ipak", "samo", "nego", "ima", "biti", "vrlo",
		"njihov", "tome", "toga", "nisu", "smo",
	]),
	("lit", &[
		"ir", "yra", "tai", "kad", "ne", "ar", "bet", "kaip", "taip",
		"nuo", "buvo", "jo", "jos", "kuris", "kuri", "kurie",
		"arba", "šis", "ši", "šie", "todėl",
		"tačiau", "tik", "labai", "dar", "jau",
		"gali", "turi", "apie", "tarp", "pagal", "prie", "dėl",
	]),
	("ind", &[
		"dan", "di", "yang", "ini", "itu", "dengan", "untuk", "dari",
		"pada", "adalah", "ke", "tidak", "akan", "juga", "sudah",
		"ada", "bisa", "oleh", "atau", "saya", "kami", "mereka",
		"anda", "sangat", "telah", "hanya", "tetapi", "seperti",
		"bahwa", "jika", "karena", "antara", "lebih", "semua",
	]),
	("afr", &[
		"die", "en", "van", "in", "is", "het", "wat", "vir", "op", "met",
		"nie", "ek", "sy", "hy", "ons", "hulle", "daar", "kan", "sal",
		"hul", "was", "ook", "maar", "aan", "dit", "nog", "tot",
		"deur", "baie", "onder", "oor", "hierdie", "daardie", "elke",
	]),
	("isl", &[
		"og", "að", "er", "í", "á", "ég",
		"var", "en", "ekki", "um", "við", "til", "af",
		"þá", "þetta", "sem", "með",
		"hefur", "hefði", "eru", "verður", "hans",
		"hennar", "þess", "þeirra", "hún", "hann",
		"vera", "einn", "eitt", "einu", "eftir", "yfir", "undir",
	]),
	("lat", &[
		"et", "in", "est", "non", "ad", "cum", "sed", "quod", "qui",
		"quae", "quam", "sunt", "aut", "ab", "ex", "per", "hoc",
		"haec", "enim", "atque", "eius", "esse", "ipse", "ipsa",
		"etiam", "tamen", "autem", "ante", "post", "omnis", "omnia",
		"inter", "erat", "fuit",
	]),
];

/// Diacritic characters and the languages they hint at.
///
/// Many-to-many: one character may signal several languages, and a
/// language may be signalled by several characters. Characters shared
/// widely get a correspondingly low IDF weight.
const CHAR_HINTS: &[(char, &[&str])] = &[
	('ß', &["ger"]),
	('æ', &["nob", "nno", "dan", "isl"]),
	('ø', &["nob", "nno", "dan"]),
	('å', &["nob", "nno", "swe", "dan"]),
	('ä', &["ger", "swe", "fin"]),
	('ö', &["ger", "swe", "fin", "tur", "hun", "isl"]),
	('ü', &["ger", "tur", "hun"]),
	('ñ', &["spa"]),
	('ç', &["fre", "por", "cat", "tur"]),
	('ã', &["por"]),
	('õ', &["por"]),
	('ı', &["tur"]),
	('ğ', &["tur"]),
	('ş', &["tur", "rum"]),
	('ă', &["rum"]),
	('ș', &["rum"]),
	('ț', &["rum"]),
	('ł', &["pol"]),
	('ż', &["pol"]),
	('ź', &["pol"]),
	('ą', &["pol", "lit"]),
	('ę', &["pol", "lit"]),
	('ė', &["lit"]),
	('ų', &["lit"]),
	('ū', &["lit"]),
	('č', &["cze", "slo", "hrv", "lit"]),
	('š', &["cze", "slo", "hrv", "lit"]),
	('ž', &["cze", "slo", "hrv", "lit"]),
	('ř', &["cze"]),
	('ě', &["cze"]),
	('ů', &["cze"]),
	('ľ', &["slo"]),
	('ĺ', &["slo"]),
	('ő', &["hun"]),
	('ű', &["hun"]),
	('ð', &["isl"]),
	('þ', &["isl"]),
	('à', &["fre", "ita", "cat", "por"]),
	('è', &["fre", "ita", "cat"]),
	('ì', &["ita"]),
	('ò', &["ita", "cat"]),
	('ù', &["fre", "ita"]),
	('é', &["fre", "spa", "por", "cat", "hun", "isl"]),
	('í', &["spa", "por", "cat", "hun", "isl", "cze", "slo"]),
	('ó', &["spa", "por", "cat", "pol", "hun", "isl", "cze", "slo"]),
	('ú', &["spa", "por", "cat", "hun", "isl", "cze", "slo"]),
	('á', &["spa", "por", "cat", "hun", "isl", "cze", "slo"]),
	('ý', &["cze", "slo", "isl"]),
	('ê', &["fre", "por"]),
	('â', &["fre", "rum", "tur"]),
	('î', &["fre", "rum"]),
	('û', &["fre"]),
	('ô', &["fre", "slo"]),
	('ë', &["fre", "dut"]),
	('ï', &["fre", "dut", "cat"]),
];

/// Scores input text against per-language stopword lists and
/// diacritic-hint characters.
///
/// All tables and both IDF weightings are built once, in the
/// constructor; detection calls are read-only. Languages that gather
/// zero evidence are excluded from the ranking: absence of evidence
/// is not evidence of absence.
#[derive(Debug)]
pub struct StopwordDetector {
	/// Language order is table order, which keeps ranking stable.
	stopwords: Vec<(String, HashSet<String>)>,
	char_hints: HashMap<char, Vec<String>>,
	word_idf: HashMap<String, f64>,
	char_idf: HashMap<char, f64>,
}

impl StopwordDetector {
	/// Builds the tables and their IDF weights.
	pub fn new() -> Self {
		let stopwords: Vec<(String, HashSet<String>)> = STOPWORDS
			.iter()
			.map(|(language, words)| {
				(
					(*language).to_owned(),
					words.iter().map(|w| (*w).to_owned()).collect(),
				)
			})
			.collect();

		let total = stopwords.len() as f64;

		// How many languages' lists contain each word
		let mut word_df: HashMap<&str, usize> = HashMap::new();
		for (_, words) in STOPWORDS {
			for word in *words {
				*word_df.entry(word).or_insert(0) += 1;
			}
		}
		let word_idf = word_df
			.into_iter()
			.map(|(word, df)| {
				let weight = if df >= STOPWORDS.len() {
					0.0
				} else {
					(total / df as f64).ln()
				};
				(word.to_owned(), weight)
			})
			.collect();

		// How many languages each character hints at
		let char_hints: HashMap<char, Vec<String>> = CHAR_HINTS
			.iter()
			.map(|(c, languages)| {
				(*c, languages.iter().map(|l| (*l).to_owned()).collect())
			})
			.collect();
		let char_idf = CHAR_HINTS
			.iter()
			.map(|(c, languages)| {
				let weight = if languages.len() >= STOPWORDS.len() {
					0.0
				} else {
					(total / languages.len() as f64).ln()
				};
				(*c, weight)
			})
			.collect();

		Self {
			stopwords,
			char_hints,
			word_idf,
			char_idf,
		}
	}

	/// The languages the tables cover, in table order.
	pub fn languages(&self) -> Vec<&str> {
		self.stopwords.iter().map(|(l, _)| l.as_str()).collect()
	}
}

impl Default for StopwordDetector {
	fn default() -> Self {
		Self::new()
	}
}

impl Detector for StopwordDetector {
	fn detect_all(&self, text: &str) -> Vec<DetectionResult> {
		let tokens = tokenize(text);

		// Distinct hint characters present in the input, first-seen order
		let mut seen = HashSet::new();
		let mut hint_chars = Vec::new();
		for c in text.to_lowercase().chars() {
			if self.char_hints.contains_key(&c) && seen.insert(c) {
				hint_chars.push(c);
			}
		}

		if tokens.is_empty() && hint_chars.is_empty() {
			return Vec::new();
		}

		let mut scores: HashMap<&str, f64> = HashMap::new();

		for (language, words) in &self.stopwords {
			let score: f64 = tokens
				.iter()
				.filter(|token| words.contains(*token))
				.map(|token| self.word_idf.get(token).copied().unwrap_or(0.0))
				.sum();
			if score > 0.0 {
				*scores.entry(language).or_insert(0.0) += score;
			}
		}

		for c in &hint_chars {
			let weight = self.char_idf.get(c).copied().unwrap_or(0.0);
			if weight > 0.0 {
				for language in &self.char_hints[c] {
					*scores.entry(language).or_insert(0.0) += weight;
				}
			}
		}

		// Table order, then stable sort: ranking is deterministic
		let mut results: Vec<DetectionResult> = self
			.stopwords
			.iter()
			.filter_map(|(language, _)| {
				scores.get(language.as_str()).map(|score| DetectionResult {
					language: language.clone(),
					score: *score,
				})
			})
			.collect();
		results.sort_by(|a, b| b.score.total_cmp(&a.score));
		results
	}
}
