//! English stopwords dropped by `EnglishTokenizer` before stemming.

use std::sync::LazyLock;

use shield_core::types::FxHashSet;

/// Function words, web boilerplate and filler that carry no class signal.
/// Only entries longer than two characters matter: shorter tokens are
/// dropped by length first.
const STOPWORDS: &[&str] = &[
    // Web and mail boilerplate
    "http", "https", "www", "com", "org", "net", "htm", "html", "email", "mail", "mailto",
    "mailing", "article", "page", "pages",
    // Articles, conjunctions, prepositions
    "and", "the", "but", "nor", "for", "yet", "about", "above", "across", "after", "against",
    "along", "among", "amongst", "around", "before", "behind", "below", "beneath", "beside",
    "besides", "between", "beyond", "during", "except", "from", "inside", "into", "near",
    "onto", "outside", "over", "per", "since", "than", "through", "throughout", "thru",
    "toward", "towards", "under", "until", "unto", "upon", "via", "with", "within",
    "without", "because", "although", "though", "unless", "whereas", "whether", "while",
    // Pronouns and determiners
    "all", "any", "anybody", "anyone", "anything", "both", "each", "either", "every",
    "everybody", "everyone", "everything", "few", "her", "hers", "herself", "him",
    "himself", "his", "its", "itself", "many", "mine", "more", "most", "much", "myself",
    "neither", "none", "nobody", "nothing", "one", "ones", "other", "others", "our", "ours",
    "ourselves", "own", "same", "several", "she", "some", "somebody", "someone",
    "something", "such", "that", "their", "theirs", "them", "themselves", "these", "they",
    "this", "those", "what", "whatever", "which", "who", "whoever", "whom", "whose", "you",
    "your", "yours", "yourself", "yourselves",
    // Auxiliaries and common verbs
    "are", "aren", "been", "being", "can", "cannot", "cant", "could", "couldnt", "did",
    "didnt", "does", "doesnt", "doing", "done", "dont", "had", "has", "hasnt", "have",
    "havent", "having", "isnt", "may", "might", "must", "shall", "should", "shouldnt",
    "was", "wasnt", "were", "werent", "will", "wont", "would", "wouldnt", "get", "gets",
    "got", "getting", "give", "gives", "given", "make", "makes", "made", "come", "comes",
    "came", "know", "known", "knows", "look", "looks", "looking", "say", "says", "said",
    "see", "seen", "seem", "seems", "take", "taken", "use", "used", "uses", "using", "want",
    "wants", "need", "needs",
    // Contractions with the apostrophe stripped
    "ill", "ive", "youre", "youve", "youll", "youd", "hes", "shes", "thats", "theres",
    "theyre", "theyve", "weve", "whats", "lets",
    // Adverbs and fillers
    "again", "almost", "already", "also", "always", "anyway", "away", "back", "else",
    "enough", "even", "ever", "far", "here", "how", "however", "just", "last", "least",
    "less", "like", "long", "maybe", "meanwhile", "never", "next", "not", "now", "off",
    "often", "only", "out", "perhaps", "quite", "rather", "really", "right", "soon",
    "still", "then", "there", "therefore", "thus", "too", "very", "well", "when", "where",
    "why", "yes", "first", "year", "years", "time", "world", "work", "people", "place",
    "number", "information",
];

static STOPWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// True if `word` (already lowercased) is an English stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}
