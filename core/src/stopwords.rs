use crate::error::{Result, TfidfError};
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
    Russian,
}

impl Language {
    pub const ALL: [Language; 5] = [Language::English, Language::French, Language::German, Language::Spanish, Language::Russian];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Russian => "russian",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Language {
    type Err = TfidfError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.name() == wanted || l.code() == wanted)
            .ok_or_else(|| TfidfError::UnsupportedLanguage(s.trim().to_string()))
    }
}

lazy_static! {
    static ref ENGLISH: HashSet<&'static str> = [
        "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
        "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself","they","them","their","theirs","themselves",
        "what","which","who","whom","this","that","that'll","these","those","am","is","are","was","were","be","been","being",
        "have","has","had","having","do","does","did","doing","a","an","the","and","but","if","or","because","as","until","while",
        "of","at","by","for","with","about","against","between","into","through","during","before","after","above","below",
        "to","from","up","down","in","out","on","off","over","under","again","further","then","once","here","there","when","where","why","how",
        "all","any","both","each","few","more","most","other","some","such","no","nor","not","only","own","same","so","than","too","very",
        "s","t","can","will","just","don","don't","should","should've","now","d","ll","m","o","re","ve","y",
        "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't",
        "isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't","shouldn","shouldn't",
        "wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't",
    ].into_iter().collect();

    static ref FRENCH: HashSet<&'static str> = [
        "au","aux","avec","ce","ces","dans","de","des","du","elle","en","et","eux","il","ils","je","la","le","les","leur","lui",
        "ma","mais","me","même","mes","moi","mon","ne","nos","notre","nous","on","ou","par","pas","pour","qu","que","qui",
        "sa","se","ses","son","sur","ta","te","tes","toi","ton","tu","un","une","vos","votre","vous",
        "c","d","j","l","à","m","n","s","t","y",
        "été","étée","étées","étés","étant","étante","étants","étantes","suis","es","est","sommes","êtes","sont",
        "serai","seras","sera","serons","serez","seront","serais","serait","serions","seriez","seraient",
        "étais","était","étions","étiez","étaient","fus","fut","fûmes","fûtes","furent","sois","soit","soyons","soyez","soient",
        "fusse","fusses","fût","fussions","fussiez","fussent","ayant","ayante","ayantes","ayants","eu","eue","eues","eus",
        "ai","as","avons","avez","ont","aurai","auras","aura","aurons","aurez","auront","aurais","aurait","aurions","auriez","auraient",
        "avais","avait","avions","aviez","avaient","eut","eûmes","eûtes","eurent","aie","aies","ait","ayons","ayez","aient",
        "eusse","eusses","eût","eussions","eussiez","eussent",
    ].into_iter().collect();

    static ref GERMAN: HashSet<&'static str> = [
        "aber","alle","allem","allen","aller","alles","als","also","am","an","ander","andere","anderem","anderen","anderer","anderes",
        "anderm","andern","anderr","anders","auch","auf","aus","bei","bin","bis","bist","da","damit","dann","der","den","des","dem",
        "die","das","dass","daß","derselbe","derselben","denselben","desselben","demselben","dieselbe","dieselben","dasselbe","dazu",
        "dein","deine","deinem","deinen","deiner","deines","denn","derer","dessen","dich","dir","du","dies","diese","diesem","diesen",
        "dieser","dieses","doch","dort","durch","ein","eine","einem","einen","einer","eines","einig","einige","einigem","einigen",
        "einiger","einiges","einmal","er","ihn","ihm","es","etwas","euer","eure","eurem","euren","eurer","eures","für","gegen",
        "gewesen","hab","habe","haben","hat","hatte","hatten","hier","hin","hinter","ich","mich","mir","ihr","ihre","ihrem","ihren",
        "ihrer","ihres","euch","im","in","indem","ins","ist","jede","jedem","jeden","jeder","jedes","jene","jenem","jenen","jener",
        "jenes","jetzt","kann","kein","keine","keinem","keinen","keiner","keines","können","könnte","machen","man","manche",
        "manchem","manchen","mancher","manches","mein","meine","meinem","meinen","meiner","meines","mit","muss","musste","nach",
        "nicht","nichts","noch","nun","nur","ob","oder","ohne","sehr","sein","seine","seinem","seinen","seiner","seines","selbst",
        "sich","sie","ihnen","sind","so","solche","solchem","solchen","solcher","solches","soll","sollte","sondern","sonst","über",
        "um","und","uns","unsere","unserem","unseren","unser","unseres","unter","viel","vom","von","vor","während","war","waren",
        "warst","was","weg","weil","weiter","welche","welchem","welchen","welcher","welches","wenn","werde","werden","wie","wieder",
        "will","wir","wird","wirst","wo","wollen","wollte","würde","würden","zu","zum","zur","zwar","zwischen",
    ].into_iter().collect();

    static ref SPANISH: HashSet<&'static str> = [
        "de","la","que","el","en","y","a","los","del","se","las","por","un","para","con","no","una","su","al","lo","como","más",
        "pero","sus","le","ya","o","este","sí","porque","esta","entre","cuando","muy","sin","sobre","también","me","hasta","hay",
        "donde","quien","desde","todo","nos","durante","todos","uno","les","ni","contra","otros","ese","eso","ante","ellos","e",
        "esto","mí","antes","algunos","qué","unos","yo","otro","otras","otra","él","tanto","esa","estos","mucho","quienes","nada",
        "muchos","cual","poco","ella","estar","estas","algunas","algo","nosotros","mi","mis","tú","te","ti","tu","tus","ellas",
        "nosotras","vosotros","vosotras","os","mío","mía","míos","mías","tuyo","tuya","tuyos","tuyas","suyo","suya","suyos",
        "suyas","nuestro","nuestra","nuestros","nuestras","vuestro","vuestra","vuestros","vuestras","esos","esas",
        "estoy","estás","está","estamos","estáis","están","esté","estés","estemos","estéis","estén","estaba","estabas","estábamos",
        "estaban","estuve","estuvo","estuvimos","estuvieron","he","has","ha","hemos","habéis","han","haya","hayas","hayamos",
        "hayan","había","habías","habíamos","habían","hube","hubo","hubimos","hubieron","soy","eres","es","somos","sois","son",
        "sea","seas","seamos","sean","era","eras","éramos","eran","fui","fuiste","fue","fuimos","fueron","fuera","fueras",
        "tengo","tienes","tiene","tenemos","tenéis","tienen","tenga","tengas","tengamos","tengan","tenía","tenías","teníamos",
        "tenían","tuve","tuvo","tuvimos","tuvieron","tener","tenido","sido","siendo","estado","estando","habido","habiendo",
    ].into_iter().collect();

    static ref RUSSIAN: HashSet<&'static str> = [
        "и","в","во","не","что","он","на","я","с","со","как","а","то","все","она","так","его","но","да","ты","к","у","же","вы",
        "за","бы","по","только","ее","мне","было","вот","от","меня","еще","нет","о","из","ему","теперь","когда","даже","ну",
        "вдруг","ли","если","уже","или","ни","быть","был","него","до","вас","нибудь","опять","уж","вам","ведь","там","потом",
        "себя","ничего","ей","может","они","тут","где","есть","надо","ней","для","мы","тебя","их","чем","была","сам","чтоб",
        "без","будто","чего","раз","тоже","себе","под","будет","ж","тогда","кто","этот","того","потому","этого","какой",
        "совсем","ним","здесь","этом","один","почти","мой","тем","чтобы","нее","сейчас","были","куда","зачем","всех","никогда",
        "можно","при","наконец","два","об","другой","хоть","после","над","больше","тот","через","эти","нас","про","всего",
        "них","какая","много","разве","три","эту","моя","впрочем","хорошо","свою","этой","перед","иногда","лучше","чуть",
        "том","нельзя","такой","им","более","всегда","конечно","всю","между",
    ].into_iter().collect();
}

fn builtin_table(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
        Language::German => &GERMAN,
        Language::Spanish => &SPANISH,
        Language::Russian => &RUSSIAN,
    }
}

/// Stopwords for one language: the built-in table plus caller-supplied words.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    language: Language,
    builtin: &'static HashSet<&'static str>,
    extra: HashSet<String>,
}

impl StopwordSet {
    pub fn builtin(language: Language) -> Self {
        Self { language, builtin: builtin_table(language), extra: HashSet::new() }
    }

    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()).filter(|w| !w.is_empty()));
        self
    }

    /// Built-in table extended with a newline-delimited word list. `#` starts a comment line.
    pub fn from_file<P: AsRef<Path>>(language: Language, path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TfidfError::resource(format!("stopword file {}", path.display()), e))?;
        let words = text.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#'));
        let set = Self::builtin(language).with_extra(words);
        tracing::debug!(path = %path.display(), extra = set.extra.len(), "loaded stopword file");
        Ok(set)
    }

    pub fn language(&self) -> Language { self.language }

    pub fn contains(&self, word: &str) -> bool { self.builtin.contains(word) || self.extra.contains(word) }

    pub fn len(&self) -> usize { self.builtin.len() + self.extra.iter().filter(|w| !self.builtin.contains(w.as_str())).count() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
