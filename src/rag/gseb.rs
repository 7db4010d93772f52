// GSEB class 10 curriculum passages used by the tutoring RAG endpoint

use serde::Serialize;

use super::Searchable;
use crate::prompt::PromptLanguage;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GsebDocument {
    pub subject: &'static str,
    #[serde(rename = "class")]
    pub class_level: u32,
    pub chapter: &'static str,
    pub topic: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content: &'static str,
    pub content_gu: &'static str,
}

impl GsebDocument {
    /// Passage text in the requested language.
    pub fn localized(&self, language: PromptLanguage) -> &'static str {
        match language {
            PromptLanguage::Gujarati => self.content_gu,
            PromptLanguage::English => self.content,
        }
    }
}

impl Searchable for GsebDocument {
    fn search_text(&self) -> String {
        format!("{} {}", self.content, self.content_gu).to_lowercase()
    }
}

/// Optional narrowing applied before scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct GsebFilter<'a> {
    /// Exact subject name (Gujarati)
    pub subject: Option<&'a str>,
    pub class_level: Option<u32>,
    /// Substring of the chapter title
    pub chapter: Option<&'a str>,
}

impl<'a> GsebFilter<'a> {
    pub fn matches(&self, doc: &GsebDocument) -> bool {
        self.subject.map_or(true, |s| doc.subject == s)
            && self.class_level.map_or(true, |c| doc.class_level == c)
            && self.chapter.map_or(true, |c| doc.chapter.contains(c))
    }

    pub fn apply(self) -> impl Iterator<Item = &'static GsebDocument> + 'a {
        GSEB_KNOWLEDGE_BASE.iter().filter(move |d| self.matches(d))
    }
}

/// System prompt for answering from retrieved passages.
pub fn rag_system_prompt(context: &str, language: PromptLanguage) -> String {
    match language {
        PromptLanguage::Gujarati => format!(
            "તમે GYAANSETU AI છો, ગુજરાતી વિદ્યાર્થીઓ માટે શૈક્ષણિક સહાયક.\nનીચેના સંદર્ભનો ઉપયોગ કરીને જવાબ આપો:\n\n{context}\n\nગુજરાતીમાં સરળ ભાષામાં જવાબ આપો. ઉદાહરણો આપો."
        ),
        PromptLanguage::English => format!(
            "You are GYAANSETU AI, an educational assistant for students.\nUse the following context to answer:\n\n{context}\n\nAnswer clearly with examples."
        ),
    }
}

pub static GSEB_KNOWLEDGE_BASE: &[GsebDocument] = &[
    GsebDocument {
        subject: "ગણિત",
        class_level: 10,
        chapter: "દ્વિઘાત સમીકરણો",
        topic: "દ્વિઘાત સૂત્ર",
        kind: "formula",
        content: "Quadratic Equation: An equation of the form ax² + bx + c = 0, where a ≠ 0. The roots can be found using the quadratic formula: x = (-b ± √(b²-4ac)) / 2a. The discriminant D = b²-4ac determines the nature of roots: D > 0 means two distinct real roots, D = 0 means one repeated real root, D < 0 means no real roots (complex roots).",
        content_gu: "દ્વિઘાત સમીકરણ: ax² + bx + c = 0 સ્વરૂપનું સમીકરણ, જ્યાં a ≠ 0. મૂળ શોધવા માટે સૂત્ર: x = (-b ± √(b²-4ac)) / 2a. વિવેચક D = b²-4ac મૂળની પ્રકૃતિ નક્કી કરે છે: D > 0 એટલે બે અલગ વાસ્તવિક મૂળ, D = 0 એટલે એક પુનરાવર્તિત વાસ્તવિક મૂળ, D < 0 એટલે કોઈ વાસ્તવિક મૂળ નહીં.",
    },
    GsebDocument {
        subject: "ગણિત",
        class_level: 10,
        chapter: "ત્રિકોણમિતિ",
        topic: "ત્રિકોણમિતિ ગુણોત્તર",
        kind: "formula",
        content: "Trigonometric Ratios: sin θ = opposite/hypotenuse, cos θ = adjacent/hypotenuse, tan θ = opposite/adjacent = sin θ/cos θ. For a right triangle, sin²θ + cos²θ = 1 (Pythagorean identity). Also: sec θ = 1/cos θ, cosec θ = 1/sin θ, cot θ = 1/tan θ.",
        content_gu: "ત્રિકોણમિતિ ગુણોત્તર: sin θ = સામેની બાજુ/કર્ણ, cos θ = નજીકની બાજુ/કર્ણ, tan θ = સામેની બાજુ/નજીકની બાજુ = sin θ/cos θ. કાટખૂણા ત્રિકોણ માટે: sin²θ + cos²θ = 1 (પાયથાગોરસ ઓળખ). ઉપરાંત: sec θ = 1/cos θ, cosec θ = 1/sin θ, cot θ = 1/tan θ.",
    },
    GsebDocument {
        subject: "ગણિત",
        class_level: 10,
        chapter: "અંકગણિત શ્રેણી",
        topic: "AP સૂત્રો",
        kind: "formula",
        content: "Arithmetic Progression (AP): A sequence where each term after the first is obtained by adding a constant difference 'd'. nth term: an = a + (n-1)d. Sum of n terms: Sn = n/2[2a + (n-1)d] or Sn = n/2[a + l] where l is the last term.",
        content_gu: "અંકગણિત શ્રેણી (AP): એક શ્રેણી જ્યાં પ્રથમ પદ પછી દરેક પદ સમાન તફાવત 'd' ઉમેરીને મળે છે. nમું પદ: an = a + (n-1)d. n પદોનો સરવાળો: Sn = n/2[2a + (n-1)d] અથવા Sn = n/2[a + l] જ્યાં l છેલ્લું પદ છે.",
    },
    GsebDocument {
        subject: "વિજ્ઞાન",
        class_level: 10,
        chapter: "ગતિ અને બળ",
        topic: "ન્યૂટનના નિયમો",
        kind: "lesson",
        content: "Newton's Laws of Motion: 1) Law of Inertia - An object remains at rest or in uniform motion unless acted upon by an external force. 2) F = ma - Force equals mass times acceleration. The unit of force is Newton (N). 3) Action-Reaction - For every action, there is an equal and opposite reaction.",
        content_gu: "ન્યૂટનના ગતિના નિયમો: 1) જડત્વનો નિયમ - કોઈ વસ્તુ સ્થિર રહે છે અથવા સમાન ગતિમાં રહે છે જ્યાં સુધી બાહ્ય બળ ન લાગે. 2) F = ma - બળ = દળ × પ્રવેગ. બળનો એકમ ન્યૂટન (N) છે. 3) ક્રિયા-પ્રતિક્રિયા - દરેક ક્રિયા માટે સમાન અને વિરુદ્ધ પ્રતિક્રિયા હોય છે.",
    },
    GsebDocument {
        subject: "વિજ્ઞાન",
        class_level: 10,
        chapter: "જીવન પ્રક્રિયાઓ",
        topic: "પ્રકાશસંશ્લેષણ",
        kind: "lesson",
        content: "Photosynthesis: The process by which green plants convert sunlight, water, and carbon dioxide into glucose and oxygen. Equation: 6CO₂ + 6H₂O + Light Energy → C₆H₁₂O₆ + 6O₂. It occurs in chloroplasts, specifically in the chlorophyll. The process has two stages: light reaction and dark reaction (Calvin cycle).",
        content_gu: "પ્રકાશસંશ્લેષણ: જે પ્રક્રિયાથી લીલા છોડ સૂર્યપ્રકાશ, પાણી અને કાર્બન ડાયોક્સાઇડને ગ્લુકોઝ અને ઓક્સિજનમાં રૂપાંતરિત કરે છે. સમીકરણ: 6CO₂ + 6H₂O + પ્રકાશ ઊર્જા → C₆H₁₂O₆ + 6O₂. આ ક્લોરોપ્લાસ્ટમાં, ખાસ કરીને ક્લોરોફિલમાં થાય છે. આ પ્રક્રિયામાં બે તબક્કા છે: પ્રકાશ પ્રતિક્રિયા અને અંધકાર પ્રતિક્રિયા (કેલ્વિન ચક્ર).",
    },
    GsebDocument {
        subject: "વિજ્ઞાન",
        class_level: 10,
        chapter: "રાસાયણિક પ્રતિક્રિયાઓ",
        topic: "રાસાયણિક સમીકરણો",
        kind: "lesson",
        content: "Chemical Reactions: A process where reactants convert into products. Types: Combination (A + B → AB), Decomposition (AB → A + B), Displacement (A + BC → AC + B), Double Displacement (AB + CD → AD + CB), Oxidation-Reduction (electron transfer). Balancing ensures equal atoms on both sides.",
        content_gu: "રાસાયણિક પ્રતિક્રિયાઓ: એક પ્રક્રિયા જ્યાં પ્રક્રિયાકારકો ઉત્પાદનોમાં રૂપાંતરિત થાય છે. પ્રકારો: સંયોજન (A + B → AB), વિઘટન (AB → A + B), વિસ્થાપન (A + BC → AC + B), દ્વિ-વિસ્થાપન (AB + CD → AD + CB), ઓક્સિડેશન-રિડક્શન (ઇલેક્ટ્રોન ટ્રાન્સફર). સંતુલન બંને બાજુ સમાન પરમાણુઓ સુનિશ્ચિત કરે છે.",
    },
    GsebDocument {
        subject: "ગુજરાતી",
        class_level: 10,
        chapter: "ભક્તિ સાહિત્ય",
        topic: "નરસિંહ મહેતા",
        kind: "lesson",
        content: "Narsinh Mehta (1414-1481) was a 15th-century poet saint of Gujarat, known as the Adi Kavi (first poet) of Gujarati literature. His bhajan 'Vaishnav Jan To' describes the qualities of a true devotee. He wrote about devotion to Krishna and social equality. His autobiography 'Shamaldas no Vivah' and 'Mameru' are famous works.",
        content_gu: "નરસિંહ મહેતા (1414-1481) ગુજરાતના 15મી સદીના કવિ સંત હતા, જેઓ ગુજરાતી સાહિત્યના આદિ કવિ તરીકે ઓળખાય છે. તેમનું ભજન 'વૈષ્ણવ જન તો' સાચા ભક્તના ગુણો વર્ણવે છે. તેમણે કૃષ્ણ ભક્તિ અને સામાજિક સમાનતા વિશે લખ્યું. તેમની આત્મકથા 'શામળદાસનો વિવાહ' અને 'મામેરું' પ્રસિદ્ધ કૃતિઓ છે.",
    },
    GsebDocument {
        subject: "ગુજરાતી",
        class_level: 10,
        chapter: "નવલકથા",
        topic: "ગોવર્ધનરામ ત્રિપાઠી",
        kind: "lesson",
        content: "Govardhanram Tripathi (1855-1907) wrote 'Saraswatichandra', considered the first modern Gujarati novel. It's a 4-part epic exploring love, duty, spirituality, and social reform. The protagonist Saraswatichandra struggles between worldly duties and spiritual aspirations. It reflects the social conditions of 19th century Gujarat.",
        content_gu: "ગોવર્ધનરામ ત્રિપાઠી (1855-1907) એ 'સરસ્વતીચંદ્ર' લખી, જે પ્રથમ આધુનિક ગુજરાતી નવલકથા માનવામાં આવે છે. આ 4 ભાગની મહાકાવ્ય પ્રેમ, કર્તવ્ય, આધ્યાત્મિકતા અને સામાજિક સુધારણાની શોધ કરે છે. નાયક સરસ્વતીચંદ્ર સાંસારિક ફરજો અને આધ્યાત્મિક આકાંક્ષાઓ વચ્ચે સંઘર્ષ કરે છે.",
    },
    GsebDocument {
        subject: "સામાજિક વિજ્ઞાન",
        class_level: 10,
        chapter: "ભારતીય સ્વતંત્રતા સંગ્રામ",
        topic: "ગાંધી યુગ",
        kind: "lesson",
        content: "Gandhi Era (1919-1947): Mahatma Gandhi led India's freedom struggle using non-violent civil disobedience. Key movements: Non-Cooperation (1920), Civil Disobedience/Salt March (1930), Quit India (1942). Gandhi's principles: Satyagraha (truth-force), Ahimsa (non-violence), Swadeshi (self-reliance). India gained independence on August 15, 1947.",
        content_gu: "ગાંધી યુગ (1919-1947): મહાત્મા ગાંધીએ અહિંસક સવિનય અવજ્ઞા દ્વારા ભારતની સ્વતંત્રતા સંગ્રામનું નેતૃત્વ કર્યું. મુખ્ય આંદોલનો: અસહકાર (1920), સવિનય અવજ્ઞા/મીઠાની કૂચ (1930), ભારત છોડો (1942). ગાંધીના સિદ્ધાંતો: સત્યાગ્રહ, અહિંસા, સ્વદેશી. ભારતે 15 ઓગસ્ટ 1947ના રોજ સ્વતંત્રતા મેળવી.",
    },
];
