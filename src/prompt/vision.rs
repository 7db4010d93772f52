// Image analysis prompts (OCR, homework checking, diagrams, ...)

use serde::{Deserialize, Serialize};

/// Kind of analysis requested for an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Ocr,
    Homework,
    Diagram,
    Textbook,
    Handwriting,
    #[default]
    General,
}

impl AnalysisType {
    /// Parse a form value; unknown or empty values mean `General`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ocr" => Self::Ocr,
            "homework" => Self::Homework,
            "diagram" => Self::Diagram,
            "textbook" => Self::Textbook,
            "handwriting" => Self::Handwriting,
            _ => Self::General,
        }
    }
}

/// Prompt language: Gujarati for "gu", English for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLanguage {
    Gujarati,
    English,
}

impl PromptLanguage {
    pub fn from_code(code: &str) -> Self {
        if code == "gu" {
            Self::Gujarati
        } else {
            Self::English
        }
    }
}

/// Built-in prompt for an analysis type, asking the model for a JSON reply.
pub fn vision_prompt(kind: AnalysisType, language: PromptLanguage) -> &'static str {
    use AnalysisType::*;
    use PromptLanguage::*;

    match (kind, language) {
        (Ocr, Gujarati) => r#"આ છબીમાંથી તમામ ટેક્સ્ટ કાઢો. ગુજરાતી અને અંગ્રેજી બંને ટેક્સ્ટ ઓળખો. ગાણિતિક સૂત્રો અને ચિહ્નો પણ ઓળખો. JSON ફોર્મેટમાં આઉટપુટ આપો: {"text": "full text", "blocks": [{"text": "block text", "type": "text|formula|diagram|table"}], "language": "detected language"}"#,
        (Ocr, English) => r#"Extract all text from this image. Recognize both Gujarati and English text. Also recognize mathematical formulas and symbols. Output in JSON format: {"text": "full text", "blocks": [{"text": "block text", "type": "text|formula|diagram|table"}], "language": "detected language"}"#,
        (Homework, Gujarati) => r#"આ ગૃહકાર્યની છબી તપાસો. દરેક જવાબની ચકાસણી કરો, ભૂલો શોધો, અને સુધારણા સૂચવો. JSON ફોર્મેટમાં આઉટપુટ: {"isCorrect": boolean, "score": 0-100, "feedback": "overall feedback", "feedbackGu": "ગુજરાતીમાં પ્રતિસાદ", "corrections": [{"original": "", "corrected": "", "explanation": "", "explanationGu": ""}], "suggestions": [], "suggestionsGu": []}"#,
        (Homework, English) => r#"Check this homework image. Verify each answer, find errors, and suggest corrections. Output in JSON format: {"isCorrect": boolean, "score": 0-100, "feedback": "overall feedback", "feedbackGu": "feedback in Gujarati", "corrections": [{"original": "", "corrected": "", "explanation": "", "explanationGu": ""}], "suggestions": [], "suggestionsGu": []}"#,
        (Diagram, Gujarati) => r#"આ આકૃતિનું વિશ્લેષણ કરો. તમામ ભાગો ઓળખો, વૈજ્ઞાનિક/ગાણિતિક ખ્યાલો સમજાવો. JSON ફોર્મેટમાં: {"description": "", "descriptionGu": "", "labels": [{"name": "", "nameGu": "", "position": ""}], "concepts": [], "conceptsGu": [], "relatedTopics": []}"#,
        (Diagram, English) => r#"Analyze this diagram. Identify all parts, explain scientific/mathematical concepts. In JSON format: {"description": "", "descriptionGu": "", "labels": [{"name": "", "nameGu": "", "position": ""}], "concepts": [], "conceptsGu": [], "relatedTopics": []}"#,
        (Textbook, Gujarati) => r#"આ પાઠ્યપુસ્તકના પૃષ્ઠને વાંચો. મુખ્ય મુદ્દાઓ, વ્યાખ્યાઓ, સૂત્રો અને ઉદાહરણો કાઢો. JSON ફોર્મેટમાં: {"text": "extracted text", "keyPoints": [], "keyPointsGu": [], "definitions": [], "formulas": [], "summary": "", "summaryGu": ""}"#,
        (Textbook, English) => r#"Read this textbook page. Extract key points, definitions, formulas, and examples. In JSON format: {"text": "extracted text", "keyPoints": [], "keyPointsGu": [], "definitions": [], "formulas": [], "summary": "", "summaryGu": ""}"#,
        (Handwriting, Gujarati) => r#"આ હસ્તલિખિત ટેક્સ્ટ વાંચો. ગુજરાતી અને અંગ્રેજી બંને ઓળખો. JSON ફોર્મેટમાં: {"text": "recognized text", "confidence": 0-1, "language": "detected language"}"#,
        (Handwriting, English) => r#"Read this handwritten text. Recognize both Gujarati and English. In JSON format: {"text": "recognized text", "confidence": 0-1, "language": "detected language"}"#,
        (General, Gujarati) => r#"આ શૈક્ષણિક છબીનું વિશ્લેષણ કરો. શું દેખાય છે તે વર્ણવો અને તેની શૈક્ષણિક સુસંગતતા સમજાવો. JSON ફોર્મેટમાં: {"description": "", "descriptionGu": "", "educationalRelevance": "", "educationalRelevanceGu": "", "suggestedTopics": []}"#,
        (General, English) => r#"Analyze this educational image. Describe what you see and explain its educational relevance. In JSON format: {"description": "", "descriptionGu": "", "educationalRelevance": "", "educationalRelevanceGu": "", "suggestedTopics": []}"#,
    }
}

/// Final prompt for a vision request.
///
/// A caller-supplied prompt wins outright; otherwise the built-in prompt is
/// used, prefixed with the subject when one is given.
pub fn compose_vision_prompt(
    kind: AnalysisType,
    language: PromptLanguage,
    custom_prompt: Option<&str>,
    subject: Option<&str>,
) -> String {
    if let Some(custom) = custom_prompt.filter(|p| !p.is_empty()) {
        return custom.to_string();
    }

    let base = vision_prompt(kind, language);
    match subject.filter(|s| !s.is_empty()) {
        Some(subject) => format!("Subject: {subject}. {base}"),
        None => base.to_string(),
    }
}
