// Tutoring system prompts
//
// Each explanation mode is a fixed Gujarati template. The class level and
// subject, when present, are appended as context sentences, and a closing
// policy block always comes last.

pub mod vision;

use serde::{Deserialize, Serialize};

pub use vision::{compose_vision_prompt, vision_prompt, AnalysisType, PromptLanguage};

/// Tutoring style requested by the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExplanationMode {
    #[default]
    Simple,
    Story,
    StepByStep,
    Visual,
}

impl ExplanationMode {
    /// Parse a wire name. Unknown names fall back to `Simple` rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "story" => Self::Story,
            "stepByStep" => Self::StepByStep,
            "visual" => Self::Visual,
            _ => Self::Simple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Story => "story",
            Self::StepByStep => "stepByStep",
            Self::Visual => "visual",
        }
    }

    /// Base template for this mode.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Simple => SIMPLE_TEMPLATE,
            Self::Story => STORY_TEMPLATE,
            Self::StepByStep => STEP_BY_STEP_TEMPLATE,
            Self::Visual => VISUAL_TEMPLATE,
        }
    }
}

const SIMPLE_TEMPLATE: &str = "તમે એક મદદગાર AI શિક્ષક છો જે ગુજરાતીમાં સરળ શબ્દોમાં સમજાવે છે. \n\
વિદ્યાર્થીની ઉંમર અને ધોરણ પ્રમાણે ભાષા વાપરો. \n\
ટૂંકા અને સ્પષ્ટ જવાબો આપો.";

const STORY_TEMPLATE: &str = "તમે એક કહાનીકાર શિક્ષક છો. \n\
દરેક વિષયને એક રસપ્રદ વાર્તા દ્વારા સમજાવો. \n\
ઉદાહરણો અને કલ્પના સાથે શીખવો.";

const STEP_BY_STEP_TEMPLATE: &str = "તમે એક વ્યવસ્થિત શિક્ષક છો. \n\
દરેક વિષયને ક્રમબદ્ધ પગલાંમાં સમજાવો:
1. પ્રથમ મૂળભૂત ખ્યાલ
2. પછી વિગતો
3. છેવટે ઉદાહરણો
નંબરિંગ અને બુલેટ પોઈન્ટ્સ વાપરો.";

const VISUAL_TEMPLATE: &str = "તમે એક દ્રશ્ય શિક્ષક છો. \n\
ASCII આર્ટ, ડાયાગ્રામ અને ચિત્રાત્મક વર્ણન વાપરો.
ઇમોજી અને પ્રતીકોથી સમજાવો.";

/// Closing rules appended to every tutoring prompt.
pub const CLOSING_POLICY: &str = "મહત્વના નિયમો:
- હંમેશા ગુજરાતીમાં જવાબ આપો
- વિદ્યાર્થી-મૈત્રીપૂર્ણ ભાષા વાપરો
- શૈક્ષણિક અને સકારાત્મક રહો
- જો ખબર ન હોય તો કહો \"મને આ વિશે ખાતરી નથી\"";

/// Context sentence for the student's class level.
pub fn class_level_clause(class_level: &str) -> String {
    format!("વિદ્યાર્થી ધોરણ {class_level}માં છે. તે મુજબ ભાષા અને ઉદાહરણો પસંદ કરો.")
}

/// Context sentence for the current subject.
pub fn subject_clause(subject: &str) -> String {
    format!("વર્તમાન વિષય: {subject}. આ વિષય પર ધ્યાન કેન્દ્રિત કરો.")
}

/// Compose the tutoring system prompt.
///
/// Order is fixed: mode template, class clause, subject clause, closing policy.
/// Blank class/subject values are skipped. Values are inserted verbatim.
pub fn build_system_prompt(
    mode: ExplanationMode,
    class_level: Option<&str>,
    subject: Option<&str>,
) -> String {
    let mut prompt = mode.template().to_string();

    if let Some(class_level) = class_level.filter(|c| !c.trim().is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(&class_level_clause(class_level));
    }

    if let Some(subject) = subject.filter(|s| !s.trim().is_empty()) {
        prompt.push_str("\n\n");
        prompt.push_str(&subject_clause(subject));
    }

    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_POLICY);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_prompt_sections_in_order() {
        let prompt = build_system_prompt(ExplanationMode::from_name("visual"), Some("8"), Some("Science"));

        let template_pos = prompt.find(VISUAL_TEMPLATE).unwrap();
        let class_pos = prompt.find(&class_level_clause("8")).unwrap();
        let subject_pos = prompt.find(&subject_clause("Science")).unwrap();
        let policy_pos = prompt.find(CLOSING_POLICY).unwrap();

        assert!(template_pos < class_pos);
        assert!(class_pos < subject_pos);
        assert!(subject_pos < policy_pos);
        assert!(prompt.contains("ધોરણ 8માં"));
        assert!(prompt.ends_with(CLOSING_POLICY));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_simple() {
        assert_eq!(ExplanationMode::from_name("unknown-mode"), ExplanationMode::Simple);
        let prompt = build_system_prompt(ExplanationMode::from_name("unknown-mode"), None, None);
        assert!(prompt.starts_with(SIMPLE_TEMPLATE));
        assert_eq!(prompt, format!("{SIMPLE_TEMPLATE}\n\n{CLOSING_POLICY}"));
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [
            ExplanationMode::Simple,
            ExplanationMode::Story,
            ExplanationMode::StepByStep,
            ExplanationMode::Visual,
        ] {
            assert_eq!(ExplanationMode::from_name(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_blank_context_is_skipped() {
        let prompt = build_system_prompt(ExplanationMode::Story, Some("  "), Some(""));
        assert!(!prompt.contains("ધોરણ"));
        assert!(!prompt.contains("વર્તમાન વિષય"));
        assert!(prompt.starts_with(STORY_TEMPLATE));
    }

    #[test]
    fn test_templates_keep_space_before_line_breaks() {
        assert!(SIMPLE_TEMPLATE.starts_with("તમે એક મદદગાર AI શિક્ષક છો જે ગુજરાતીમાં સરળ શબ્દોમાં સમજાવે છે. \nવિદ્યાર્થીની"));
        assert_eq!(SIMPLE_TEMPLATE.matches(". \n").count(), 2);
        assert_eq!(STORY_TEMPLATE.matches(". \n").count(), 2);
        assert_eq!(STEP_BY_STEP_TEMPLATE.matches(". \n").count(), 1);
        assert!(STEP_BY_STEP_TEMPLATE.contains("સમજાવો:\n1. પ્રથમ"));
        assert_eq!(VISUAL_TEMPLATE.matches(". \n").count(), 1);
        assert!(VISUAL_TEMPLATE.contains("વાપરો.\nઇમોજી"));
    }

    #[test]
    fn test_mode_names_are_case_sensitive() {
        // Wire names are camelCase; anything else is treated as unknown
        assert_eq!(ExplanationMode::from_name("STORY"), ExplanationMode::Simple);
        assert_eq!(ExplanationMode::from_name("stepbystep"), ExplanationMode::Simple);
    }
}
