// Offline demo provider: canned Gujarati answers, no network

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::{ProviderRequest, ProviderResponse};
use super::{LlmProvider, ProviderKind};

const MATH_RESPONSE: &str = "ગણિત એક સુંદર વિષય છે! 🔢

**મૂળભૂત ગણિત:**
- સરવાળો: 2 + 3 = 5
- બાદબાકી: 10 - 4 = 6
- ગુણાકાર: 3 × 4 = 12
- ભાગાકાર: 20 ÷ 5 = 4

શું તમને કોઈ ચોક્કસ ગણિતની સમસ્યામાં મદદ જોઈએ છે?";

const SCIENCE_RESPONSE: &str = "વિજ્ઞાન આપણી આસપાસની દુનિયાને સમજવામાં મદદ કરે છે! 🔬

**મહત્વના વિષયો:**
- પ્રકાશસંશ્લેષણ: છોડ સૂર્યપ્રકાશમાંથી ખોરાક બનાવે છે
- ગુરુત્વાકર્ષણ: પૃથ્વી બધી વસ્તુઓને પોતાની તરફ ખેંચે છે
- પાણીનું ચક્ર: બાષ્પીભવન → ઘનીભવન → વરસાદ

કયા વિષય વિશે વધુ જાણવું છે?";

const GUJARATI_RESPONSE: &str = "ગુજરાતી આપણી માતૃભાષા છે! 📚

**ગુજરાતી વર્ણમાળા:**
- સ્વરો: અ, આ, ઇ, ઈ, ઉ, ઊ, એ, ઐ, ઓ, ઔ
- વ્યંજનો: ક થી ળ સુધી

**પ્રખ્યાત ગુજરાતી કવિઓ:**
- નરસિંહ મહેતા
- મીરાંબાઈ
- કલાપી

ગુજરાતી ભાષા વિશે શું જાણવું છે?";

const GREETING_RESPONSE: &str = "નમસ્તે! 🙏 હું તમારો AI શિક્ષક છું.

હું તમને આ વિષયોમાં મદદ કરી શકું છું:
- 📐 ગણિત
- 🔬 વિજ્ઞાન
- 📚 ગુજરાતી
- 🔤 અંગ્રેજી
- 🌍 સામાજિક વિજ્ઞાન

તમારો પ્રશ્ન પૂછો અને હું ગુજરાતીમાં સરળ રીતે સમજાવીશ!";

/// Canned reply for `message`. Checked in order: math, science, Gujarati,
/// then a greeting listing the supported subjects.
pub fn demo_response(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if mentions(&["ગણિત", "math"]) {
        MATH_RESPONSE
    } else if mentions(&["વિજ્ઞાન", "science"]) {
        SCIENCE_RESPONSE
    } else if mentions(&["ગુજરાતી", "gujarati"]) {
        GUJARATI_RESPONSE
    } else {
        GREETING_RESPONSE
    }
}

/// Always-available provider backed by `demo_response`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

#[async_trait]
impl LlmProvider for DemoProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let message = request.last_user_text().unwrap_or_default();
        Ok(ProviderResponse {
            text: demo_response(message).to_string(),
            model: self.default_model().to_string(),
            provider: ProviderKind::Demo,
        })
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Demo
    }

    fn default_model(&self) -> &str {
        "demo"
    }
}
