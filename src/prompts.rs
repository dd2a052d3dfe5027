//! Fixed prompt text and canned fallback answers for the assistant.

/// Pins the model to Indian constitutional law and to a citation format the
/// mention extractor can parse.
const SYSTEM_PROMPT: &str = r#"You are a legal information assistant for the Constitution of India.

Answer questions about constitutional provisions, fundamental rights, directive principles, fundamental duties, amendments, and landmark judgments. Keep answers factual and concise, in plain language a citizen without legal training can follow.

Always cite provisions as "Article N" (for example "Article 21" or "Article 14A"), never as bare numbers. When a question is outside the Constitution of India, say so briefly and point the user to the nearest constitutional topic instead of speculating.

You provide legal information, not legal advice. For advice on a specific case, recommend consulting a lawyer or the nearest District Legal Services Authority."#;

/// System prompt for a request, with the reply-language instruction added
/// for Hindi and Tamil.
pub fn system_prompt(lang: crate::localize::Lang) -> String {
    use crate::localize::Lang;
    match lang {
        Lang::En => SYSTEM_PROMPT.to_string(),
        Lang::Hi => format!("{SYSTEM_PROMPT}\n\nRespond in Hindi (हिन्दी)."),
        Lang::Ta => format!("{SYSTEM_PROMPT}\n\nRespond in Tamil (தமிழ்)."),
    }
}

/// Served with `fallback: true` when the completion provider fails or
/// returns nothing.
pub fn fallback_answer(lang: crate::localize::Lang) -> &'static str {
    use crate::localize::Lang;
    match lang {
        Lang::En => {
            "The assistant is unavailable right now. In the meantime: fundamental rights are set out in Articles 14 to 32 of the Constitution, and Article 32 lets you move the Supreme Court directly when a fundamental right is violated. For free legal aid, call the NALSA helpline at 15100 or visit your District Legal Services Authority."
        }
        Lang::Hi => {
            "सहायक अभी उपलब्ध नहीं है। इस बीच: मौलिक अधिकार संविधान के अनुच्छेद 14 से 32 में दिए गए हैं, और मौलिक अधिकार के उल्लंघन पर अनुच्छेद 32 के अंतर्गत आप सीधे सर्वोच्च न्यायालय जा सकते हैं। निःशुल्क कानूनी सहायता के लिए NALSA हेल्पलाइन 15100 पर कॉल करें या अपने जिला विधिक सेवा प्राधिकरण से संपर्क करें।"
        }
        Lang::Ta => {
            "உதவியாளர் தற்போது கிடைக்கவில்லை. இதற்கிடையில்: அடிப்படை உரிமைகள் அரசியலமைப்பின் உறுப்புரைகள் 14 முதல் 32 வரை வரையறுக்கப்பட்டுள்ளன; அடிப்படை உரிமை மீறப்பட்டால் உறுப்புரை 32 இன் கீழ் நேரடியாக உச்ச நீதிமன்றத்தை அணுகலாம். இலவச சட்ட உதவிக்கு NALSA உதவி எண் 15100 ஐ அழைக்கவும் அல்லது உங்கள் மாவட்ட சட்ட சேவைகள் ஆணையத்தை அணுகவும்."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::Lang;

    #[test]
    fn test_system_prompt_carries_language_instruction() {
        assert!(!system_prompt(Lang::En).contains("Respond in"));
        assert!(system_prompt(Lang::Hi).contains("Respond in Hindi"));
        assert!(system_prompt(Lang::Ta).contains("Respond in Tamil"));
    }

    #[test]
    fn test_fallback_answers_are_nonempty_per_language() {
        for lang in [Lang::En, Lang::Hi, Lang::Ta] {
            assert!(!fallback_answer(lang).trim().is_empty());
        }
    }
}
