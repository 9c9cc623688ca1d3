use crate::core::fuzzy::partial_ratio;
use crate::core::tokenizer::Tokenizer;
use crate::domain::model::MatchKind;
use std::collections::HashSet;

pub const DEFAULT_THRESHOLD: f64 = 85.0;

/// Resume text prepared once for repeated skill lookups.
pub struct ResumeIndex<'a> {
    text: &'a str,
    tokens: HashSet<String>,
}

impl<'a> ResumeIndex<'a> {
    pub fn new(text: &'a str, tokenizer: &Tokenizer) -> Self {
        Self {
            text,
            tokens: tokenizer.token_set(text),
        }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[derive(Debug, Clone)]
pub struct SkillMatcher {
    threshold: f64,
}

impl SkillMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Checks words-as-tokens, then raw substring, then fuzzy similarity.
    pub fn match_skill(&self, index: &ResumeIndex<'_>, skill: &str) -> Option<MatchKind> {
        let skill_clean = skill.trim().to_lowercase();

        // 空技能沒有任何單字，視為全部命中
        if skill_clean.split_whitespace().all(|word| index.has_token(word)) {
            return Some(MatchKind::Tokens);
        }

        if index.text().contains(&skill_clean) {
            return Some(MatchKind::Substring);
        }

        let score = partial_ratio(&skill_clean, index.text());
        if score >= self.threshold {
            return Some(MatchKind::Fuzzy(score));
        }

        tracing::debug!("🔍 '{}' not found (best fuzzy score {:.1})", skill_clean, score);
        None
    }

    /// Trimmed originals of the matched skills, deduplicated, in input order.
    pub fn match_skills(&self, resume_text: &str, skills: &[String], tokenizer: &Tokenizer) -> Vec<String> {
        let resume_text = resume_text.to_lowercase();
        let index = ResumeIndex::new(&resume_text, tokenizer);
        tracing::debug!("Indexed {} distinct resume tokens", index.token_count());

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for skill in skills {
            let trimmed = skill.trim();
            if seen.contains(trimmed) {
                continue;
            }

            if let Some(kind) = self.match_skill(&index, trimmed) {
                tracing::debug!("✅ '{}' matched via {:?}", trimmed, kind);
                seen.insert(trimmed.to_string());
                matched.push(trimmed.to_string());
            }
        }

        matched
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "experienced python developer with sql and aws";

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let matched = SkillMatcher::default().match_skills(
            RESUME,
            &skills(&["Python", "SQL", "Kubernetes"]),
            Tokenizer::shared(),
        );
        assert_eq!(matched, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_match_kinds_in_order() {
        let text = "worked on machine learning at acme; go-to person for ml-ops and kubernetas";
        let index = ResumeIndex::new(text, Tokenizer::shared());
        let matcher = SkillMatcher::default();

        assert_eq!(matcher.match_skill(&index, "Machine Learning"), Some(MatchKind::Tokens));
        // "ops" is inside the "ml-ops" token but is not a token itself
        assert_eq!(matcher.match_skill(&index, "ops"), Some(MatchKind::Substring));
        assert!(matches!(
            matcher.match_skill(&index, "Kubernetes"),
            Some(MatchKind::Fuzzy(score)) if score >= 85.0
        ));
        assert_eq!(matcher.match_skill(&index, "Haskell"), None);
    }

    #[test]
    fn test_stop_word_skill_falls_back_to_substring() {
        let index = ResumeIndex::new("fluent in go and rust", Tokenizer::shared());
        assert_eq!(SkillMatcher::default().match_skill(&index, "Go"), Some(MatchKind::Substring));
    }

    #[test]
    fn test_words_may_appear_anywhere() {
        let index = ResumeIndex::new("learning about machine tools", Tokenizer::shared());
        assert_eq!(
            SkillMatcher::default().match_skill(&index, "machine learning"),
            Some(MatchKind::Tokens)
        );
    }

    #[test]
    fn test_empty_skill_matches_vacuously() {
        let matched = SkillMatcher::default().match_skills(RESUME, &skills(&[""]), Tokenizer::shared());
        assert_eq!(matched, vec![""]);
    }

    #[test]
    fn test_duplicates_and_whitespace_collapse() {
        let matched = SkillMatcher::default().match_skills(
            RESUME,
            &skills(&["Python", " Python ", "python"]),
            Tokenizer::shared(),
        );
        assert_eq!(matched, vec!["Python", "python"]);
    }

    #[test]
    fn test_threshold_is_respected() {
        let index = ResumeIndex::new("deployed on kubernetas clusters", Tokenizer::shared());
        assert!(SkillMatcher::new(95.0).match_skill(&index, "kubernetes").is_none());
        assert!(SkillMatcher::new(85.0).match_skill(&index, "kubernetes").is_some());
    }

    #[test]
    fn test_dropped_letter_is_a_fuzzy_match() {
        let index = ResumeIndex::new("deployed on kubernets clusters", Tokenizer::shared());
        assert_eq!(
            SkillMatcher::default().match_skill(&index, "Kubernetes"),
            Some(MatchKind::Fuzzy(90.0))
        );
    }

    #[test]
    fn test_resume_text_is_lowercased_before_matching() {
        let matched = SkillMatcher::default().match_skills(
            "Senior RUST Engineer",
            &skills(&["rust"]),
            Tokenizer::shared(),
        );
        assert_eq!(matched, vec!["rust"]);
    }
}
