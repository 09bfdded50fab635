use anyhow::Result;
use chrono::Utc;
use ideation_schemas::{ChatResponse, InputAnalysis, Mood, SuggestedIdea};
use regex::Regex;
use tracing::{debug, info};

use crate::templates::{
    domain_keywords, followup_questions, idea_questions, idea_templates, related_domains,
    response_text, KeywordRule, CHAT_DOMAINS, FALLBACK_KEY_TERM, GENERAL_DOMAIN,
    GENERAL_KEYWORDS, STOP_WORDS, TAG_RULES,
};

/// Ideas suggested per chat turn
pub const IDEAS_PER_RESPONSE: usize = 2;
const MAX_KEY_TERMS: usize = 3;
const MAX_FOLLOWUPS: usize = 4;

/// Keyword classifier plus template filler for chat front ends.
///
/// Every check is a plain substring test on the lowercased input, so short
/// keywords such as "ai" or "art" also fire inside longer words.
pub struct ChatEngine {
    punctuation: Regex,
}

impl ChatEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            punctuation: Regex::new(r"[^A-Za-z0-9_\s]")?,
        })
    }

    /// Answer one user message: classify it, suggest ideas, ask follow-ups
    pub fn generate_response(&self, user_input: &str) -> ChatResponse {
        let analysis = self.analyze_input(user_input);
        let ideas = self.generate_ideas(&analysis, user_input, IDEAS_PER_RESPONSE);
        let followup_questions = self.generate_followup_questions(&analysis, &ideas);
        let mood = mood_for(&analysis, &ideas);

        info!(
            "Chat response: domain={}, confidence={:.1}, ideas={}, mood={}",
            analysis.domain,
            analysis.confidence,
            ideas.len(),
            mood.as_str()
        );

        ChatResponse {
            response_text: response_text(&analysis.domain).to_string(),
            analysis,
            ideas,
            followup_questions,
            mood,
        }
    }

    /// Pick the best-scoring domain. Ties keep the earlier domain; no hits means `general`.
    pub fn analyze_input(&self, user_input: &str) -> InputAnalysis {
        let input = user_input.to_lowercase();
        let general_score = rule_score(&input, &GENERAL_KEYWORDS);

        let scores: Vec<(&str, u32)> = CHAT_DOMAINS
            .iter()
            .map(|domain| (*domain, general_score + rule_score(&input, domain_keywords(domain))))
            .collect();
        debug!("Domain scores: {:?}", scores);

        let mut best_domain = GENERAL_DOMAIN;
        let mut best_score = 0;
        for &(domain, score) in &scores {
            if score > best_score {
                best_domain = domain;
                best_score = score;
            }
        }

        let confidence = if best_score > 0 {
            (best_score as f64 / 10.0).min(1.0)
        } else {
            0.0
        };

        let related = related_domains(best_domain)
            .iter()
            .filter(|related| {
                scores
                    .iter()
                    .any(|(domain, score)| domain == *related && *score > 0)
            })
            .map(|related| related.to_string())
            .collect();

        InputAnalysis {
            domain: best_domain.to_string(),
            confidence,
            related_domains: related,
        }
    }

    /// Fill the first `count` templates of the domain with the user's first key term
    pub fn generate_ideas(
        &self,
        analysis: &InputAnalysis,
        user_input: &str,
        count: usize,
    ) -> Vec<SuggestedIdea> {
        let Some(templates) = idea_templates(&analysis.domain) else {
            debug!("No templates for domain {}", analysis.domain);
            return Vec::new();
        };

        let key_terms = self.extract_key_terms(user_input);
        let placeholder = key_terms
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_KEY_TERM);
        let millis = Utc::now().timestamp_millis();

        templates
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, template)| {
                let text = template.replace("{domain}", placeholder);
                SuggestedIdea {
                    id: format!("{}-{}-{}", analysis.domain, i, millis),
                    tags: generate_tags(&text, &analysis.domain),
                    text,
                    domain: analysis.domain.clone(),
                    relevance: analysis.confidence,
                }
            })
            .collect()
    }

    /// Up to three distinct words longer than two characters, stop words removed
    pub fn extract_key_terms(&self, user_input: &str) -> Vec<String> {
        let lower = user_input.to_lowercase();
        let cleaned = self.punctuation.replace_all(&lower, " ");

        let mut terms: Vec<String> = Vec::new();
        for word in cleaned.split_whitespace() {
            if word.len() <= 2 || STOP_WORDS.contains(&word) {
                continue;
            }
            if terms.iter().any(|term| term == word) {
                continue;
            }
            terms.push(word.to_string());
            if terms.len() == MAX_KEY_TERMS {
                break;
            }
        }
        terms
    }

    pub fn generate_followup_questions(
        &self,
        analysis: &InputAnalysis,
        ideas: &[SuggestedIdea],
    ) -> Vec<String> {
        let mut questions: Vec<String> = followup_questions(&analysis.domain)
            .iter()
            .take(3)
            .map(|q| q.to_string())
            .collect();

        if let Some(first) = ideas.first() {
            questions.extend(idea_questions(&first.domain).iter().map(|q| q.to_string()));
        }

        questions.truncate(MAX_FOLLOWUPS);
        questions
    }
}

fn rule_score(input: &str, rules: &[KeywordRule]) -> u32 {
    rules
        .iter()
        .filter(|(terms, _)| terms.iter().any(|term| input.contains(term)))
        .map(|(_, weight)| weight)
        .sum()
}

/// The domain first, then keyword-triggered tags, without duplicates
pub fn generate_tags(idea_text: &str, domain: &str) -> Vec<String> {
    let lower = idea_text.to_lowercase();
    let mut tags = vec![domain.to_string()];

    for (triggers, added) in TAG_RULES {
        if triggers.iter().any(|trigger| lower.contains(trigger)) {
            for tag in added {
                if !tags.iter().any(|existing| existing == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
    }
    tags
}

pub fn mood_for(analysis: &InputAnalysis, ideas: &[SuggestedIdea]) -> Mood {
    if analysis.confidence > 0.7 {
        Mood::Excited
    } else if !ideas.is_empty() {
        Mood::Happy
    } else {
        Mood::Thinking
    }
}
