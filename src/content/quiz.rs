//! MCQ fetch, grading, and the per-user attempt log.

use std::collections::BTreeMap;

use chrono::Utc;
use rusqlite::{params_from_iter, types::Value, Connection, OptionalExtension};
use serde::Serialize;
use uuid::Uuid;

use crate::localize::{resolve, Lang};
use crate::models::{Answer, Difficulty, QuizAttemptView};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;
pub const HISTORY_LIMIT: i64 = 20;

#[derive(Debug, Clone, Default)]
pub struct QuizFilter {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub limit: Option<i64>,
}

/// One question as served to the client. The correct answer and explanation
/// stay server-side until the quiz is submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub article_title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSet {
    pub questions: Vec<QuizQuestion>,
    pub total: usize,
    pub by_difficulty: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
}

/// Fetch questions matching the filter. `limit` defaults to 10 and is
/// clamped to 1..=50. Histograms are computed over the returned set.
pub fn fetch(conn: &Connection, lang: Lang, filter: &QuizFilter) -> rusqlite::Result<QuizSet> {
    let mut sql = String::from(
        "SELECT m.id, m.question, m.option_a, m.option_b, m.option_c, m.option_d,
                m.difficulty, m.category, a.title_en, a.title_hi, a.title_ta
         FROM mcqs m LEFT JOIN articles a ON a.id = m.article_id",
    );
    let mut where_parts: Vec<&str> = Vec::new();
    let mut params: Vec<Value> = Vec::new();
    if let Some(category) = &filter.category {
        where_parts.push("m.category = ?");
        params.push(Value::Text(category.clone()));
    }
    if let Some(difficulty) = filter.difficulty {
        where_parts.push("m.difficulty = ?");
        params.push(Value::Text(difficulty.to_string()));
    }
    if !where_parts.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_parts.join(" AND "));
    }
    sql.push_str(" ORDER BY m.id LIMIT ?");
    params.push(Value::Integer(
        filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
    ));

    let mut stmt = conn.prepare(&sql)?;
    let questions = stmt
        .query_map(params_from_iter(params.iter()), |row| {
            let difficulty: String = row.get(6)?;
            let title_en: Option<String> = row.get(8)?;
            let title_hi: Option<String> = row.get(9)?;
            let title_ta: Option<String> = row.get(10)?;
            Ok(QuizQuestion {
                id: row.get(0)?,
                question: row.get(1)?,
                option_a: row.get(2)?,
                option_b: row.get(3)?,
                option_c: row.get(4)?,
                option_d: row.get(5)?,
                difficulty: difficulty.parse().unwrap_or(Difficulty::Medium),
                category: row.get(7)?,
                article_title: title_en
                    .map(|en| resolve(lang, &en, title_hi.as_deref(), title_ta.as_deref())),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut by_difficulty = BTreeMap::new();
    let mut by_category = BTreeMap::new();
    for question in &questions {
        *by_difficulty
            .entry(question.difficulty.to_string())
            .or_insert(0) += 1;
        *by_category.entry(question.category.clone()).or_insert(0) += 1;
    }

    Ok(QuizSet {
        total: questions.len(),
        by_difficulty,
        by_category,
        questions,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReview {
    pub question_id: i64,
    pub selected_answer: Answer,
    /// None when the question id is unknown.
    pub correct_answer: Option<Answer>,
    pub correct: bool,
    pub found: bool,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub score: i64,
    pub total: i64,
    pub percentage: i64,
    pub performance: &'static str,
    pub review: Vec<AnswerReview>,
}

/// Grade a submission. Unknown question ids count as incorrect but are
/// flagged `found: false` so the client can tell them apart. The caller
/// rejects empty submissions before grading.
pub fn grade(conn: &Connection, answers: &[(i64, Answer)]) -> rusqlite::Result<QuizOutcome> {
    let mut stmt = conn.prepare("SELECT correct_answer, explanation FROM mcqs WHERE id = ?1")?;
    let mut review = Vec::with_capacity(answers.len());
    let mut score = 0i64;

    for &(question_id, selected) in answers {
        let stored = stmt
            .query_row([question_id], |row| {
                let letter: String = row.get(0)?;
                let explanation: String = row.get(1)?;
                Ok((letter, explanation))
            })
            .optional()?;
        match stored {
            Some((letter, explanation)) => {
                let correct_answer = letter.parse::<Answer>().ok();
                let correct = correct_answer == Some(selected);
                if correct {
                    score += 1;
                }
                review.push(AnswerReview {
                    question_id,
                    selected_answer: selected,
                    correct_answer,
                    correct,
                    found: true,
                    explanation: Some(explanation),
                });
            }
            None => review.push(AnswerReview {
                question_id,
                selected_answer: selected,
                correct_answer: None,
                correct: false,
                found: false,
                explanation: None,
            }),
        }
    }

    let total = answers.len() as i64;
    let percentage = if total > 0 {
        (100.0 * score as f64 / total as f64).round() as i64
    } else {
        0
    };

    Ok(QuizOutcome {
        score,
        total,
        percentage,
        performance: performance(percentage),
        review,
    })
}

fn performance(percentage: i64) -> &'static str {
    if percentage >= 80 {
        "Excellent"
    } else if percentage >= 60 {
        "Good"
    } else if percentage >= 40 {
        "Average"
    } else {
        "Need Improvement"
    }
}

/// Append one attempt row. Callers treat failures as best-effort: log and
/// move on, the graded outcome is still returned.
pub fn record_attempt(
    conn: &Connection,
    user_id: &str,
    outcome: &QuizOutcome,
    time_spent: Option<i64>,
    category: Option<&str>,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO quiz_attempts (id, user_id, score, total, time_spent, category, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        (
            Uuid::new_v4().to_string(),
            user_id,
            outcome.score,
            outcome.total,
            time_spent,
            category,
            Utc::now().to_rfc3339(),
        ),
    )?;
    Ok(())
}

/// Most recent attempts for a user, newest first.
pub fn history(conn: &Connection, user_id: &str) -> rusqlite::Result<Vec<QuizAttemptView>> {
    let mut stmt = conn.prepare(
        "SELECT id, score, total, time_spent, category, created_at
         FROM quiz_attempts WHERE user_id = ?1
         ORDER BY created_at DESC LIMIT ?2",
    )?;
    let rows = stmt
        .query_map((user_id, HISTORY_LIMIT), |row| {
            Ok(QuizAttemptView {
                id: row.get(0)?,
                score: row.get(1)?,
                total: row.get(2)?,
                time_spent: row.get(3)?,
                category: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
