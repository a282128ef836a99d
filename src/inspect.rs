use interview_bot::error::AppError;
use interview_bot::workflows::screening::{
    RuleSet, ScoringEngine, ValidationEngine, ValidationKind,
};
use std::io::Write;
use std::sync::Arc;

pub(crate) fn check_rules<W: Write>(rules: &RuleSet, output: &mut W) -> Result<(), AppError> {
    let validator = ValidationEngine::new(Arc::new(rules.clone()));
    let weights = &rules.scoring_weights;

    writeln!(output, "Role: {}", rules.role_name)?;
    writeln!(output, "Questions: {}", rules.questions.len())?;
    for (index, question) in rules.questions.iter().enumerate() {
        writeln!(output, "  Q{}: {question}", index + 1)?;
        if let Some(rule) = validator.rule_for(question) {
            match rule.kind {
                ValidationKind::MinWords => writeln!(
                    output,
                    "      requires at least {} words (matched '{}')",
                    rule.value, rule.question_fragment
                )?,
            }
        }
    }
    writeln!(output, "Deal-breakers: {}", rules.deal_breakers.join(", "))?;
    writeln!(output, "Required intents: {}", rules.required_intents.join(", "))?;
    writeln!(
        output,
        "Weights: communication {} | role_understanding {} | technical_fit {} (max score {})",
        weights.communication,
        weights.role_understanding,
        weights.technical_fit,
        weights.total() * 10.0
    )?;
    Ok(())
}

pub(crate) fn score_answer<W: Write>(
    rules: &RuleSet,
    answer: &str,
    output: &mut W,
) -> Result<(), AppError> {
    let engine = ScoringEngine::new(Arc::new(rules.clone()));
    let breakdown = engine.breakdown(answer);

    if let Some(fragment) = &breakdown.deal_breaker {
        writeln!(output, "Deal-breaker '{fragment}' found: score 0")?;
        return Ok(());
    }

    for component in &breakdown.components {
        writeln!(
            output,
            "- {}: {} points x {} = {} ({})",
            component.category.label(),
            component.points,
            component.weight,
            component.score,
            component.notes
        )?;
    }
    writeln!(output, "Score: {}", breakdown.total)?;
    Ok(())
}
