//! Symptom narrative rendering.
//!
//! The advisory generator consumes a plain-language summary of the findings.
//! Rendering is deterministic — same breakdown, same sentence — so the text
//! can be reproduced for any stored record. The generated advisory itself is
//! external; only the input narrative is built here.

use crate::scale::ScalePolicy;
use crate::scoring::ScoreBreakdown;
use crate::survey::SurveyAnswers;
use crate::upstream::AiFinding;

fn presence(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "absent"
    }
}

/// Renders the findings of one completed assessment into the narrative
/// string handed to the advisory generator.
///
/// Survey fields are listed in scale order, followed by the two AI findings
/// and the orientation checks. Fields the survey did not answer are skipped;
/// a validated survey answers every declared field.
pub fn render(
    scale: &ScalePolicy,
    answers: &SurveyAnswers,
    face: AiFinding,
    speech: AiFinding,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut findings = Vec::with_capacity(scale.fields().len() + 4);

    for spec in scale.fields() {
        if let Some(value) = answers.answer(spec.name) {
            let label = spec.name.replace('_', " ");
            if spec.max > 1 {
                findings.push(format!("{label} abnormality score {value} of {}", spec.max));
            } else {
                findings.push(format!("{label} abnormality {}", presence(value > 0)));
            }
        }
    }

    findings.push(format!("facial droop {}", presence(face.detected)));
    findings.push(format!("slurred speech {}", presence(speech.detected)));
    findings.push(format!(
        "month disorientation {}",
        presence(!breakdown.orientation.month_correct)
    ));
    findings.push(format!(
        "age disorientation {}",
        presence(!breakdown.orientation.age_correct)
    ));

    format!("Patient presents with: {}.", findings.join(", "))
}
